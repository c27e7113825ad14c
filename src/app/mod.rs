//! Application layer.
//!
//! # Structure
//!
//! - `shell.rs` - Lock, drag and resize logic (no toolkit types)
//! - `messages.rs` - Events sent from widget callbacks to the dispatch loop
//! - `state.rs` - Main application coordinator
//! - `error.rs`, `logging.rs` - Infrastructure

pub mod error;
pub mod logging;
pub mod messages;
pub mod shell;
pub mod state;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use shell::{Geometry, Pointer, WindowShell, MIN_HEIGHT, MIN_WIDTH};
pub use state::AppState;
