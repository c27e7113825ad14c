//! HoverNote - a minimal always-on-top sticky note.
//!
//! The binary wires FLTK widgets to the interaction logic in
//! [`app::shell`]. Everything observable about dragging, resizing and the
//! lock lives in that module as plain data, so the whole interaction
//! contract is testable without a display.

pub mod app;
pub mod ui;
