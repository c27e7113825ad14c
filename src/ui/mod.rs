pub mod control_strip;
pub mod main_window;
pub mod theme;
