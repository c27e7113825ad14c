use fltk::{enums::Color, prelude::*, text::TextEditor, window::Window};

use super::control_strip::ControlStrip;

/// Apply the fixed dark palette once at startup.
///
/// A single palette, not a theming system: the note is meant to sit
/// unobtrusively on top of other windows.
pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, strip: &mut ControlStrip) {
    editor.set_color(Color::from_rgb(30, 30, 30));
    editor.set_text_color(Color::from_rgb(220, 220, 220));
    editor.set_cursor_color(Color::from_rgb(255, 255, 255));
    editor.set_selection_color(Color::from_rgb(70, 70, 100));

    window.set_color(Color::from_rgb(25, 25, 25));

    strip.apply_theme();

    editor.redraw();
    window.redraw();
}
