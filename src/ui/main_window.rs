use fltk::{
    app::{self, Sender},
    enums::{Event, EventState, Key},
    group::Flex,
    image::SvgImage,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::error::Result;
use crate::app::messages::Message;
use crate::app::shell::{INITIAL_GEOMETRY, MIN_HEIGHT, MIN_WIDTH};
use super::control_strip::ControlStrip;

// Sticky-note window icon for the taskbar; the window itself has no chrome.
const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
<rect x="2" y="2" width="28" height="28" rx="3" fill="#f1c40f"/>
<path d="M22 30 L30 22 L22 22 Z" fill="#d4ac0d"/>
</svg>"##;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub text_editor: TextEditor,
    pub control_strip: ControlStrip,
}

/// Build the chromeless note window: a scrollable editor filling the
/// window with the control strip along the bottom, collapsed until the
/// note is unlocked.
pub fn build_main_window(sender: &Sender<Message>) -> Result<MainWidgets> {
    let mut wind = Window::new(
        INITIAL_GEOMETRY.x,
        INITIAL_GEOMETRY.y,
        INITIAL_GEOMETRY.w,
        INITIAL_GEOMETRY.h,
        "Hover Note",
    );
    wind.set_xclass("HoverNote");
    wind.set_border(false);

    let mut icon = SvgImage::from_data(ICON_SVG)?;
    icon.scale(32, 32, true, true);
    #[cfg(target_os = "linux")]
    wind.set_icon(Some(icon));

    let mut flex = Flex::new(0, 0, INITIAL_GEOMETRY.w, INITIAL_GEOMETRY.h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_scrollbar_size(12);
    text_editor.set_text_size(14);

    // Control strip (collapsed; the note starts locked)
    let mut control_strip = ControlStrip::new(sender);
    control_strip.widget.hide();
    flex.fixed(&control_strip.widget, 0);

    flex.end();
    wind.resizable(&flex);
    wind.size_range(MIN_WIDTH, MIN_HEIGHT, 0, 0);
    wind.end();

    // Ctrl+Space toggles the lock from anywhere in the window.
    let toggle_sender = *sender;
    wind.handle(move |_, event| match event {
        Event::KeyDown
            if app::event_key() == Key::from_char(' ')
                && app::event_state().contains(EventState::Ctrl) =>
        {
            toggle_sender.send(Message::ToggleLock);
            true
        }
        _ => false,
    });

    Ok(MainWidgets {
        wind,
        flex,
        text_editor,
        control_strip,
    })
}
