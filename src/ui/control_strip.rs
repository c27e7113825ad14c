use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Color, Event, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::shell::Pointer;

pub const CONTROL_STRIP_HEIGHT: i32 = 36;

const BUTTON_WIDTH: i32 = 70;
const STRIP_PADDING: i32 = 5;

/// The row of Drag / Resize / Close buttons shown while the note is
/// unlocked.
///
/// Drag and Resize are deliberately dedicated handles rather than
/// whole-window bindings: with the frame gone there is no chrome to grab,
/// and the text area itself must keep its events for editing.
pub struct ControlStrip {
    pub widget: Flex,
    drag_button: Button,
    resize_button: Button,
    close_button: Button,
}

impl ControlStrip {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut row = Flex::new(0, 0, 0, CONTROL_STRIP_HEIGHT, None);
        row.set_type(fltk::group::FlexType::Row);
        row.set_margin(STRIP_PADDING);
        row.set_pad(STRIP_PADDING);

        let mut drag_button = Button::default().with_label("Drag");
        row.fixed(&drag_button, BUTTON_WIDTH);

        let mut resize_button = Button::default().with_label("Resize");
        row.fixed(&resize_button, BUTTON_WIDTH);

        let mut close_button = Button::default().with_label("Close");
        row.fixed(&close_button, BUTTON_WIDTH);

        // Flexible filler so the buttons hug the left edge
        let _spacer = Frame::default();

        row.end();

        bind_gesture(
            &mut drag_button,
            *sender,
            Message::DragBegin,
            Message::DragMove,
            Message::DragEnd,
        );
        bind_gesture(
            &mut resize_button,
            *sender,
            Message::ResizeBegin,
            Message::ResizeMove,
            Message::ResizeEnd,
        );

        let close_sender = *sender;
        close_button.set_callback(move |_| close_sender.send(Message::Close));

        Self {
            widget: row,
            drag_button,
            resize_button,
            close_button,
        }
    }

    /// Show the strip and give it back its height in the parent column.
    pub fn show(&mut self, flex: &mut Flex) {
        self.widget.show();
        flex.fixed(&self.widget, CONTROL_STRIP_HEIGHT);
    }

    /// Hide the strip and collapse it to zero height.
    pub fn hide(&mut self, flex: &mut Flex) {
        self.widget.hide();
        flex.fixed(&self.widget, 0);
    }

    pub fn apply_theme(&mut self) {
        self.widget.set_color(Color::from_rgb(35, 35, 35));
        for button in [&mut self.drag_button, &mut self.resize_button] {
            button.set_frame(FrameType::FlatBox);
            button.set_color(Color::from_rgb(68, 68, 68));
            button.set_label_color(Color::from_rgb(220, 220, 220));
            button.set_selection_color(Color::from_rgb(90, 90, 90));
        }
        self.close_button.set_frame(FrameType::FlatBox);
        self.close_button.set_color(Color::from_rgb(231, 76, 60));
        self.close_button.set_label_color(Color::White);
        self.close_button.set_selection_color(Color::from_rgb(192, 57, 43));
    }
}

/// Wire a button up as a press/drag/release gesture handle.
///
/// Returning `true` for `Push` makes the button the pushed widget, so it
/// keeps receiving `Drag` and `Released` until the pointer goes up even
/// when the pointer leaves the window.
fn bind_gesture(
    button: &mut Button,
    sender: Sender<Message>,
    begin: fn(Pointer) -> Message,
    advance: fn(Pointer) -> Message,
    end: Message,
) {
    button.handle(move |_, event| match event {
        Event::Push => {
            sender.send(begin(event_pointer()));
            true
        }
        Event::Drag => {
            sender.send(advance(event_pointer()));
            true
        }
        Event::Released => {
            sender.send(end);
            true
        }
        _ => false,
    });
}

/// Current pointer position in screen coordinates. Screen rather than
/// window coordinates, because the window itself moves under the pointer
/// mid-gesture.
fn event_pointer() -> Pointer {
    Pointer {
        x: app::event_x_root(),
        y: app::event_y_root(),
    }
}
