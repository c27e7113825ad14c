use fltk::{group::Flex, prelude::*, text::TextEditor, window::Window};

use super::messages::Message;
use super::shell::{Geometry, WindowShell};
use crate::ui::control_strip::ControlStrip;

/// Main application coordinator: owns the widgets and the interaction
/// shell, and applies shell decisions to the real window.
pub struct AppState {
    pub shell: WindowShell,
    pub window: Window,
    pub editor: TextEditor,
    pub flex: Flex,
    pub control_strip: ControlStrip,
}

impl AppState {
    pub fn new(
        window: Window,
        editor: TextEditor,
        flex: Flex,
        control_strip: ControlStrip,
    ) -> Self {
        Self {
            shell: WindowShell::new(),
            window,
            editor,
            flex,
            control_strip,
        }
    }

    /// Handle one message from the FLTK channel.
    /// Returns `false` when the application should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::ToggleLock => self.toggle_lock(),
            Message::DragBegin(p) => self.shell.begin_drag(p),
            Message::DragMove(p) => {
                if let Some(geom) = self.shell.drag_to(p, self.geometry()) {
                    self.apply_geometry(geom);
                }
            }
            Message::DragEnd => self.shell.end_drag(),
            Message::ResizeBegin(p) => self.shell.begin_resize(p),
            Message::ResizeMove(p) => {
                if let Some(geom) = self.shell.resize_to(p, self.geometry()) {
                    self.apply_geometry(geom);
                }
            }
            Message::ResizeEnd => self.shell.end_resize(),
            Message::Close => {
                if self.shell.allows_close() {
                    tracing::info!("closing note");
                    return false;
                }
                tracing::debug!("close ignored while locked");
            }
        }
        true
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            x: self.window.x(),
            y: self.window.y(),
            w: self.window.w(),
            h: self.window.h(),
        }
    }

    fn apply_geometry(&mut self, geom: Geometry) {
        self.window.resize(geom.x, geom.y, geom.w, geom.h);
    }

    /// Flip the lock and show or hide the control strip to match.
    fn toggle_lock(&mut self) {
        let locked = self.shell.toggle_lock();
        if locked {
            self.control_strip.hide(&mut self.flex);
        } else {
            self.control_strip.show(&mut self.flex);
        }
        self.window.redraw();
        tracing::debug!(locked, "lock toggled");
    }
}
