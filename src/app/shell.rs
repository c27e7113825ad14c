//! Lock, drag and resize logic for the note window.
//!
//! [`WindowShell`] owns the lock flag and the pointer gesture in progress.
//! It never touches FLTK: callers feed it pointer positions plus the current
//! window geometry and apply whatever geometry it hands back.

/// Minimum window width in pixels.
pub const MIN_WIDTH: i32 = 300;

/// Minimum window height in pixels.
pub const MIN_HEIGHT: i32 = 200;

/// Window position and size at startup.
pub const INITIAL_GEOMETRY: Geometry = Geometry {
    x: 50,
    y: 50,
    w: MIN_WIDTH,
    h: MIN_HEIGHT,
};

/// A pointer position in screen (root) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

/// Window position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gesture {
    Drag,
    Resize,
}

/// Interaction state of the note window: the lock flag plus the anchor of
/// the pointer gesture in progress, if any.
///
/// The anchor is tagged with the gesture that set it, so a motion event can
/// only advance the gesture that is actually active.
#[derive(Debug)]
pub struct WindowShell {
    locked: bool,
    gesture: Option<(Gesture, Pointer)>,
}

impl WindowShell {
    /// The shell starts locked so a stray click cannot move or close the note.
    pub fn new() -> Self {
        Self {
            locked: true,
            gesture: None,
        }
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Flip the lock flag and return the new value.
    ///
    /// Locking cancels any gesture in progress; geometry is only ever
    /// mutated while unlocked, and a stale anchor must not resume a
    /// gesture after a later unlock.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        if self.locked {
            self.gesture = None;
        }
        self.locked
    }

    /// Record `pointer` as the drag anchor. Ignored while locked.
    pub fn begin_drag(&mut self, pointer: Pointer) {
        if !self.locked {
            self.gesture = Some((Gesture::Drag, pointer));
        }
    }

    /// Record `pointer` as the resize anchor. Ignored while locked.
    pub fn begin_resize(&mut self, pointer: Pointer) {
        if !self.locked {
            self.gesture = Some((Gesture::Resize, pointer));
        }
    }

    /// Advance the active drag to `pointer` and return the moved geometry.
    ///
    /// Returns `None` while locked, when no gesture is in progress, or when
    /// the active gesture is a resize.
    pub fn drag_to(&mut self, pointer: Pointer, current: Geometry) -> Option<Geometry> {
        if self.locked {
            return None;
        }
        match self.gesture {
            Some((Gesture::Drag, anchor)) => {
                let dx = pointer.x - anchor.x;
                let dy = pointer.y - anchor.y;
                self.gesture = Some((Gesture::Drag, pointer));
                Some(Geometry {
                    x: current.x + dx,
                    y: current.y + dy,
                    ..current
                })
            }
            _ => None,
        }
    }

    /// Advance the active resize to `pointer` and return the resized
    /// geometry, clamped to [`MIN_WIDTH`] x [`MIN_HEIGHT`].
    ///
    /// Delta beyond the minimum is discarded, not redistributed: the anchor
    /// still advances, so shrinking past the minimum and turning around does
    /// not replay the lost distance.
    pub fn resize_to(&mut self, pointer: Pointer, current: Geometry) -> Option<Geometry> {
        if self.locked {
            return None;
        }
        match self.gesture {
            Some((Gesture::Resize, anchor)) => {
                let dx = pointer.x - anchor.x;
                let dy = pointer.y - anchor.y;
                self.gesture = Some((Gesture::Resize, pointer));
                Some(Geometry {
                    w: (current.w + dx).max(MIN_WIDTH),
                    h: (current.h + dy).max(MIN_HEIGHT),
                    ..current
                })
            }
            _ => None,
        }
    }

    /// Clear the drag anchor. A resize in progress is left alone.
    pub fn end_drag(&mut self) {
        if matches!(self.gesture, Some((Gesture::Drag, _))) {
            self.gesture = None;
        }
    }

    /// Clear the resize anchor. A drag in progress is left alone.
    pub fn end_resize(&mut self) {
        if matches!(self.gesture, Some((Gesture::Resize, _))) {
            self.gesture = None;
        }
    }

    /// Closing is gated on the lock so a pinned note cannot be dismissed
    /// accidentally.
    pub fn allows_close(&self) -> bool {
        !self.locked
    }
}

impl Default for WindowShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_shell() -> WindowShell {
        let mut shell = WindowShell::new();
        shell.toggle_lock();
        shell
    }

    #[test]
    fn test_starts_locked() {
        let shell = WindowShell::new();
        assert!(shell.locked());
        assert!(!shell.allows_close());
    }

    #[test]
    fn test_toggle_lock_even_times_restores_state() {
        let mut shell = WindowShell::new();
        assert!(!shell.toggle_lock());
        assert!(shell.toggle_lock());
        assert!(shell.locked());
        assert!(!shell.toggle_lock());
        assert!(shell.toggle_lock());
        assert!(shell.locked());
    }

    #[test]
    fn test_drag_accumulates_per_move_deltas() {
        let mut shell = unlocked_shell();
        let mut geom = Geometry { x: 100, y: 100, w: 400, h: 300 };

        shell.begin_drag(Pointer { x: 10, y: 10 });
        geom = shell.drag_to(Pointer { x: 15, y: 12 }, geom).unwrap();
        geom = shell.drag_to(Pointer { x: 30, y: 5 }, geom).unwrap();
        geom = shell.drag_to(Pointer { x: 28, y: 40 }, geom).unwrap();
        shell.end_drag();

        // Final position = initial + total pointer travel (28-10, 40-10)
        assert_eq!(geom, Geometry { x: 118, y: 130, w: 400, h: 300 });
    }

    #[test]
    fn test_drag_does_not_change_size() {
        let mut shell = unlocked_shell();
        let geom = Geometry { x: 0, y: 0, w: 350, h: 250 };
        shell.begin_drag(Pointer { x: 0, y: 0 });
        let moved = shell.drag_to(Pointer { x: 100, y: 100 }, geom).unwrap();
        assert_eq!((moved.w, moved.h), (350, 250));
    }

    #[test]
    fn test_drag_ignored_while_locked() {
        // Scenario: start locked at (50,50,300,200); unlock; drag by
        // (+20,-10); lock; a further drag attempt changes nothing.
        let mut shell = WindowShell::new();
        let mut geom = INITIAL_GEOMETRY;

        shell.begin_drag(Pointer { x: 0, y: 0 });
        assert_eq!(shell.drag_to(Pointer { x: 99, y: 99 }, geom), None);

        shell.toggle_lock();
        shell.begin_drag(Pointer { x: 200, y: 200 });
        geom = shell.drag_to(Pointer { x: 220, y: 190 }, geom).unwrap();
        shell.end_drag();
        assert_eq!((geom.x, geom.y), (70, 40));

        shell.toggle_lock();
        shell.begin_drag(Pointer { x: 0, y: 0 });
        assert_eq!(shell.drag_to(Pointer { x: 100, y: 100 }, geom), None);
        assert_eq!((geom.x, geom.y), (70, 40));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut shell = unlocked_shell();
        let geom = Geometry { x: 50, y: 50, w: 300, h: 200 };
        shell.begin_resize(Pointer { x: 500, y: 500 });
        let resized = shell.resize_to(Pointer { x: 0, y: 0 }, geom).unwrap();
        assert_eq!(resized, Geometry { x: 50, y: 50, w: MIN_WIDTH, h: MIN_HEIGHT });
    }

    #[test]
    fn test_resize_clamps_each_dimension_independently() {
        let mut shell = unlocked_shell();
        let geom = Geometry { x: 0, y: 0, w: 400, h: 200 };
        shell.begin_resize(Pointer { x: 0, y: 0 });
        let resized = shell.resize_to(Pointer { x: -50, y: -50 }, geom).unwrap();
        assert_eq!((resized.w, resized.h), (350, MIN_HEIGHT));
    }

    #[test]
    fn test_resize_discarded_delta_is_not_replayed() {
        // Shrink 100px past the minimum, then grow 10px: the lost distance
        // must not be replayed, so the result is minimum + 10.
        let mut shell = unlocked_shell();
        let mut geom = Geometry { x: 0, y: 0, w: MIN_WIDTH, h: MIN_HEIGHT };
        shell.begin_resize(Pointer { x: 100, y: 100 });
        geom = shell.resize_to(Pointer { x: 0, y: 0 }, geom).unwrap();
        assert_eq!((geom.w, geom.h), (MIN_WIDTH, MIN_HEIGHT));
        geom = shell.resize_to(Pointer { x: 10, y: 10 }, geom).unwrap();
        assert_eq!((geom.w, geom.h), (MIN_WIDTH + 10, MIN_HEIGHT + 10));
    }

    #[test]
    fn test_resize_never_moves_window() {
        let mut shell = unlocked_shell();
        let geom = Geometry { x: 70, y: 40, w: 400, h: 300 };
        shell.begin_resize(Pointer { x: 0, y: 0 });
        let resized = shell.resize_to(Pointer { x: 25, y: 25 }, geom).unwrap();
        assert_eq!((resized.x, resized.y), (70, 40));
        assert_eq!((resized.w, resized.h), (425, 325));
    }

    #[test]
    fn test_motion_without_anchor_is_noop() {
        let mut shell = unlocked_shell();
        let geom = INITIAL_GEOMETRY;
        assert_eq!(shell.drag_to(Pointer { x: 10, y: 10 }, geom), None);
        assert_eq!(shell.resize_to(Pointer { x: 10, y: 10 }, geom), None);
    }

    #[test]
    fn test_motion_with_wrong_gesture_is_noop() {
        let mut shell = unlocked_shell();
        let geom = INITIAL_GEOMETRY;

        shell.begin_drag(Pointer { x: 0, y: 0 });
        assert_eq!(shell.resize_to(Pointer { x: 10, y: 10 }, geom), None);

        shell.begin_resize(Pointer { x: 0, y: 0 });
        assert_eq!(shell.drag_to(Pointer { x: 10, y: 10 }, geom), None);
    }

    #[test]
    fn test_end_drag_leaves_resize_alone() {
        let mut shell = unlocked_shell();
        shell.begin_resize(Pointer { x: 0, y: 0 });
        shell.end_drag();
        let geom = INITIAL_GEOMETRY;
        assert!(shell.resize_to(Pointer { x: 5, y: 5 }, geom).is_some());
    }

    #[test]
    fn test_gesture_does_not_survive_release() {
        let mut shell = unlocked_shell();
        let geom = INITIAL_GEOMETRY;
        shell.begin_drag(Pointer { x: 0, y: 0 });
        shell.end_drag();
        assert_eq!(shell.drag_to(Pointer { x: 50, y: 50 }, geom), None);
    }

    #[test]
    fn test_locking_cancels_active_gesture() {
        let mut shell = unlocked_shell();
        let geom = INITIAL_GEOMETRY;
        shell.begin_drag(Pointer { x: 0, y: 0 });
        shell.toggle_lock();
        shell.toggle_lock();
        // Unlocked again, but the old anchor must be gone.
        assert_eq!(shell.drag_to(Pointer { x: 50, y: 50 }, geom), None);
    }

    #[test]
    fn test_close_gated_by_lock() {
        let mut shell = WindowShell::new();
        assert!(!shell.allows_close());
        shell.toggle_lock();
        assert!(shell.allows_close());
        shell.toggle_lock();
        assert!(!shell.allows_close());
    }
}
