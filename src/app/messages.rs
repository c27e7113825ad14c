use super::shell::Pointer;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// hands them to [`AppState::handle`](super::state::AppState::handle).
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleLock,

    DragBegin(Pointer),
    DragMove(Pointer),
    DragEnd,

    ResizeBegin(Pointer),
    ResizeMove(Pointer),
    ResizeEnd,

    Close,
}
