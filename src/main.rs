use fltk::{app, prelude::*};

use hover_note::app::error::Result;
use hover_note::app::logging;
use hover_note::app::messages::Message;
use hover_note::app::state::AppState;
use hover_note::ui::main_window::build_main_window;
use hover_note::ui::theme::apply_theme;

fn main() {
    logging::init_default();
    if let Err(err) = run() {
        tracing::error!(%err, "startup failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender)?;
    apply_theme(
        &mut widgets.text_editor,
        &mut widgets.wind,
        &mut widgets.control_strip,
    );

    widgets.wind.show();
    // Must come after show so the platform window exists.
    widgets.wind.set_on_top();

    let mut state = AppState::new(
        widgets.wind,
        widgets.text_editor,
        widgets.flex,
        widgets.control_strip,
    );

    tracing::info!("note pinned, Ctrl+Space to unlock");

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                app::quit();
            }
        }
    }

    Ok(())
}
