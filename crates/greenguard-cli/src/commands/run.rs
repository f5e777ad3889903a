//! Launch the interactive TUI dashboard.

use std::time::Instant;

use greenguard_core::engine::InputEvent;

pub fn run(seed: Option<u64>, demo: bool) {
    let now = Instant::now();
    let mut engine = super::make_engine(seed, now);
    if demo {
        engine.handle(InputEvent::ToggleDemoMode, now);
    }

    let mut app = crate::tui::app::App::new(engine);
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
