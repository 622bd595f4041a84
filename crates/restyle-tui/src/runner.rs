//! Main TUI runner - entry point and event loop

use restyle_app::config::Settings;
use restyle_app::{signals, Engine};
use restyle_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(settings);
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine);

    if let Err(ref e) = result {
        error!("TUI loop error: {:?}", e);
    }
    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Remote results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
