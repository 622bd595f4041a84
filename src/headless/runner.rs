//! Headless mode runner - main event loop without TUI
//!
//! Reads prompts from stdin, runs them through the engine, and writes the
//! resulting engine events to stdout as NDJSON.

use std::io::Write;

use restyle_app::config::Settings;
use restyle_app::{signals, Engine, EngineEvent, Message};
use restyle_core::prelude::*;
use tokio::sync::{broadcast, mpsc};

use super::HeadlessEvent;

/// Run in headless mode until stdin closes or `:quit` is read
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("restyle starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings);
    let mut events = engine.subscribe();

    signals::spawn_signal_handler(engine.msg_sender());

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let mut stdout = std::io::stdout();
    HeadlessEvent::ready(engine.remote_available()).write_to(&mut stdout);

    let result = headless_event_loop(&mut engine, &mut events, &mut stdout).await;

    engine.shutdown();
    emit_engine_events(&mut events, &mut stdout);

    info!("restyle headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut impl Write,
) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                emit_engine_events(events, out);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Write every engine event received so far
fn emit_engine_events(events: &mut broadcast::Receiver<EngineEvent>, out: &mut impl Write) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from(event).write_to(out),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output fell behind, {} events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Map one stdin line to a message. Blank lines map to nothing.
fn parse_stdin_line(line: &str) -> Option<Message> {
    match line.trim() {
        "" => None,
        ":quit" => Some(Message::Quit),
        ":reset" => Some(Message::Reset),
        prompt => Some(Message::Prompt(prompt.to_string())),
    }
}

/// Read stdin lines into the message channel (blocking; runs on its own thread)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let Some(message) = parse_stdin_line(&line) else {
                    continue;
                };
                let quit = matches!(message, Message::Quit);
                if msg_tx.blocking_send(message).is_err() {
                    return;
                }
                if quit {
                    info!("Stdin: quit requested");
                    return;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin closed");
    let _ = msg_tx.blocking_send(Message::InputClosed);
}
