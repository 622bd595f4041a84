//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the message channel, the application state, the optional
//! layout service client, and the event broadcaster. Every state mutation
//! happens inside [`Engine::process_message`]; remote requests run on
//! background tasks and come back through the message channel.

use restyle_core::prelude::*;
use restyle_core::StyleState;
use restyle_remote::LayoutServiceClient;
use tokio::sync::{broadcast, mpsc};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::state::{AppState, Outcome};

/// Snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    style: StyleState,
    outcome_seq: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            style: state.style.clone(),
            outcome_seq: state.outcome_seq,
        }
    }
}

/// Orchestration engine for restyle.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (stdin reader, remote tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Layout service client. None when no credential is configured.
    client: Option<LayoutServiceClient>,

    /// Loaded settings
    pub settings: Settings,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine, building the layout service client from `settings`
    /// and the credential environment variable it names.
    pub fn new(settings: Settings) -> Self {
        let client = LayoutServiceClient::new(
            settings.remote.api_key(),
            settings.remote.client_config(),
        );
        Self::with_client(settings, client)
    }

    /// Create an Engine with an explicit (or absent) client.
    pub fn with_client(settings: Settings, client: Option<LayoutServiceClient>) -> Self {
        let state = AppState::new(settings.clone(), client.is_some());

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        info!(
            "Engine ready (remote resolution {})",
            if client.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            client,
            settings,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped and the receiver reports `Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, self.client.as_ref());

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn remote_available(&self) -> bool {
        self.client.is_some()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// In-flight remote requests are not cancelled; their results are
    /// dropped when the channel closes.
    pub fn shutdown(&mut self) {
        if self.state.pending_remote > 0 {
            info!(
                "Shutting down with {} remote request(s) in flight",
                self.state.pending_remote
            );
        }
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.outcome_seq != pre.outcome_seq {
            if let Some(event) = self.outcome_event() {
                self.emit(event);
            }
        }

        if post.style != pre.style {
            self.emit(EngineEvent::StyleChanged {
                style: post.style.clone(),
            });
        }
    }

    fn outcome_event(&self) -> Option<EngineEvent> {
        let event = match self.state.last_outcome.as_ref()? {
            Outcome::Applied { source, report } => EngineEvent::PromptResolved {
                source: *source,
                applied: report.applied.clone(),
                skipped: report.skipped.clone(),
            },
            Outcome::Reset => EngineEvent::StyleReset,
            Outcome::Discarded(reason) => EngineEvent::PromptDiscarded {
                reason: reason.clone(),
            },
            Outcome::RemoteRequested { prompt } => EngineEvent::RemoteRequestStarted {
                prompt: prompt.clone(),
                pending: self.state.pending_remote,
            },
        };
        Some(event)
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() fails only when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
