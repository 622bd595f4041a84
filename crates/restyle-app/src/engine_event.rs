//! Domain events emitted by the Engine for external consumers
//!
//! Front ends subscribe with `Engine::subscribe()`. Events are broadcast
//! after each message processing cycle, so subscribers see a consistent view
//! of state changes.

use restyle_core::{SkippedLeaf, StyleState};

use crate::pipeline::{DiscardReason, InstructionSource};

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The style differs from before the message. Carries the full snapshot.
    StyleChanged { style: StyleState },

    /// The style was restored to its defaults
    StyleReset,

    /// A prompt or remote result was merged
    PromptResolved {
        source: InstructionSource,
        applied: Vec<&'static str>,
        skipped: Vec<SkippedLeaf>,
    },

    /// A prompt or remote result left the style unchanged
    PromptDiscarded { reason: DiscardReason },

    /// A prompt was sent to the layout service
    RemoteRequestStarted { prompt: String, pending: usize },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::StyleChanged { .. } => "style_changed",
            EngineEvent::StyleReset => "style_reset",
            EngineEvent::PromptResolved { .. } => "prompt_resolved",
            EngineEvent::PromptDiscarded { .. } => "prompt_discarded",
            EngineEvent::RemoteRequestStarted { .. } => "remote_request_started",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
