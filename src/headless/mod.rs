//! Headless mode - NDJSON event output
//!
//! Prompts are read line by line from stdin and the resulting engine events
//! are written to stdout as NDJSON (newline-delimited JSON), one event per
//! line. Each event has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","remote_available":false,"timestamp":1704700001000}
//! {"event":"prompt_resolved","source":"pattern","applied":["layout.spacing"],"skipped":[],"timestamp":1704700002000}
//! {"event":"style_changed","style":{...},"timestamp":1704700002000}
//! {"event":"prompt_discarded","reason":"remote_unavailable","timestamp":1704700003000}
//! ```

pub mod runner;

use chrono::Utc;
use restyle_app::{DiscardReason, EngineEvent, InstructionSource};
use restyle_core::{SkippedLeaf, StyleState};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is ready for prompts
    Ready {
        remote_available: bool,
        timestamp: i64,
    },

    /// Full style snapshot after a change
    StyleChanged { style: StyleState, timestamp: i64 },

    /// Style restored to defaults
    StyleReset { timestamp: i64 },

    PromptResolved {
        source: InstructionSource,
        applied: Vec<&'static str>,
        skipped: Vec<SkippedLeaf>,
        timestamp: i64,
    },

    PromptDiscarded {
        #[serde(flatten)]
        reason: DiscardReason,
        timestamp: i64,
    },

    RemoteRequestStarted {
        prompt: String,
        pending: usize,
        timestamp: i64,
    },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to(&self, out: &mut impl Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(remote_available: bool) -> Self {
        Self::Ready {
            remote_available,
            timestamp: Self::now(),
        }
    }
}

impl From<EngineEvent> for HeadlessEvent {
    fn from(event: EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::StyleChanged { style } => Self::StyleChanged { style, timestamp },
            EngineEvent::StyleReset => Self::StyleReset { timestamp },
            EngineEvent::PromptResolved {
                source,
                applied,
                skipped,
            } => Self::PromptResolved {
                source,
                applied,
                skipped,
                timestamp,
            },
            EngineEvent::PromptDiscarded { reason } => Self::PromptDiscarded { reason, timestamp },
            EngineEvent::RemoteRequestStarted { prompt, pending } => Self::RemoteRequestStarted {
                prompt,
                pending,
                timestamp,
            },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out);
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).unwrap()
    }

    #[test]
    fn test_ready_event() {
        let json = to_json(&HeadlessEvent::ready(true));
        assert_eq!(json["event"], "ready");
        assert_eq!(json["remote_available"], true);
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_style_changed_carries_snapshot() {
        let event = HeadlessEvent::from(EngineEvent::StyleChanged {
            style: StyleState::default(),
        });
        let json = to_json(&event);

        assert_eq!(json["event"], "style_changed");
        assert_eq!(json["style"]["background"], "#F9FAFB");
    }

    #[test]
    fn test_discard_reason_flattened() {
        let event = HeadlessEvent::from(EngineEvent::PromptDiscarded {
            reason: DiscardReason::RemoteFailed {
                kind: "status",
                message: "HTTP 500".into(),
            },
        });
        let json = to_json(&event);

        assert_eq!(json["event"], "prompt_discarded");
        assert_eq!(json["reason"], "remote_failed");
        assert_eq!(json["kind"], "status");
        assert_eq!(json["message"], "HTTP 500");
    }

    #[test]
    fn test_unit_discard_reason() {
        let event = HeadlessEvent::from(EngineEvent::PromptDiscarded {
            reason: DiscardReason::EmptyPrompt,
        });
        assert_eq!(to_json(&event)["reason"], "empty_prompt");
    }

    #[test]
    fn test_prompt_resolved() {
        let event = HeadlessEvent::from(EngineEvent::PromptResolved {
            source: InstructionSource::Pattern,
            applied: vec!["layout.spacing"],
            skipped: vec![],
        });
        let json = to_json(&event);

        assert_eq!(json["event"], "prompt_resolved");
        assert_eq!(json["source"], "pattern");
        assert_eq!(json["applied"][0], "layout.spacing");
    }
}
