//! Instruction resolution pipeline
//!
//! Decides, per prompt, which strategy turns the text into a
//! [`PartialInstruction`]:
//!
//! 1. Empty after trimming: discard
//! 2. Starts with `reset` (any case): restore defaults
//! 3. Literal phrase match
//! 4. Starts with `{`: parse as a pasted document, falling through on failure
//! 5. No remote client: discard
//! 6. Otherwise ask the remote service
//!
//! Resolution is pure. Applying the result to the style state is the
//! handler's job, so every outcome here is a value that can be asserted on.

use restyle_core::prelude::*;
use restyle_core::PartialInstruction;
use restyle_remote::RemoteError;
use serde::Serialize;

use crate::patterns;

/// Where an applied instruction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionSource {
    Pattern,
    Pasted,
    Remote,
}

impl std::fmt::Display for InstructionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstructionSource::Pattern => write!(f, "pattern"),
            InstructionSource::Pasted => write!(f, "pasted document"),
            InstructionSource::Remote => write!(f, "layout service"),
        }
    }
}

/// Why a prompt left the style unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiscardReason {
    /// Nothing but whitespace.
    EmptyPrompt,
    /// Not a phrase or a valid document, and no remote client is configured.
    RemoteUnavailable,
    /// The remote request failed.
    RemoteFailed { kind: &'static str, message: String },
    /// The remote service answered with text that is not a valid document.
    InvalidRemoteDocument { message: String },
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::EmptyPrompt => write!(f, "empty prompt"),
            DiscardReason::RemoteUnavailable => write!(f, "not recognized"),
            DiscardReason::RemoteFailed { kind, .. } => write!(f, "layout service {kind} error"),
            DiscardReason::InvalidRemoteDocument { .. } => {
                write!(f, "layout service returned an invalid document")
            }
        }
    }
}

/// Outcome of resolving one prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Discard(DiscardReason),
    Reset,
    Apply {
        instruction: PartialInstruction,
        source: InstructionSource,
    },
    /// Ask the remote service; the prompt is already trimmed.
    Remote { prompt: String },
}

/// Resolve a prompt without touching any state.
pub fn resolve_prompt(prompt: &str, remote_available: bool) -> Resolution {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Resolution::Discard(DiscardReason::EmptyPrompt);
    }

    if prompt.to_lowercase().starts_with("reset") {
        return Resolution::Reset;
    }

    if let Some(instruction) = patterns::match_prompt(prompt) {
        return Resolution::Apply {
            instruction,
            source: InstructionSource::Pattern,
        };
    }

    if prompt.starts_with('{') {
        match PartialInstruction::parse(prompt) {
            Ok(instruction) => {
                return Resolution::Apply {
                    instruction,
                    source: InstructionSource::Pasted,
                }
            }
            Err(e) => debug!("Pasted document rejected, trying remote: {}", e),
        }
    }

    if !remote_available {
        return Resolution::Discard(DiscardReason::RemoteUnavailable);
    }

    Resolution::Remote {
        prompt: prompt.to_string(),
    }
}

/// Turn a finished remote request into an instruction or a discard.
pub fn resolve_remote_response(
    result: std::result::Result<String, RemoteError>,
) -> std::result::Result<PartialInstruction, DiscardReason> {
    let content = result.map_err(|e| DiscardReason::RemoteFailed {
        kind: e.kind(),
        message: e.to_string(),
    })?;

    PartialInstruction::parse(&content).map_err(|e| DiscardReason::InvalidRemoteDocument {
        message: e.to_string(),
    })
}
