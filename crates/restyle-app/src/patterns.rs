//! Literal phrase matching
//!
//! A small fixed table of phrases that resolve without the remote service.
//! Each group maps to a payload written in the instruction document form and
//! decoded through the same parser as pasted documents.

use restyle_core::prelude::*;
use restyle_core::PartialInstruction;

/// A group of equivalent phrases and the document they resolve to.
#[derive(Debug, Clone, Copy)]
pub struct PhrasePattern {
    /// Lowercase phrases, compared after trimming and lowercasing the prompt.
    /// The first one is offered as a quick action.
    pub phrases: &'static [&'static str],
    pub payload: &'static str,
}

/// Pattern table in match order.
pub const PATTERNS: &[PhrasePattern] = &[
    PhrasePattern {
        phrases: &[
            "make the background green",
            "background green",
            "green background",
        ],
        payload: r##"{"background":{"color":"#10B981"},"title":{"color":"#FFFFFF"}}"##,
    },
    PhrasePattern {
        phrases: &["make inputs light pink", "inputs light pink"],
        payload: r##"{"fields":{"color":"#FFB6C1"}}"##,
    },
    PhrasePattern {
        phrases: &["increase spacing", "bigger spacing", "make space bigger"],
        payload: r#"{"layout":{"spacing":32}}"#,
    },
    PhrasePattern {
        phrases: &["make the save button outlined and bigger", "big outlined save"],
        payload: r##"{"button":{"outline":true,"padding":12,"accentColor":"#064E3B","fontSize":26}}"##,
    },
];

/// Quick action strings: the first phrase of each pattern group.
pub fn quick_actions() -> impl Iterator<Item = &'static str> {
    PATTERNS
        .iter()
        .filter_map(|pattern| pattern.phrases.first().copied())
}

/// Quick action at `index`, if any.
pub fn quick_action(index: usize) -> Option<&'static str> {
    PATTERNS
        .get(index)
        .and_then(|pattern| pattern.phrases.first().copied())
}

/// Match a prompt against the pattern table.
pub fn match_prompt(prompt: &str) -> Option<PartialInstruction> {
    let normalized = prompt.trim().to_lowercase();
    let pattern = PATTERNS
        .iter()
        .find(|pattern| pattern.phrases.contains(&normalized.as_str()))?;

    match PartialInstruction::parse(pattern.payload) {
        Ok(instruction) => Some(instruction),
        Err(e) => {
            error!("Built-in pattern payload failed to parse: {}", e);
            None
        }
    }
}
