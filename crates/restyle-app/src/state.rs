//! Application state (Model in TEA pattern)

use restyle_core::prelude::*;
use restyle_core::{merge, MergeReport, PartialInstruction, StyleState};

use crate::config::Settings;
use crate::message::InputEdit;
use crate::pipeline::{DiscardReason, InstructionSource};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which text input receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Prompt,
    Name,
    Email,
}

impl InputFocus {
    pub fn next(self) -> Self {
        match self {
            InputFocus::Prompt => InputFocus::Name,
            InputFocus::Name => InputFocus::Email,
            InputFocus::Email => InputFocus::Prompt,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            InputFocus::Prompt => InputFocus::Email,
            InputFocus::Name => InputFocus::Prompt,
            InputFocus::Email => InputFocus::Name,
        }
    }
}

/// Single-line text input with a cursor measured in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, edit: InputEdit) {
        apply_edit(&mut self.value, &mut self.cursor, edit);
    }

    /// Take the text, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }
}

fn apply_edit(value: &mut String, cursor: &mut usize, edit: InputEdit) {
    let len = value.chars().count();
    *cursor = (*cursor).min(len);

    match edit {
        InputEdit::Insert(c) => {
            let at = byte_index(value, *cursor);
            value.insert(at, c);
            *cursor += 1;
        }
        InputEdit::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
        }
        InputEdit::Delete => {
            if *cursor < len {
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
        }
        InputEdit::Left => *cursor = cursor.saturating_sub(1),
        InputEdit::Right => *cursor = (*cursor + 1).min(len),
        InputEdit::Home => *cursor = 0,
        InputEdit::End => *cursor = len,
    }
}

fn byte_index(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map_or(value.len(), |(index, _)| index)
}

/// Result of the most recent prompt, reset, or remote completion
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied {
        source: InstructionSource,
        report: MergeReport,
    },
    Reset,
    Discarded(DiscardReason),
    RemoteRequested {
        prompt: String,
    },
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Style of the form screen. Changed only through
    /// [`AppState::apply_instruction`] and [`AppState::reset_style`], apart
    /// from the user-typed entry values.
    pub style: StyleState,

    pub prompt: TextInput,
    pub focus: InputFocus,
    name_cursor: usize,
    email_cursor: usize,

    /// A layout service client is configured
    pub remote_available: bool,

    /// Remote requests sent and not yet answered
    pub pending_remote: usize,

    /// Set by the headless runner once stdin is exhausted
    pub input_closed: bool,

    pub last_outcome: Option<Outcome>,

    /// Incremented whenever `last_outcome` is written
    pub outcome_seq: u64,

    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings, remote_available: bool) -> Self {
        Self {
            phase: AppPhase::Running,
            style: StyleState::default(),
            prompt: TextInput::default(),
            focus: InputFocus::Prompt,
            name_cursor: 0,
            email_cursor: 0,
            remote_available,
            pending_remote: 0,
            input_closed: false,
            last_outcome: None,
            outcome_seq: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting || (self.input_closed && self.pending_remote == 0)
    }

    fn set_outcome(&mut self, outcome: Outcome) {
        self.last_outcome = Some(outcome);
        self.outcome_seq += 1;
    }

    /// Merge an instruction onto the current style
    pub fn apply_instruction(&mut self, instruction: &PartialInstruction, source: InstructionSource) {
        let report = merge(&mut self.style, instruction);
        info!(
            "Applied {} instruction ({}): {} leaves written, {} skipped",
            source,
            instruction.section_names().join(", "),
            report.applied.len(),
            report.skipped.len()
        );
        self.set_outcome(Outcome::Applied { source, report });
    }

    /// Restore every style attribute to its default
    pub fn reset_style(&mut self) {
        self.style.reset();
        self.name_cursor = 0;
        self.email_cursor = 0;
        info!("Style reset to defaults");
        self.set_outcome(Outcome::Reset);
    }

    pub fn record_discard(&mut self, reason: DiscardReason) {
        match &reason {
            DiscardReason::EmptyPrompt => debug!("Discarded empty prompt"),
            DiscardReason::RemoteFailed { message, .. }
            | DiscardReason::InvalidRemoteDocument { message } => {
                warn!("Discarded remote result: {}", message)
            }
            other => warn!("Discarded prompt: {}", other),
        }
        self.set_outcome(Outcome::Discarded(reason));
    }

    pub fn begin_remote_request(&mut self, prompt: &str) {
        self.pending_remote += 1;
        info!(
            "Requesting layout instruction from remote service ({} pending)",
            self.pending_remote
        );
        self.set_outcome(Outcome::RemoteRequested {
            prompt: prompt.to_string(),
        });
    }

    pub fn finish_remote_request(&mut self) {
        self.pending_remote = self.pending_remote.saturating_sub(1);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Apply an edit to whichever input has focus
    pub fn edit_focused(&mut self, edit: InputEdit) {
        match self.focus {
            InputFocus::Prompt => self.prompt.apply(edit),
            InputFocus::Name => {
                apply_edit(&mut self.style.entries.name, &mut self.name_cursor, edit)
            }
            InputFocus::Email => {
                apply_edit(&mut self.style.entries.email, &mut self.email_cursor, edit)
            }
        }
    }

    /// Cursor position of the focused input
    pub fn focused_cursor(&self) -> usize {
        match self.focus {
            InputFocus::Prompt => self.prompt.cursor(),
            InputFocus::Name => self.name_cursor.min(self.style.entries.name.chars().count()),
            InputFocus::Email => self.email_cursor.min(self.style.entries.email.chars().count()),
        }
    }
}
