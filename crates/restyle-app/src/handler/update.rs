//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;

use crate::message::Message;
use crate::patterns;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, prompt, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::InputClosed => {
            state.input_closed = true;
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Prompt Messages
        // ─────────────────────────────────────────────────────────
        Message::Prompt(text) => prompt::handle_prompt(state, &text),

        Message::SubmitInput => {
            // The input clears on send, before resolution
            let text = state.prompt.take();
            UpdateResult::message(Message::Prompt(text))
        }

        Message::QuickAction(index) => match patterns::quick_action(index) {
            Some(phrase) => UpdateResult::message(Message::Prompt(phrase.to_string())),
            None => {
                warn!("No quick action at index {}", index);
                UpdateResult::none()
            }
        },

        Message::Reset => {
            state.reset_style();
            UpdateResult::none()
        }

        Message::RemoteInstructionReceived { prompt, result } => {
            prompt::handle_remote_result(state, &prompt, result)
        }

        // ─────────────────────────────────────────────────────────
        // Input Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::EditInput(edit) => {
            state.edit_focused(edit);
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
    }
}
