//! Key event handlers

use crate::input_key::InputKey;
use crate::message::{InputEdit, Message};
use crate::state::{AppState, InputFocus};

/// Convert a key event to a message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('r') => Some(Message::Reset),

        InputKey::F(n @ 1..=4) => Some(Message::QuickAction(usize::from(n - 1))),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        InputKey::Enter => match state.focus {
            InputFocus::Prompt => Some(Message::SubmitInput),
            // Enter in an entry field moves on, like a form
            InputFocus::Name | InputFocus::Email => Some(Message::FocusNext),
        },

        InputKey::Char(c) => Some(Message::EditInput(InputEdit::Insert(c))),
        InputKey::Backspace => Some(Message::EditInput(InputEdit::Backspace)),
        InputKey::Delete => Some(Message::EditInput(InputEdit::Delete)),
        InputKey::Left => Some(Message::EditInput(InputEdit::Left)),
        InputKey::Right => Some(Message::EditInput(InputEdit::Right)),
        InputKey::Home => Some(Message::EditInput(InputEdit::Home)),
        InputKey::End => Some(Message::EditInput(InputEdit::End)),

        _ => None,
    }
}
