//! Message types for the application (TEA pattern)

use restyle_remote::RemoteError;

use crate::input_key::InputKey;

/// Edit applied to the focused text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// All possible messages in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately
    Quit,

    /// Headless stdin reached end of file
    InputClosed,

    // ─────────────────────────────────────────────────────────
    // Prompt Messages
    // ─────────────────────────────────────────────────────────
    /// Resolve a prompt and apply the result
    Prompt(String),

    /// Send the prompt input's current text, clearing the input
    SubmitInput,

    /// Send the quick action phrase at this index
    QuickAction(usize),

    /// Restore the default style
    Reset,

    /// A remote request finished (successfully or not)
    RemoteInstructionReceived {
        prompt: String,
        result: Result<String, RemoteError>,
    },

    // ─────────────────────────────────────────────────────────
    // Input Editing Messages
    // ─────────────────────────────────────────────────────────
    EditInput(InputEdit),
    FocusNext,
    FocusPrevious,
}
