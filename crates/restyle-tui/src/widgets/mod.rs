//! Widgets for the restyle TUI

mod form_preview;
mod header;
mod prompt_input;
mod quick_actions;
mod status_bar;

pub use form_preview::{form_layout, gap_rows, padding_cols, FormAreas, FormPreview};
pub use header::MainHeader;
pub use prompt_input::PromptInput;
pub use quick_actions::QuickActionBar;
pub use status_bar::{describe_outcome, StatusBar};
