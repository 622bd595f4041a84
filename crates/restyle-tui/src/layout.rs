//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// Form preview
    pub preview: Rect,

    /// F1-F4 quick action bar (zero height when hidden)
    pub quick_actions: Rect,

    /// Prompt input box
    pub prompt: Rect,

    /// Remote availability, pending requests, last outcome
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_quick_actions: bool) -> ScreenAreas {
    let quick_actions_height = if show_quick_actions { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),                    // Header
        Constraint::Min(5),                       // Preview
        Constraint::Length(quick_actions_height), // Quick actions
        Constraint::Length(3),                    // Prompt (bordered)
        Constraint::Length(1),                    // Status
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        preview: chunks[1],
        quick_actions: chunks[2],
        prompt: chunks[3],
        status: chunks[4],
    }
}
