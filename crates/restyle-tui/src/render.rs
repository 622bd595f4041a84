//! Main render/view function (View in TEA pattern)

use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use restyle_app::{AppState, InputFocus};

use super::{layout, theme::palette, widgets};

/// Render the complete UI
///
/// Pure with respect to `state`; places the terminal cursor in the focused
/// input.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_quick_actions);

    frame.render_widget(widgets::MainHeader, areas.header);
    frame.render_widget(
        widgets::FormPreview::new(&state.style).focus(state.focus),
        areas.preview,
    );
    if state.settings.ui.show_quick_actions {
        frame.render_widget(widgets::QuickActionBar, areas.quick_actions);
    }
    frame.render_widget(
        widgets::PromptInput::new(&state.prompt, state.focus == InputFocus::Prompt),
        areas.prompt,
    );
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(position) = cursor_position(state, areas.preview, areas.prompt) {
        frame.set_cursor_position(position);
    }
}

/// Terminal position of the cursor inside the focused bordered input
fn cursor_position(state: &AppState, preview: Rect, prompt: Rect) -> Option<(u16, u16)> {
    let target = match state.focus {
        InputFocus::Prompt => prompt,
        InputFocus::Name | InputFocus::Email => {
            if preview.height < 3 || preview.width < 6 {
                return None;
            }
            let form = widgets::form_layout(preview, &state.style);
            if state.focus == InputFocus::Name {
                form.name
            } else {
                form.email
            }
        }
    };

    if target.width < 3 || target.height < 3 {
        return None;
    }

    let offset = cursor_offset(state.focused_cursor(), target.width - 3);
    Some((target.x + 1 + offset, target.y + 1))
}

/// Column offset of a character cursor, pinned to the last visible column
fn cursor_offset(cursor: usize, max_offset: u16) -> u16 {
    u16::try_from(cursor).unwrap_or(u16::MAX).min(max_offset)
}

#[cfg(test)]
mod tests;
