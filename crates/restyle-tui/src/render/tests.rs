//! Full-screen render tests

use super::{cursor_offset, view};
use ratatui::{backend::TestBackend, layout::Position, Terminal};
use restyle_app::config::Settings;
use restyle_app::{AppState, DiscardReason, InputEdit, InputFocus, Outcome};

fn create_base_state() -> AppState {
    AppState::new(Settings::default(), false)
}

fn render_screen(state: &AppState) -> (String, Position) {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();
    let position = terminal.get_cursor_position().unwrap();
    let content = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect::<String>();
    (content, position)
}

#[test]
fn test_default_screen() {
    let state = create_base_state();
    let (content, _) = render_screen(&state);

    assert!(content.contains("restyle"));
    assert!(content.contains("Edit Profile"));
    assert!(content.contains("Save"));
    assert!(content.contains("F1"));
    assert!(content.contains("make the background green"));
    assert!(content.contains("remote off"));
}

#[test]
fn test_quick_actions_hidden_by_setting() {
    let mut settings = Settings::default();
    settings.ui.show_quick_actions = false;
    let state = AppState::new(settings, false);
    let (content, _) = render_screen(&state);

    assert!(!content.contains("F1"));
}

#[test]
fn test_status_shows_outcome_and_pending() {
    let mut state = AppState::new(Settings::default(), true);
    state.begin_remote_request("make it purple");
    let (content, _) = render_screen(&state);

    assert!(content.contains("remote on"));
    assert!(content.contains("1 pending"));
    assert!(content.contains("asking the layout service"));

    state.finish_remote_request();
    state.reset_style();
    let (content, _) = render_screen(&state);
    assert!(content.contains("reset to defaults"));
    assert_eq!(state.last_outcome, Some(Outcome::Reset));
}

#[test]
fn test_prompt_text_and_cursor() {
    let mut state = create_base_state();
    for c in "hello".chars() {
        state.edit_focused(InputEdit::Insert(c));
    }
    let (content, cursor) = render_screen(&state);

    assert!(content.contains("hello"));
    // Prompt box spans rows 20..=22 of a 24-row screen
    assert_eq!(cursor, Position::new(1 + 5, 21));
}

#[test]
fn test_cursor_follows_entry_focus() {
    let mut state = create_base_state();
    state.focus = InputFocus::Name;
    state.edit_focused(InputEdit::Insert('A'));
    let (content, cursor) = render_screen(&state);

    let preview = ratatui::layout::Rect::new(0, 1, 80, 18);
    let name = crate::widgets::form_layout(preview, &state.style).name;
    assert!(content.contains('A'));
    assert_eq!(cursor, Position::new(name.x + 2, name.y + 1));
}

#[test]
fn test_remote_failure_not_shown_in_status() {
    let mut state = AppState::new(Settings::default(), true);
    state.begin_remote_request("make it purple");
    state.finish_remote_request();
    state.record_discard(DiscardReason::RemoteFailed {
        kind: "network",
        message: "connection refused".into(),
    });
    let (content, _) = render_screen(&state);

    assert!(content.contains("remote on"));
    assert!(!content.contains("network"));
    assert!(!content.contains("asking the layout service"));
    assert!(!content.contains("ignored"));
}

#[test]
fn test_invalid_remote_document_not_shown_in_status() {
    let mut state = AppState::new(Settings::default(), true);
    state.record_discard(DiscardReason::InvalidRemoteDocument {
        message: "unknown field `shadow`".into(),
    });
    let (content, _) = render_screen(&state);

    assert!(!content.contains("invalid document"));
    assert!(!content.contains("shadow"));
}

#[test]
fn test_unrecognized_prompt_without_remote_not_shown() {
    let mut state = create_base_state();
    state.record_discard(DiscardReason::RemoteUnavailable);
    let (content, _) = render_screen(&state);

    assert!(!content.contains("not recognized"));
    assert!(!content.contains("ignored"));
}

#[test]
fn test_cursor_offset_saturates() {
    assert_eq!(cursor_offset(5, 76), 5);
    assert_eq!(cursor_offset(200, 76), 76);
    assert_eq!(cursor_offset(usize::MAX, 76), 76);
}
