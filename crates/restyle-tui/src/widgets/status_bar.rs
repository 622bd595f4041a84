//! Status line: remote availability, pending requests, last outcome

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use restyle_app::{AppState, Outcome};

use crate::theme::{palette, styles};

/// Human-readable summary of an outcome.
///
/// Discarded prompts have no summary: the screen treats them as if nothing
/// was sent. Their reasons go to the log and the headless stream only.
pub fn describe_outcome(outcome: &Outcome) -> Option<String> {
    let text = match outcome {
        Outcome::Applied { source, report } => {
            let mut text = format!("applied from {}: {}", source, report.applied.join(", "));
            if !report.skipped.is_empty() {
                text.push_str(&format!(" ({} skipped)", report.skipped.len()));
            }
            text
        }
        Outcome::Reset => "reset to defaults".to_string(),
        Outcome::Discarded(_) => return None,
        Outcome::RemoteRequested { .. } => "asking the layout service".to_string(),
    };
    Some(text)
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (remote_label, remote_color) = if self.state.remote_available {
            (" remote on ", palette::STATUS_GREEN)
        } else {
            (" remote off ", palette::STATUS_RED)
        };

        let mut spans = vec![Span::styled(
            remote_label,
            Style::default().fg(remote_color),
        )];

        if self.state.pending_remote > 0 {
            spans.push(Span::styled(
                format!("| {} pending ", self.state.pending_remote),
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }

        if let Some(text) = self.state.last_outcome.as_ref().and_then(describe_outcome) {
            spans.push(Span::styled(
                format!("| {}", text),
                styles::text_secondary(),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
