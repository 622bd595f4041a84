//! Quick action bar (F1-F4)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use restyle_app::patterns;

use crate::theme::styles;

/// One line listing each quick action phrase with its function key
pub struct QuickActionBar;

impl Widget for QuickActionBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (index, phrase) in patterns::quick_actions().enumerate() {
            spans.push(Span::styled(format!(" F{} ", index + 1), styles::keybinding()));
            spans.push(Span::styled(phrase, styles::text_primary()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
