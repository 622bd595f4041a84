//! Header bar with app title and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "send"),
    ("^R", "reset"),
    ("Tab", "focus"),
    ("Esc", "quit"),
];

/// Single-line header
pub struct MainHeader;

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" restyle ", styles::accent_bold())];
        for (key, action) in KEY_HINTS {
            spans.push(Span::styled(format!(" {key}"), styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
