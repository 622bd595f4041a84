//! Prompt input box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use restyle_app::TextInput;

use crate::theme::styles;

/// Bordered single-line prompt input
pub struct PromptInput<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> PromptInput<'a> {
    pub fn new(input: &'a TextInput, focused: bool) -> Self {
        Self { input, focused }
    }
}

impl Widget for PromptInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Describe a change ");

        let paragraph = if self.input.value().is_empty() && !self.focused {
            Paragraph::new("e.g. make the background green").style(styles::text_muted())
        } else {
            Paragraph::new(self.input.value()).style(styles::text_primary())
        };

        paragraph.block(block).render(area, buf);
    }
}
