//! Form preview widget
//!
//! Draws the profile form in the colors of the current style state: the
//! title, the name and email fields, and the save button, separated by blank
//! rows proportional to the stack spacing.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use restyle_app::InputFocus;
use restyle_core::{ButtonStyle, FieldStyle, StyleState, BUTTON_LABEL};

use crate::theme::{palette, rgb, styles};

/// Font sizes at or above this render bold.
const BOLD_FONT_SIZE: f64 = 20.0;

/// Areas of the form elements inside the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title: Rect,
    pub name: Rect,
    pub email: Rect,
    pub button: Rect,
}

/// Blank rows between stacked elements (8 points per row, at most 4)
pub fn gap_rows(spacing: f64) -> u16 {
    (spacing / 8.0).round().clamp(0.0, 4.0) as u16
}

/// Blank columns each side of the button label (4 points per column, at most 8)
pub fn padding_cols(padding: f64) -> u16 {
    (padding / 4.0).round().clamp(0.0, 8.0) as u16
}

/// Lay out the form elements within the preview area
pub fn form_layout(area: Rect, style: &StyleState) -> FormAreas {
    let inner = area.inner(Margin::new(2, 1));
    // Title and three bordered elements take 10 rows; gaps share the rest
    let gap = gap_rows(style.spacing).min(inner.height.saturating_sub(10) / 3);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(gap),
        Constraint::Length(3),
        Constraint::Length(gap),
        Constraint::Length(3),
        Constraint::Length(gap),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(inner);

    let row = chunks[6];
    let label_width = BUTTON_LABEL.chars().count() as u16;
    let button_width = (label_width + 2 * padding_cols(style.button.padding) + 2).min(row.width);
    let button = Rect {
        x: row.x + (row.width - button_width) / 2,
        width: button_width,
        ..row
    };

    FormAreas {
        title: chunks[0],
        name: chunks[2],
        email: chunks[4],
        button,
    }
}

/// Preview of the styled form
pub struct FormPreview<'a> {
    style: &'a StyleState,
    focus: Option<InputFocus>,
}

impl<'a> FormPreview<'a> {
    pub fn new(style: &'a StyleState) -> Self {
        Self { style, focus: None }
    }

    /// Highlight the entry field that has focus
    pub fn focus(mut self, focus: InputFocus) -> Self {
        self.focus = Some(focus);
        self
    }
}

impl Widget for FormPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style;
        let page_bg = rgb(style.background);

        Block::default()
            .style(Style::default().bg(page_bg))
            .render(area, buf);

        if area.height < 3 || area.width < 6 {
            return;
        }

        let areas = form_layout(area, style);

        let mut title_style = Style::default().fg(rgb(style.title.color)).bg(page_bg);
        if style.title.font_size >= BOLD_FONT_SIZE {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(style.title.text.as_str())
            .style(title_style)
            .alignment(Alignment::Center)
            .render(areas.title, buf);

        render_field(
            buf,
            areas.name,
            &style.name_field,
            "Name",
            &style.entries.name,
            self.focus == Some(InputFocus::Name),
        );
        render_field(
            buf,
            areas.email,
            &style.email_field,
            "Email",
            &style.entries.email,
            self.focus == Some(InputFocus::Email),
        );
        render_button(buf, areas.button, &style.button, page_bg);
    }
}

fn render_field(
    buf: &mut Buffer,
    area: Rect,
    field: &FieldStyle,
    placeholder: &str,
    value: &str,
    focused: bool,
) {
    let fill = rgb(field.fill);
    let text = rgb(field.text_color);

    let border_type = if field.corner_radius > 0.0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };
    let border_style = if focused {
        styles::border_active()
    } else {
        Style::default().fg(text)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style.bg(fill))
        .style(Style::default().bg(fill));

    let content = if value.is_empty() {
        Span::styled(
            placeholder,
            Style::default().fg(text).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(value, Style::default().fg(text))
    };

    Paragraph::new(Line::from(content))
        .block(block)
        .render(area, buf);
}

fn render_button(
    buf: &mut Buffer,
    area: Rect,
    button: &ButtonStyle,
    page_bg: ratatui::style::Color,
) {
    let (block, mut label_style) = if button.outline {
        let accent = rgb(button.accent);
        (
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent).bg(page_bg))
                .style(Style::default().bg(page_bg)),
            Style::default().fg(accent).bg(page_bg),
        )
    } else {
        let fill = rgb(button.fill);
        (
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(fill).bg(fill))
                .style(Style::default().bg(fill)),
            Style::default().fg(palette::TEXT_PRIMARY).bg(fill),
        )
    };

    if button.font_size >= BOLD_FONT_SIZE {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    Paragraph::new(BUTTON_LABEL)
        .style(label_style)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use restyle_core::resolve_color;

    fn render(style: &StyleState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(FormPreview::new(style), f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn content(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_gap_rows() {
        assert_eq!(gap_rows(16.0), 2);
        assert_eq!(gap_rows(32.0), 4);
        assert_eq!(gap_rows(0.0), 0);
        assert_eq!(gap_rows(500.0), 4);
    }

    #[test]
    fn test_padding_cols() {
        assert_eq!(padding_cols(8.0), 2);
        assert_eq!(padding_cols(12.0), 3);
        assert_eq!(padding_cols(100.0), 8);
    }

    #[test]
    fn test_form_layout_follows_spacing() {
        let area = Rect::new(0, 0, 40, 30);
        let mut style = StyleState::default();
        let tight = form_layout(area, &style);
        style.spacing = 32.0;
        let loose = form_layout(area, &style);

        assert_eq!(tight.title.y, 1);
        assert_eq!(tight.name.y, 1 + 1 + 2);
        assert_eq!(loose.name.y, 1 + 1 + 4);
        assert!(loose.button.y > tight.button.y);
    }

    #[test]
    fn test_form_layout_shrinks_gaps_to_fit() {
        let mut style = StyleState::default();
        style.spacing = 32.0;
        let areas = form_layout(Rect::new(0, 0, 40, 15), &style);

        // 13 inner rows leave a single row per gap
        assert_eq!(areas.name.y, 1 + 1 + 1);
        assert_eq!(areas.button.height, 3);
    }

    #[test]
    fn test_form_layout_button_width_follows_padding() {
        let area = Rect::new(0, 0, 40, 20);
        let mut style = StyleState::default();
        let narrow = form_layout(area, &style).button;
        style.button.padding = 12.0;
        let wide = form_layout(area, &style).button;

        assert_eq!(narrow.width, 4 + 2 * 2 + 2);
        assert_eq!(wide.width, 4 + 2 * 3 + 2);
    }

    #[test]
    fn test_renders_title_placeholders_and_label() {
        let style = StyleState::default();
        let text = content(&render(&style, 40, 20));

        assert!(text.contains("Edit Profile"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Save"));
    }

    #[test]
    fn test_renders_entered_text() {
        let mut style = StyleState::default();
        style.entries.name = "Ada Lovelace".into();
        let text = content(&render(&style, 40, 20));
        assert!(text.contains("Ada Lovelace"));
    }

    #[test]
    fn test_background_color_painted() {
        let mut style = StyleState::default();
        style.background = resolve_color("#10B981").unwrap();
        let buf = render(&style, 40, 20);

        assert_eq!(
            buf[(0, 0)].bg,
            ratatui::style::Color::Rgb(0x10, 0xB9, 0x81)
        );
    }

    #[test]
    fn test_field_fill_painted() {
        let mut style = StyleState::default();
        style.name_field.fill = resolve_color("#FFB6C1").unwrap();
        let area = Rect::new(0, 0, 40, 20);
        let name = form_layout(area, &style).name;
        let buf = render(&style, 40, 20);

        assert_eq!(
            buf[(name.x + 1, name.y + 1)].bg,
            ratatui::style::Color::Rgb(0xFF, 0xB6, 0xC1)
        );
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let style = StyleState::default();
        render(&style, 4, 2);
    }
}
