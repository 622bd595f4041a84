//! Theme for the terminal chrome around the form preview.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//!
//! The preview itself is drawn in the colors of the style state; [`rgb`]
//! converts them.

pub mod palette;
pub mod styles;

/// Convert a style-state color to a terminal color
pub fn rgb(color: restyle_core::Color) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        let color = restyle_core::resolve_color("#10B981").unwrap();
        assert_eq!(rgb(color), ratatui::style::Color::Rgb(0x10, 0xB9, 0x81));
    }
}
