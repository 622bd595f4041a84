//! Style state for the form screen
//!
//! The screen is fixed: a title, two text-entry fields, one save button, and
//! the vertical spacing between them. [`StyleState`] holds every renderable
//! attribute; [`StyleState::default`] is the palette that "reset" restores.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Label of the save button. Not instruction-controlled.
pub const BUTTON_LABEL: &str = "Save";

/// Complete style of the form screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    pub background: Color,
    pub title: TitleStyle,
    pub spacing: f64,
    pub name_field: FieldStyle,
    pub email_field: FieldStyle,
    pub button: ButtonStyle,
    /// User-entered values; merges never touch these.
    pub entries: FormEntries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStyle {
    pub fill: Color,
    pub text_color: Color,
    pub corner_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub outline: bool,
    pub font_size: f64,
    pub padding: f64,
    pub accent: Color,
    pub fill: Color,
}

/// Free-text values of the two text-entry fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntries {
    pub name: String,
    pub email: String,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            text: "Edit Profile".to_string(),
            color: Color::rgb(0x11, 0x18, 0x27),
            font_size: 28.0,
        }
    }
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0xFF, 0xFF, 0xFF),
            text_color: Color::rgb(0x11, 0x18, 0x27),
            corner_radius: 8.0,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            outline: false,
            font_size: 17.0,
            padding: 8.0,
            accent: Color::rgb(0x25, 0x63, 0xEB),
            fill: Color::rgb(0x25, 0x63, 0xEB),
        }
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xF9, 0xFA, 0xFB),
            title: TitleStyle::default(),
            spacing: 16.0,
            name_field: FieldStyle::default(),
            email_field: FieldStyle::default(),
            button: ButtonStyle::default(),
            entries: FormEntries::default(),
        }
    }
}

impl StyleState {
    /// Restore every attribute, including the entered text, to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let state = StyleState::default();
        assert_eq!(state.background.to_hex(), "#F9FAFB");
        assert_eq!(state.title.text, "Edit Profile");
        assert_eq!(state.title.font_size, 28.0);
        assert_eq!(state.spacing, 16.0);
        assert_eq!(state.name_field, state.email_field);
        assert!(!state.button.outline);
        assert_eq!(state.button.accent.to_hex(), "#2563EB");
        assert!(state.entries.name.is_empty());
    }

    #[test]
    fn test_reset_restores_every_attribute() {
        let mut state = StyleState::default();
        state.spacing = 40.0;
        state.button.outline = true;
        state.title.text = "Changed".into();
        state.entries.name = "Ada".into();

        state.reset();

        assert_eq!(state, StyleState::default());
    }

    #[test]
    fn test_serializes_colors_as_hex() {
        let json = serde_json::to_value(StyleState::default()).unwrap();
        assert_eq!(json["background"], "#F9FAFB");
        assert_eq!(json["button"]["fill"], "#2563EB");
    }
}
