//! Partial layout instructions and the document parser
//!
//! A [`PartialInstruction`] is the optional-everywhere document every
//! resolution path produces: quick-action payloads, pasted JSON, and remote
//! service responses all decode through [`PartialInstruction::parse`].
//!
//! Absence of a section or leaf means "no change". Unknown keys are rejected
//! at every level; a `null` section or leaf is treated as absent. When a key
//! repeats, the last occurrence wins.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A requested subset of style changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundInstruction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleInstruction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldsInstruction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonInstruction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutInstruction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TitleInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Applies to both text-entry fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FieldsInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ButtonInstruction {
    /// Accepted for schema compatibility; the button label is fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

impl PartialInstruction {
    /// Decode and validate an instruction document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocument`] for malformed JSON, a document or
    /// section that is not an object, an unknown key, or a leaf of the wrong
    /// type.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| Error::invalid_document(e.to_string()))?;

        // Sections must be objects; serde would otherwise accept a sequence
        // in place of a struct.
        let sections = value
            .as_object()
            .ok_or_else(|| Error::invalid_document("expected a JSON object"))?;
        if let Some((name, _)) = sections
            .iter()
            .find(|(_, section)| !(section.is_object() || section.is_null()))
        {
            return Err(Error::invalid_document(format!(
                "section `{name}` must be an object"
            )));
        }

        serde_json::from_value(value).map_err(|e| Error::invalid_document(e.to_string()))
    }

    /// `true` when no section requests any change.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.title.is_none()
            && self.fields.is_none()
            && self.button.is_none()
            && self.layout.is_none()
    }

    /// Names of the sections present, in schema order. Used for logging.
    pub fn section_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.background.is_some() {
            names.push("background");
        }
        if self.title.is_some() {
            names.push("title");
        }
        if self.fields.is_some() {
            names.push("fields");
        }
        if self.button.is_some() {
            names.push("button");
        }
        if self.layout.is_some() {
            names.push("layout");
        }
        names
    }
}
