//! State merge engine
//!
//! [`merge`] overwrites exactly the attributes an instruction names. Leaves
//! that cannot be interpreted (an unknown color, a negative size) are skipped
//! one by one and reported; the rest of the instruction still applies. Merge
//! never fails and is idempotent.

use serde::Serialize;
use tracing::debug;

use crate::color::{self, Color};
use crate::instruction::PartialInstruction;
use crate::style::{FieldStyle, StyleState};

/// A leaf that was present but could not be applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLeaf {
    /// Dotted document path, e.g. `button.accentColor`.
    pub path: &'static str,
    /// The rejected value as it appeared in the document.
    pub value: String,
}

/// What a merge did, leaf by leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeReport {
    /// Document paths whose value was written (even if unchanged).
    pub applied: Vec<&'static str>,
    pub skipped: Vec<SkippedLeaf>,
}

impl MergeReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }

    fn resolve_color(&mut self, leaf: Option<&str>, path: &'static str) -> Option<Color> {
        let text = leaf?;
        let resolved = color::resolve(text);
        match resolved {
            Some(_) => self.applied.push(path),
            None => self.skip(path, text.to_string()),
        }
        resolved
    }

    fn resolve_number(&mut self, leaf: Option<f64>, path: &'static str) -> Option<f64> {
        let value = leaf?;
        if value.is_finite() && value >= 0.0 {
            self.applied.push(path);
            Some(value)
        } else {
            self.skip(path, value.to_string());
            None
        }
    }

    fn skip(&mut self, path: &'static str, value: String) {
        debug!("Skipping unresolved leaf {} = {:?}", path, value);
        self.skipped.push(SkippedLeaf { path, value });
    }
}

/// Apply `instruction` onto `state` in place.
pub fn merge(state: &mut StyleState, instruction: &PartialInstruction) -> MergeReport {
    let mut report = MergeReport::default();

    if let Some(background) = &instruction.background {
        if let Some(color) = report.resolve_color(background.color.as_deref(), "background.color") {
            state.background = color;
        }
    }

    if let Some(title) = &instruction.title {
        if let Some(text) = &title.text {
            state.title.text = text.clone();
            report.applied.push("title.text");
        }
        if let Some(color) = report.resolve_color(title.color.as_deref(), "title.color") {
            state.title.color = color;
        }
        if let Some(size) = report.resolve_number(title.font_size, "title.fontSize") {
            state.title.font_size = size;
        }
    }

    if let Some(fields) = &instruction.fields {
        let fill = report.resolve_color(fields.color.as_deref(), "fields.color");
        let text_color = report.resolve_color(fields.text_color.as_deref(), "fields.textColor");
        let radius = report.resolve_number(fields.corner_radius, "fields.cornerRadius");

        for target in [&mut state.name_field, &mut state.email_field] {
            apply_field_style(target, fill, text_color, radius);
        }
    }

    if let Some(button) = &instruction.button {
        let target = &mut state.button;
        if let Some(color) = report.resolve_color(button.color.as_deref(), "button.color") {
            target.fill = color;
        }
        if let Some(outline) = button.outline {
            target.outline = outline;
            report.applied.push("button.outline");
        }
        if let Some(size) = report.resolve_number(button.font_size, "button.fontSize") {
            target.font_size = size;
        }
        if let Some(padding) = report.resolve_number(button.padding, "button.padding") {
            target.padding = padding;
        }
        if let Some(accent) =
            report.resolve_color(button.accent_color.as_deref(), "button.accentColor")
        {
            target.accent = accent;
        }
    }

    if let Some(layout) = &instruction.layout {
        if let Some(spacing) = report.resolve_number(layout.spacing, "layout.spacing") {
            state.spacing = spacing;
        }
    }

    report
}

fn apply_field_style(
    target: &mut FieldStyle,
    fill: Option<Color>,
    text_color: Option<Color>,
    corner_radius: Option<f64>,
) {
    if let Some(fill) = fill {
        target.fill = fill;
    }
    if let Some(text_color) = text_color {
        target.text_color = text_color;
    }
    if let Some(corner_radius) = corner_radius {
        target.corner_radius = corner_radius;
    }
}
