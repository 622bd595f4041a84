//! JSON Schema description of the instruction document
//!
//! Sent to the remote layout service as its response-shape constraint. The
//! tests below hold it in lockstep with the serde model in
//! [`crate::instruction`], so the service is never asked for a shape the
//! parser would reject.

use std::sync::OnceLock;

use serde_json::{json, Value};

/// Schema name announced to the remote service.
pub const SCHEMA_NAME: &str = "layout_instruction";

/// The `layout_instruction` schema. Every property is optional and no
/// additional properties are allowed at any level.
pub fn layout_instruction_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(build_schema)
}

fn build_schema() -> Value {
    let string = json!({ "type": "string" });
    let number = json!({ "type": "number" });
    let boolean = json!({ "type": "boolean" });

    object(json!({
        "background": object(json!({
            "color": string,
        })),
        "title": object(json!({
            "text": string,
            "color": string,
            "fontSize": number,
        })),
        "fields": object(json!({
            "color": string,
            "textColor": string,
            "cornerRadius": number,
        })),
        "button": object(json!({
            "text": { "type": "string", "description": "Button label (informational)" },
            "color": string,
            "outline": boolean,
            "fontSize": number,
            "padding": number,
            "accentColor": string,
        })),
        "layout": object(json!({
            "spacing": number,
        })),
    }))
}

fn object(properties: Value) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{
        BackgroundInstruction, ButtonInstruction, FieldsInstruction, LayoutInstruction,
        PartialInstruction, TitleInstruction,
    };
    use std::collections::BTreeSet;

    fn fully_populated() -> PartialInstruction {
        PartialInstruction {
            background: Some(BackgroundInstruction {
                color: Some("#000000".into()),
            }),
            title: Some(TitleInstruction {
                text: Some("t".into()),
                color: Some("#000000".into()),
                font_size: Some(1.0),
            }),
            fields: Some(FieldsInstruction {
                color: Some("#000000".into()),
                text_color: Some("#000000".into()),
                corner_radius: Some(1.0),
            }),
            button: Some(ButtonInstruction {
                text: Some("b".into()),
                color: Some("#000000".into()),
                outline: Some(true),
                font_size: Some(1.0),
                padding: Some(1.0),
                accent_color: Some("#000000".into()),
            }),
            layout: Some(LayoutInstruction {
                spacing: Some(1.0),
            }),
        }
    }

    fn keys(value: &Value) -> BTreeSet<String> {
        value
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_schema_sections_match_instruction_model() {
        let schema = layout_instruction_schema();
        let document = serde_json::to_value(fully_populated()).unwrap();

        assert_eq!(keys(&schema["properties"]), keys(&document));

        for (section, fields) in document.as_object().unwrap() {
            assert_eq!(
                keys(&schema["properties"][section]["properties"]),
                keys(fields),
                "section `{section}` drifted from the schema"
            );
        }
    }

    #[test]
    fn test_schema_leaf_types_match_instruction_model() {
        let schema = layout_instruction_schema();
        let document = serde_json::to_value(fully_populated()).unwrap();

        for (section, fields) in document.as_object().unwrap() {
            for (field, value) in fields.as_object().unwrap() {
                let declared = &schema["properties"][section]["properties"][field]["type"];
                let expected = match value {
                    Value::String(_) => "string",
                    Value::Number(_) => "number",
                    Value::Bool(_) => "boolean",
                    other => panic!("unexpected leaf {other:?}"),
                };
                assert_eq!(declared, expected, "{section}.{field}");
            }
        }
    }

    #[test]
    fn test_schema_disallows_additional_properties_everywhere() {
        let schema = layout_instruction_schema();
        assert_eq!(schema["additionalProperties"], false);
        for section in schema["properties"].as_object().unwrap().values() {
            assert_eq!(section["additionalProperties"], false);
        }
    }

    #[test]
    fn test_schema_has_no_required_fields() {
        let text = serde_json::to_string(layout_instruction_schema()).unwrap();
        assert!(!text.contains("\"required\""));
    }

    #[test]
    fn test_fully_populated_document_parses() {
        let text = serde_json::to_string(&fully_populated()).unwrap();
        assert_eq!(PartialInstruction::parse(&text).unwrap(), fully_populated());
    }
}
