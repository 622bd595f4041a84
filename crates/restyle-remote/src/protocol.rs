//! Chat-completions wire types for the layout service
//!
//! The request pins the model to JSON-only output shaped by the
//! `layout_instruction` schema. The response is read only far enough to pull
//! out `choices[0].message.content`; validating that text is the document
//! parser's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use restyle_core::{layout_instruction_schema, SCHEMA_NAME};

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You convert requests for visual changes to a form screen into a JSON \
object. The screen has a background, a title, two text input fields, a save button, and vertical \
spacing between them. Respond with JSON only, no prose and no code fences. Include only the keys \
needed for the requested change. Every color must be a hexadecimal string of the form #RRGGBB.";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: &'static str,
    /// Strict structured outputs require every property to be listed as
    /// required, which the optional-everywhere document cannot express.
    pub strict: bool,
    pub schema: &'static Value,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Build the request for one user prompt.
    pub fn for_prompt(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: SCHEMA_NAME,
                    strict: false,
                    schema: layout_instruction_schema(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Pull the first completion's message content out of a response body.
///
/// Returns `None` when the body is not a completion envelope or the content
/// is missing.
pub fn extract_content(body: &str) -> Option<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body).ok()?;
    response.choices.into_iter().next()?.message.content
}
