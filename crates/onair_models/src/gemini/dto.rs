//! Gemini generateContent data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use onair_core::Schema;
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Part {
    /// Text payload
    text: String,
}

impl Part {
    /// Creates a new builder for `Part`.
    pub fn builder() -> PartBuilder {
        PartBuilder::default()
    }
}

/// A sequence of parts forming one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Content {
    /// Ordered parts of the turn
    parts: Vec<Part>,
    /// Who produced the turn, "user" or "model"
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl Content {
    /// Creates a new builder for `Content`.
    pub fn builder() -> ContentBuilder {
        ContentBuilder::default()
    }
}

/// Generation controls sent with every request.
///
/// `response_mime_type` is always `application/json` here; the endpoint then
/// constrains its output to `response_schema`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type the endpoint must produce
    response_mime_type: String,
    /// Shape the JSON output must conform to
    response_schema: Schema,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationConfig {
    /// Creates a new builder for `GenerationConfig`.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// Request body for the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, a single user turn here
    contents: Vec<Content>,
    /// Output constraints
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }

    /// Wraps an instruction and schema into the wire request body.
    pub fn from_instruction(
        instruction: &str,
        schema: &Schema,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
                role: None,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
                temperature,
            },
        }
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content, absent when the candidate was blocked
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Content>,
    /// Why generation stopped
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

impl Candidate {
    /// Creates a new builder for `Candidate`.
    pub fn builder() -> CandidateBuilder {
        CandidateBuilder::default()
    }
}

/// Response body from the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateContentResponse {
    /// Candidate completions, best first
    #[builder(default)]
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Creates a new builder for `GenerateContentResponse`.
    pub fn builder() -> GenerateContentResponseBuilder {
        GenerateContentResponseBuilder::default()
    }

    /// Concatenated text of the first candidate, or `None` when the response
    /// carried no usable text.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_generate_content_wire_shape() {
        let schema = Schema::object([("topic", Schema::string())]);
        let request = GenerateContentRequest::from_instruction("Classify this.", &schema, None);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"parts": [{"text": "Classify this."}]}],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "properties": {"topic": {"type": "STRING"}},
                        "required": ["topic"]
                    }
                }
            })
        );
    }

    #[test]
    fn temperature_is_serialized_only_when_set() {
        let schema = Schema::string();
        let bare = GenerateContentRequest::from_instruction("x", &schema, None);
        let tuned = GenerateContentRequest::from_instruction("x", &schema, Some(0.7));

        let bare_value = serde_json::to_value(&bare).unwrap();
        let tuned_value = serde_json::to_value(&tuned).unwrap();
        assert!(bare_value["generationConfig"].get("temperature").is_none());
        assert_eq!(tuned_value["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn first_text_concatenates_parts_of_the_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "{\"topic\":"}, {"text": "\"family\"}"}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                },
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(response.first_text().unwrap(), "{\"topic\":\"family\"}");
    }

    #[test]
    fn first_text_is_none_for_empty_or_blocked_responses() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.first_text().is_none());

        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(blocked.first_text().is_none());
    }
}
