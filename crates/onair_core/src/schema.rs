//! Response schema values for schema-constrained generation.
//!
//! The Gemini endpoint accepts an OpenAPI-style schema in
//! `generationConfig.responseSchema` and is contractually obligated to emit
//! output matching it. This module models the subset of that schema language
//! the prompt builders use, so schemas are declared as data instead of
//! hand-written JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The schema type tags the endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    /// Free-form string
    String,
    /// Number
    Number,
    /// Object with named properties
    Object,
    /// Homogeneous array
    Array,
}

/// A response-shape constraint sent alongside a prompt.
///
/// Serializes to the exact JSON the endpoint expects, with `type` tags in
/// upper case and absent fields omitted.
///
/// # Examples
///
/// ```
/// use onair_core::Schema;
///
/// let schema = Schema::object([
///     ("title", Schema::string()),
///     ("score", Schema::number()),
///     ("tags", Schema::string_array()),
/// ]);
///
/// assert_eq!(schema.required.as_deref(), Some(&["title".to_string(),
///     "score".to_string(), "tags".to_string()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Value type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Hint to the model about what belongs in this field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Named properties of an OBJECT schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Schema>>,
    /// Property names the model must populate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Element shape of an ARRAY schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            required: None,
            items: None,
        }
    }

    /// A STRING schema.
    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    /// A NUMBER schema.
    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    /// An ARRAY schema with the given element shape.
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// An ARRAY of STRING schema, the most common array in this system.
    pub fn string_array() -> Self {
        Self::array(Self::string())
    }

    /// An OBJECT schema with the given properties, all of them required.
    ///
    /// Every field in this system is mandatory, so the required list is
    /// exactly the property names in declaration order.
    pub fn object<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Schema)>,
    {
        let mut map = HashMap::new();
        let mut required = Vec::new();
        for (name, schema) in properties {
            required.push(name.to_string());
            map.insert(name.to_string(), schema);
        }
        Self {
            properties: Some(map),
            required: Some(required),
            ..Self::leaf(SchemaType::Object)
        }
    }

    /// Attach a description hint to this schema node.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_schema_serializes_to_endpoint_json() {
        let schema = Schema::object([
            ("topic", Schema::string()),
            ("safetyScore", Schema::number()),
            ("risks", Schema::string_array()),
        ]);

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "topic": {"type": "STRING"},
                    "safetyScore": {"type": "NUMBER"},
                    "risks": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["topic", "safetyScore", "risks"]
            })
        );
    }

    #[test]
    fn described_field_keeps_its_hint() {
        let schema = Schema::string().describe("one sentence");
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value, json!({"type": "STRING", "description": "one sentence"}));
    }

    #[test]
    fn required_preserves_declaration_order() {
        let schema = Schema::object([
            ("title", Schema::string()),
            ("score", Schema::number()),
            ("tags", Schema::string_array()),
            ("hookType", Schema::string()),
        ]);

        assert_eq!(
            schema.required.unwrap(),
            vec!["title", "score", "tags", "hookType"]
        );
    }
}
