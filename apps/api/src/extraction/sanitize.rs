//! Response Sanitizer — coerces arbitrary model output into the canonical
//! flat string-only schema shape.
//!
//! Total over all JSON values: `null`, arrays, primitives, and partially
//! shaped objects all degrade to defaults. Nothing the model returns can
//! block rendering.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// JSON Schema dialect tag stamped on every sanitized schema.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Title used when the model omits one or returns a blank string.
pub const DEFAULT_TITLE: &str = "Extracted Schema";

/// Which result shape the extraction asked the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two top-level keys: `schema` + `guidelines`.
    Basic,
    /// Adds `style_guide`.
    Extended,
}

/// A sanitized flat schema. Invariants held by construction:
/// every property is `{"type": "string", "description": <string>}`,
/// `required` only names existing properties, `type` is always "object".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringSchema {
    #[serde(rename = "$schema")]
    pub dialect: String,
    pub title: String,
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: Map<String, Value>,
    pub required: Vec<String>,
}

/// The sanitized extraction result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResult {
    pub schema: StringSchema,
    pub guidelines: String,
    /// Present only for the extended variant; the basic variant's JSON has
    /// no `style_guide` key at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_guide: Option<String>,
}

/// Coerces any JSON value into a flat string-only schema.
///
/// Non-object candidates produce the empty default schema. Declared property
/// types are discarded wholesale — everything becomes a string field with
/// whatever description survives stringification.
pub fn sanitize_schema(candidate: &Value) -> StringSchema {
    let title = match candidate.get("title") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => DEFAULT_TITLE.to_string(),
    };

    let mut properties = Map::new();
    if let Some(props) = candidate.get("properties").and_then(Value::as_object) {
        for (key, field) in props {
            properties.insert(
                key.clone(),
                json!({
                    "type": "string",
                    "description": stringify(field.get("description")),
                }),
            );
        }
    }

    let required = candidate
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| properties.contains_key(*name))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    StringSchema {
        dialect: SCHEMA_DIALECT.to_string(),
        title,
        schema_type: "object".to_string(),
        properties,
        required,
    }
}

/// Coerces a raw model result into the canonical shape.
///
/// Accepts either a full result object with a nested `schema` key or a bare
/// schema-shaped object — models sometimes flatten their output, so a
/// candidate without a `schema` key is treated as the schema itself.
pub fn sanitize_result(raw: &Value, variant: Variant) -> CanonicalResult {
    let candidate = match raw.as_object() {
        Some(obj) => obj.get("schema").unwrap_or(raw),
        None => &Value::Null,
    };

    CanonicalResult {
        schema: sanitize_schema(candidate),
        guidelines: stringify(raw.get("guidelines")),
        style_guide: match variant {
            Variant::Basic => None,
            Variant::Extended => Some(stringify(raw.get("style_guide"))),
        },
    }
}

/// String coercion: strings pass through, absent/null become empty, anything
/// else becomes its JSON text.
fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
