//! Table projection — flattens a canonical result into the rows the
//! frontend renders. No logic beyond the projection itself.

use serde::Serialize;
use serde_json::Value;

use crate::extraction::sanitize::CanonicalResult;

/// Placeholder shown for properties the model left undescribed.
const EMPTY_DESCRIPTION: &str = "—";

/// A pre-projected field table, one row per schema property.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTable {
    pub title: String,
    pub rows: Vec<SchemaTableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaTableRow {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
}

impl SchemaTable {
    pub fn from_result(result: &CanonicalResult) -> Self {
        let rows = result
            .schema
            .properties
            .iter()
            .map(|(field, schema)| SchemaTableRow {
                field: field.clone(),
                field_type: "string".to_string(),
                description: schema
                    .get("description")
                    .and_then(Value::as_str)
                    .filter(|d| !d.is_empty())
                    .map(String::from)
                    .unwrap_or_else(|| EMPTY_DESCRIPTION.to_string()),
            })
            .collect();

        Self {
            title: result.schema.title.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::extraction::sanitize::{sanitize_result, Variant};

    #[test]
    fn test_rows_follow_property_order() {
        let raw = json!({
            "schema": {
                "title": "Login",
                "properties": {
                    "username": { "description": "the username" },
                    "password": { "description": "" }
                }
            }
        });
        let table = SchemaTable::from_result(&sanitize_result(&raw, Variant::Basic));

        assert_eq!(table.title, "Login");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].field, "username");
        assert_eq!(table.rows[0].field_type, "string");
        assert_eq!(table.rows[0].description, "the username");
        // Empty descriptions render as the placeholder
        assert_eq!(table.rows[1].description, "—");
    }

    #[test]
    fn test_empty_schema_projects_no_rows() {
        let table = SchemaTable::from_result(&sanitize_result(&json!(null), Variant::Basic));
        assert_eq!(table.title, "Extracted Schema");
        assert!(table.rows.is_empty());
    }
}
