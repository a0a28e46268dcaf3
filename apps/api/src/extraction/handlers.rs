use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACT_STYLE_SYSTEM, EXTRACT_SYSTEM};
use crate::extraction::render::SchemaTable;
use crate::extraction::sanitize::{sanitize_result, CanonicalResult, Variant};
use crate::llm_client::prompts::build_user_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub raw_text: String,
    #[serde(default)]
    pub include_style_guide: bool,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extraction_id: Uuid,
    pub extracted_at: DateTime<Utc>,
    /// The canonical JSON (schema + guidelines, plus style_guide for the
    /// extended variant) — the frontend's "show full JSON" view.
    pub result: CanonicalResult,
    pub table: SchemaTable,
}

/// POST /api/v1/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let raw_text = req.raw_text.trim();
    if raw_text.is_empty() {
        return Err(AppError::Validation(
            "raw_text must not be empty".to_string(),
        ));
    }

    let variant = if req.include_style_guide {
        Variant::Extended
    } else {
        Variant::Basic
    };
    let system = match variant {
        Variant::Basic => EXTRACT_SYSTEM,
        Variant::Extended => EXTRACT_STYLE_SYSTEM,
    };

    let raw = state
        .llm
        .extract_json(system, &build_user_prompt(raw_text))
        .await
        .map_err(|e| AppError::Llm(format!("Extraction failed: {e}")))?;

    let result = sanitize_result(&raw, variant);
    let table = SchemaTable::from_result(&result);

    info!(
        "Extraction complete: {} fields, {} required",
        result.schema.properties.len(),
        result.schema.required.len()
    );

    Ok(Json(ExtractResponse {
        extraction_id: Uuid::new_v4(),
        extracted_at: Utc::now(),
        result,
        table,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::llm_client::testing::{text_response, ScriptedBackend};
    use crate::llm_client::{LlmClient, LlmError};

    fn state_with(backend: ScriptedBackend) -> AppState {
        AppState {
            llm: LlmClient::new(backend),
        }
    }

    #[tokio::test]
    async fn test_empty_raw_text_is_rejected_without_llm_call() {
        // No scripted responses: any backend call would panic.
        let state = state_with(ScriptedBackend::new(vec![]));
        let req = ExtractRequest {
            raw_text: "   \n\t".to_string(),
            include_style_guide: false,
        };

        let err = handle_extract(State(state), Json(req)).await.err().unwrap();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_returns_sanitized_result_and_table() {
        let state = state_with(ScriptedBackend::new(vec![Ok(text_response(
            r#"{
                "schema": {
                    "title": "Login",
                    "properties": {
                        "username": { "type": "string", "description": "the username" }
                    },
                    "required": ["username"]
                },
                "guidelines": "Use BDD phrasing."
            }"#,
        ))]));
        let req = ExtractRequest {
            raw_text: "Given/When/Then login test".to_string(),
            include_style_guide: false,
        };

        let Json(response) = handle_extract(State(state), Json(req)).await.unwrap();

        assert_eq!(response.result.schema.title, "Login");
        assert_eq!(response.result.schema.required, vec!["username"]);
        assert_eq!(response.result.guidelines, "Use BDD phrasing.");
        assert!(response.result.style_guide.is_none());
        assert_eq!(response.table.rows.len(), 1);
        assert_eq!(response.table.rows[0].field, "username");
        assert_eq!(response.table.rows[0].description, "the username");
    }

    #[tokio::test]
    async fn test_extended_variant_carries_style_guide() {
        let state = state_with(ScriptedBackend::new(vec![Ok(text_response(
            r###"{
                "schema": { "title": "Login", "properties": {} },
                "guidelines": "g",
                "style_guide": "## Voice\nImperative.\n\n### Examples\n- Given a user"
            }"###,
        ))]));
        let req = ExtractRequest {
            raw_text: "template".to_string(),
            include_style_guide: true,
        };

        let Json(response) = handle_extract(State(state), Json(req)).await.unwrap();

        let style = response.result.style_guide.unwrap();
        assert!(style.contains("### Examples"));
    }

    #[tokio::test]
    async fn test_malformed_but_parseable_response_still_renders() {
        // Model returned a bare array — sanitizer degrades to defaults
        let state = state_with(ScriptedBackend::new(vec![Ok(text_response("[1, 2, 3]"))]));
        let req = ExtractRequest {
            raw_text: "template".to_string(),
            include_style_guide: false,
        };

        let Json(response) = handle_extract(State(state), Json(req)).await.unwrap();

        assert_eq!(response.result.schema.title, "Extracted Schema");
        assert!(response.result.schema.properties.is_empty());
        assert!(response.table.rows.is_empty());
    }

    #[tokio::test]
    async fn test_total_extraction_failure_maps_to_llm_error() {
        let state = state_with(ScriptedBackend::new(vec![
            Ok(text_response("not json")),
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
        ]));
        let req = ExtractRequest {
            raw_text: "template".to_string(),
            include_style_guide: false,
        };

        let err = handle_extract(State(state), Json(req)).await.err().unwrap();
        match err {
            AppError::Llm(msg) => assert!(msg.contains("model output parsing failed")),
            other => panic!("expected Llm error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fenced_fallback_response_is_parsed() {
        let state = state_with(ScriptedBackend::new(vec![
            Err(LlmError::Api {
                status: 400,
                message: "response_format unsupported".to_string(),
            }),
            Ok(text_response(
                "```json\n{\"schema\": {\"properties\": {\"a\": {\"description\": \"x\"}}}}\n```",
            )),
        ]));
        let req = ExtractRequest {
            raw_text: "template".to_string(),
            include_style_guide: false,
        };

        let Json(response) = handle_extract(State(state), Json(req)).await.unwrap();
        assert_eq!(response.table.rows.len(), 1);
        assert_eq!(response.table.rows[0].field, "a");
    }

    #[tokio::test]
    async fn test_serialized_response_omits_style_guide_for_basic_variant() {
        let state = state_with(ScriptedBackend::new(vec![Ok(text_response("{}"))]));
        let req = ExtractRequest {
            raw_text: "template".to_string(),
            include_style_guide: false,
        };

        let Json(response) = handle_extract(State(state), Json(req)).await.unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["result"].get("style_guide").is_none());
        assert_eq!(value["result"]["schema"]["type"], json!("object"));
    }
}
