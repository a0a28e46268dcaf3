// Cross-cutting prompt utilities.
// Each module that needs LLM calls defines its own prompts.rs alongside it;
// this file only holds what every caller shares.

/// Wraps the user's raw template under the literal header the extraction
/// system prompts refer to. The dashed rule separates instructions from
/// pasted content so the model does not treat template text as directives.
pub fn build_user_prompt(raw_text: &str) -> String {
    format!("User Template (raw):\n--------------------\n{raw_text}")
}
