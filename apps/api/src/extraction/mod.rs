// Template extraction pipeline: prompt → LLM → sanitize → project.
// All LLM calls go through llm_client — no direct endpoint calls here.

pub mod handlers;
pub mod prompts;
pub mod render;
pub mod sanitize;
