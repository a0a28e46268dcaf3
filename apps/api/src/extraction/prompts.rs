// All LLM prompt constants for the extraction module.
// The raw-template user prompt builder lives in llm_client::prompts.

/// System prompt for the basic variant — schema + guidelines.
pub const EXTRACT_SYSTEM: &str = r#"You are an expert technical writer and data modeler.

Read the user's pasted template (plain text or Markdown) and extract a JSON Schema where every field is a string, plus overall test case generation guidelines.

Output STRICT JSON ONLY (no code fences, no comments). The output MUST have exactly two top-level keys: "schema" and "guidelines".

Return EXACTLY a JSON object conforming to this shape:
{
  "schema": {
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "string",
    "type": "object",
    "properties": {
      "field_name": { "type": "string", "description": "human readable description" }
    },
    "required": ["optional", "list", "of", "fields"]
  },
  "guidelines": "concise overall guidelines text"
}

Rules:
- "schema" MUST be a JSON Schema for an object with FLAT properties. Do not nest objects or arrays.
- Every property's type MUST be exactly "string". Do not use any other type.
- Each property MUST include a concise human-friendly description.
- "guidelines" MUST be a single string summarizing overall test case generation guidelines derived from the template.
- Keep descriptions and the guidelines concise and useful.
- If there are no obvious fields, return an empty properties object and an empty required list; guidelines may be an empty string.
- Output VALID JSON ONLY."#;

/// System prompt for the extended variant — adds a "style_guide" key.
pub const EXTRACT_STYLE_SYSTEM: &str = r#"You are an expert technical writer and data modeler.

Read the user's pasted template (plain text or Markdown) and extract a JSON Schema where every field is a string, overall test case generation guidelines, and a style guide describing how the template is written.

Output STRICT JSON ONLY (no code fences, no comments). The output MUST have exactly three top-level keys: "schema", "guidelines", and "style_guide".

Return EXACTLY a JSON object conforming to this shape:
{
  "schema": {
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "string",
    "type": "object",
    "properties": {
      "field_name": { "type": "string", "description": "human readable description" }
    },
    "required": ["optional", "list", "of", "fields"]
  },
  "guidelines": "concise overall guidelines text",
  "style_guide": "markdown style guide text"
}

Rules:
- "schema" MUST be a JSON Schema for an object with FLAT properties. Do not nest objects or arrays.
- Every property's type MUST be exactly "string". Do not use any other type.
- Each property MUST include a concise human-friendly description.
- "guidelines" MUST be a single string summarizing overall test case generation guidelines derived from the template.
- "style_guide" MUST be a single Markdown string describing the template's writing style: tone, phrasing, structure, and formatting conventions.
- If the template contains sample test cases or examples, "style_guide" MUST end with an "Examples" subsection quoting them verbatim.
- Keep descriptions and the guidelines concise and useful.
- If there are no obvious fields, return an empty properties object and an empty required list; guidelines and style_guide may be empty strings.
- Output VALID JSON ONLY."#;
