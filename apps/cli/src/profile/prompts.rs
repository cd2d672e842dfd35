// LLM prompt constants for profile summarization.

/// System prompt for profile summarization — enforces JSON-only output.
pub const SUMMARY_SYSTEM: &str =
    "You are a data parser turning raw scraped profile text into a structured \
    candidate summary. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent facts not present in the raw data.";

/// Summarization prompt template. Replace `{raw_sections}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Reformat the following raw profile data into a structured summary.

Return a JSON object with this EXACT schema (every key present, no extra fields):
{
  "name": "Jane Doe",
  "skills": ["Python", "SQL"],
  "experience": [
    {"title": "Data Scientist", "company": "Acme Corp", "duration": "2019 - Present"}
  ],
  "education": [
    {"institution": "State University", "degree": "BSc Computer Science", "duration": "2015 - 2019"}
  ]
}

Rules:
- Use empty strings and empty arrays for anything the raw data does not state.
- Split each raw experience entry into title, company, and duration; leave a
  part empty if it cannot be determined.
- Split each raw education entry into institution, degree, and duration the
  same way.
- Deduplicate skills; keep their original casing.

RAW PROFILE DATA:
{raw_sections}"#;
