// JD Understanding — turns a raw job description (text or file) into the
// structured attributes that drive candidate search.
// All LLM calls go through llm_client — no direct API calls here.

pub mod analyzer;
pub mod document;
pub mod prompts;

pub use analyzer::{extract_attributes, JobAttributes, MinimumDegree};
