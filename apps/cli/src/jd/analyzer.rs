//! Attribute extraction — structured candidate-search attributes from a JD.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jd::document::load_document;
use crate::jd::prompts::{JD_EXTRACT_PROMPT_TEMPLATE, JD_EXTRACT_SYSTEM};
use crate::llm_client::LlmClient;

/// Minimum degree requirement stated by a JD.
/// Deserialization coerces any unrecognized value to `None` rather than
/// failing, matching the validated-enum contract of the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum MinimumDegree {
    #[default]
    None,
    Diploma,
    Bachelor,
    Master,
    PhD,
}

impl From<String> for MinimumDegree {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Diploma" => MinimumDegree::Diploma,
            "Bachelor" => MinimumDegree::Bachelor,
            "Master" => MinimumDegree::Master,
            "PhD" => MinimumDegree::PhD,
            _ => MinimumDegree::None,
        }
    }
}

/// Structured attributes derived once per job description.
///
/// Every field is required on deserialization — a missing key in the LLM
/// response is a schema violation, never a silent default. Empty values are
/// fine; downstream query construction handles them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAttributes {
    pub title: String,
    pub minimum_degree: MinimumDegree,
    pub location: String,
    /// Must-have skills, most important first.
    pub required_skills: Vec<String>,
    /// Minimum years of experience; 0 when the JD does not state one.
    pub experience_years: u32,
    /// Role phrases used verbatim to build search queries.
    pub search_keywords: Vec<String>,
    pub work_authorization: String,
}

impl JobAttributes {
    /// True if at least one field can contribute a search term. With no
    /// terms the locator issues no query at all.
    pub fn has_search_terms(&self) -> bool {
        !self.title.trim().is_empty()
            || self.required_skills.iter().any(|s| !s.trim().is_empty())
            || self.search_keywords.iter().any(|k| !k.trim().is_empty())
    }
}

/// Extracts `JobAttributes` from literal JD text or a `.txt`/`.pdf` path.
///
/// Document failures surface before the LLM request is made. An ill-shaped
/// response is a `SchemaValidation` error and is not retried.
pub async fn extract_attributes(
    input: &str,
    llm: &LlmClient,
) -> Result<JobAttributes, AppError> {
    let jd_text = load_document(input)?;
    let prompt = JD_EXTRACT_PROMPT_TEMPLATE.replace("{jd_text}", &jd_text);
    llm.call_json::<JobAttributes>(&prompt, JD_EXTRACT_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("attribute extraction", e))
}
