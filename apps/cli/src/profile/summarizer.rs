//! Profile summarization — raw scraped sections to a validated summary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::profile::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};
use crate::profile::RawProfileData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

/// Structured, validated summary of one profile.
///
/// Every field is required on deserialization; callers can rely on a fixed
/// shape with empty collections standing in for absent source data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

/// Summarizes raw profile sections with one LLM call.
///
/// All-empty input short-circuits to an all-empty summary without any
/// outbound request. Ill-shaped responses fail with `SchemaValidation`,
/// no retry, same policy as attribute extraction.
pub async fn summarize_profile(
    raw: &RawProfileData,
    llm: &LlmClient,
) -> Result<ProfileSummary, AppError> {
    if raw.is_empty() {
        debug!("all sections empty; returning empty summary without LLM call");
        return Ok(ProfileSummary::default());
    }

    let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{raw_sections}", &format_sections(raw));
    llm.call_json::<ProfileSummary>(&prompt, SUMMARY_SYSTEM)
        .await
        .map_err(|e| AppError::from_llm("profile summarization", e))
}

/// Renders the raw sections as a labeled plain-text block for the prompt.
fn format_sections(raw: &RawProfileData) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", raw.name));
    out.push_str(&format!("Headline: {}\n", raw.headline));
    out.push_str(&format!("Skills: {}\n", raw.skills.join(", ")));
    out.push_str("Experience:\n");
    for entry in &raw.experience {
        out.push_str(&format!("- {entry}\n"));
    }
    out.push_str("Education:\n");
    for entry in &raw.education {
        out.push_str(&format!("- {entry}\n"));
    }
    out
}
