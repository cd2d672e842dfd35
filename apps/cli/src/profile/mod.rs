// Profile Analysis — fetches raw section text from a profile page through
// an authenticated browsing session, then reformats it into a validated
// summary with one LLM call.

pub mod fetcher;
pub mod prompts;
pub mod summarizer;

pub use fetcher::ProfileFetcher;
pub use summarizer::{summarize_profile, EducationEntry, ExperienceEntry, ProfileSummary};

/// Scraped, unvalidated text keyed by page section.
///
/// Sections the fetcher could not find are empty, never absent — partial
/// profile data is still useful downstream, so a missing section degrades
/// the record instead of failing the fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProfileData {
    pub name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

impl RawProfileData {
    pub fn is_empty(&self) -> bool {
        self.missing_sections().len() == 5
    }

    /// Names of sections that came back empty, for the degraded-data log.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.headline.trim().is_empty() {
            missing.push("headline");
        }
        if self.skills.is_empty() {
            missing.push("skills");
        }
        if self.experience.is_empty() {
            missing.push("experience");
        }
        if self.education.is_empty() {
            missing.push("education");
        }
        missing
    }
}
