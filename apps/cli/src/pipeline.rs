//! Pipeline orchestration — sequential composition of the whole run.
//!
//! Flow: extract attributes → locate profiles → per profile (in discovery
//! order) fetch then summarize. Extraction and location failures abort the
//! run; a single profile's failure is logged, recorded, and skipped so one
//! bad page never sinks the rest. The report carries both summarized and
//! skipped profiles so data loss is always visible.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jd::{extract_attributes, JobAttributes};
use crate::llm_client::LlmClient;
use crate::profile::{summarize_profile, ProfileFetcher, ProfileSummary};
use crate::search::{ProfileLocator, ProfileUrl};

/// The per-profile step: fetch one page, summarize it. A trait seam so the
/// orchestrator's skip policy is testable without a browsing session.
#[async_trait]
pub trait ProfileSource {
    async fn profile_summary(&mut self, url: &ProfileUrl) -> Result<ProfileSummary, AppError>;
}

/// Production source: authenticated fetcher + LLM summarizer. Owns the
/// browsing session; dropping it at end of run releases the session on
/// every exit path.
pub struct LiveProfileSource<'a> {
    fetcher: ProfileFetcher,
    llm: &'a LlmClient,
}

impl<'a> LiveProfileSource<'a> {
    pub fn new(fetcher: ProfileFetcher, llm: &'a LlmClient) -> Self {
        Self { fetcher, llm }
    }
}

#[async_trait]
impl ProfileSource for LiveProfileSource<'_> {
    async fn profile_summary(&mut self, url: &ProfileUrl) -> Result<ProfileSummary, AppError> {
        let raw = self.fetcher.fetch(url).await?;
        summarize_profile(&raw, self.llm).await
    }
}

/// A profile that was found but could not be summarized, with the reason it
/// was dropped.
#[derive(Debug, Serialize)]
pub struct SkippedProfile {
    pub url: ProfileUrl,
    pub reason: String,
}

/// Final output of one run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub attributes: JobAttributes,
    /// Successfully summarized profiles, in discovery order.
    pub summaries: Vec<(ProfileUrl, ProfileSummary)>,
    /// Profiles dropped by the per-profile skip policy.
    pub skipped: Vec<SkippedProfile>,
}

/// Runs the full pipeline. Aborts on attribute extraction or profile
/// location failure; degrades gracefully on per-profile failures.
pub async fn run(
    input: &str,
    max_profiles: usize,
    llm: &LlmClient,
    locator: &ProfileLocator,
    source: &mut dyn ProfileSource,
) -> Result<RunReport, AppError> {
    let attributes = extract_attributes(input, llm).await?;
    info!(
        "extracted attributes: title='{}', {} skills, {} keywords",
        attributes.title,
        attributes.required_skills.len(),
        attributes.search_keywords.len()
    );

    let urls = locator.locate(&attributes, max_profiles).await?;

    Ok(summarize_profiles(attributes, urls, source).await)
}

/// Per-profile loop, strictly sequential in discovery order.
async fn summarize_profiles(
    attributes: JobAttributes,
    urls: Vec<ProfileUrl>,
    source: &mut dyn ProfileSource,
) -> RunReport {
    let mut summaries = Vec::new();
    let mut skipped = Vec::new();

    for url in urls {
        match source.profile_summary(&url).await {
            Ok(summary) => summaries.push((url, summary)),
            Err(e) => {
                warn!("skipping {url}: {e}");
                skipped.push(SkippedProfile {
                    url,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "run complete: {} summarized, {} skipped",
        summaries.len(),
        skipped.len()
    );

    RunReport {
        attributes,
        summaries,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jd::MinimumDegree;

    /// Stub source that fails for a configured set of URLs.
    struct StubSource {
        fail: Vec<&'static str>,
        calls: Vec<String>,
    }

    #[async_trait]
    impl ProfileSource for StubSource {
        async fn profile_summary(
            &mut self,
            url: &ProfileUrl,
        ) -> Result<ProfileSummary, AppError> {
            self.calls.push(url.as_str().to_string());
            if self.fail.iter().any(|f| url.as_str().contains(f)) {
                return Err(AppError::ProfileUnavailable(format!("{url}: not found")));
            }
            Ok(ProfileSummary {
                name: url.as_str().rsplit('/').next().unwrap_or_default().to_string(),
                ..ProfileSummary::default()
            })
        }
    }

    fn urls(slugs: &[&str]) -> Vec<ProfileUrl> {
        slugs
            .iter()
            .map(|s| ProfileUrl::parse(&format!("https://www.linkedin.com/in/{s}")).unwrap())
            .collect()
    }

    fn attrs() -> JobAttributes {
        JobAttributes {
            title: "Data Scientist".to_string(),
            minimum_degree: MinimumDegree::None,
            location: String::new(),
            required_skills: vec![],
            experience_years: 0,
            search_keywords: vec![],
            work_authorization: String::new(),
        }
    }

    #[tokio::test]
    async fn test_second_failure_skips_only_that_profile() {
        let mut source = StubSource {
            fail: vec!["second"],
            calls: vec![],
        };
        let report =
            summarize_profiles(attrs(), urls(&["first", "second", "third"]), &mut source).await;

        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.summaries[0].1.name, "first");
        assert_eq!(report.summaries[1].1.name, "third");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            report.skipped[0].url.as_str(),
            "https://www.linkedin.com/in/second"
        );
        assert!(report.skipped[0].reason.contains("not found"));
    }

    #[tokio::test]
    async fn test_every_profile_is_attempted_in_discovery_order() {
        let mut source = StubSource {
            fail: vec!["a", "b", "c"],
            calls: vec![],
        };
        let report = summarize_profiles(attrs(), urls(&["a", "b", "c"]), &mut source).await;

        assert!(report.summaries.is_empty());
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(
            source.calls,
            vec![
                "https://www.linkedin.com/in/a",
                "https://www.linkedin.com/in/b",
                "https://www.linkedin.com/in/c"
            ]
        );
    }

    #[tokio::test]
    async fn test_no_urls_yields_empty_report() {
        let mut source = StubSource {
            fail: vec![],
            calls: vec![],
        };
        let report = summarize_profiles(attrs(), vec![], &mut source).await;
        assert!(report.summaries.is_empty());
        assert!(report.skipped.is_empty());
        assert!(source.calls.is_empty());
    }

    #[test]
    fn test_report_serializes_for_json_output() {
        let report = RunReport {
            attributes: attrs(),
            summaries: vec![(
                ProfileUrl::parse("https://www.linkedin.com/in/jane").unwrap(),
                ProfileSummary::default(),
            )],
            skipped: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["summaries"][0][0],
            "https://www.linkedin.com/in/jane"
        );
        assert_eq!(json["attributes"]["title"], "Data Scientist");
    }
}
