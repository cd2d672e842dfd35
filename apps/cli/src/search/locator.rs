//! Profile discovery via search-engine queries.
//!
//! Issues each constructed query against the DuckDuckGo HTML endpoint,
//! extracts profile links from the result page, and collects them in
//! first-seen order with duplicates collapsed. A failed or blocked search
//! request fails the whole call — there is no partial-result fallback.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jd::JobAttributes;
use crate::search::profile_url::ProfileUrl;
use crate::search::queries::build_search_queries;

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct ProfileLocator {
    client: Client,
}

impl ProfileLocator {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build search HTTP client")?;
        Ok(Self { client })
    }

    /// Locates up to `max_results` unique profile URLs for the given
    /// attributes, in the order the search engine returned them. With no
    /// usable search terms, returns empty without issuing any request.
    pub async fn locate(
        &self,
        attrs: &JobAttributes,
        max_results: usize,
    ) -> Result<Vec<ProfileUrl>, AppError> {
        let queries = build_search_queries(attrs);
        if queries.is_empty() {
            debug!("no search terms in attributes; skipping search");
            return Ok(Vec::new());
        }

        let mut seen: HashSet<ProfileUrl> = HashSet::new();
        let mut urls: Vec<ProfileUrl> = Vec::new();

        for (i, query) in queries.iter().enumerate() {
            if urls.len() >= max_results {
                break;
            }
            info!("search query {}/{}: {}", i + 1, queries.len(), query);

            let html = self.search(query).await?;
            let found = extract_profile_urls(&html);
            debug!("query yielded {} profile links", found.len());

            for url in found {
                if urls.len() >= max_results {
                    break;
                }
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
        }

        info!("located {} unique profiles", urls.len());
        Ok(urls)
    }

    async fn search(&self, query: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", query), ("kl", "us-en")])
            .send()
            .await
            .map_err(|e| AppError::SearchUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // 403/429 here usually means the engine served a CAPTCHA page.
            return Err(AppError::SearchUnavailable(format!(
                "search engine returned HTTP {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::SearchUnavailable(e.to_string()))
    }
}

/// Pulls profile URLs out of a search result page, in document order.
/// Result links sit on `a.result__a` anchors, usually behind a redirect
/// whose `uddg` parameter carries the percent-encoded target.
fn extract_profile_urls(html: &str) -> Vec<ProfileUrl> {
    let document = Html::parse_document(html);
    let mut urls = Vec::new();

    if let Ok(selector) = Selector::parse("a.result__a") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = ProfileUrl::parse(&resolve_redirect(href)) {
                    urls.push(url);
                }
            }
        }
    }
    urls
}

/// Unwraps the engine's redirect link to the real target URL.
fn resolve_redirect(href: &str) -> String {
    match href.split("uddg=").nth(1) {
        Some(encoded) => {
            let encoded = encoded.split('&').next().unwrap_or(encoded);
            percent_decode(encoded)
        }
        None => href.to_string(),
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            // Slice is safe: both bytes are ASCII hex digits.
            if let Ok(byte) = u8::from_str_radix(&s[i + 1..i + 3], 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULT_PAGE: &str = r#"
        <html><body>
        <div class="result">
          <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.linkedin.com%2Fin%2Fjane-doe&rut=abc">Jane Doe</a>
        </div>
        <div class="result">
          <a class="result__a" href="https://uk.linkedin.com/in/john-smith?trk=search">John Smith</a>
        </div>
        <div class="result">
          <a class="result__a" href="https://www.linkedin.com/company/acme">Acme Corp</a>
        </div>
        <div class="result">
          <a class="result__a" href="https://www.linkedin.com/in/jane-doe/">Jane Doe again</a>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_follows_redirect_links() {
        let urls = extract_profile_urls(RESULT_PAGE);
        assert_eq!(urls[0].as_str(), "https://www.linkedin.com/in/jane-doe");
    }

    #[test]
    fn test_extract_keeps_document_order_and_skips_non_profiles() {
        let urls = extract_profile_urls(RESULT_PAGE);
        // Company page dropped; duplicate kept here (dedup happens in locate).
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[1].as_str(), "https://www.linkedin.com/in/john-smith");
        assert_eq!(urls[2].as_str(), "https://www.linkedin.com/in/jane-doe");
    }

    #[test]
    fn test_duplicates_collapse_across_pages() {
        // Same merge discipline locate() applies across queries.
        let mut seen = std::collections::HashSet::new();
        let mut urls = Vec::new();
        for _ in 0..2 {
            for url in extract_profile_urls(RESULT_PAGE) {
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
        }
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "https://www.linkedin.com/in/jane-doe");
        assert_eq!(urls[1].as_str(), "https://www.linkedin.com/in/john-smith");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(
            percent_decode("https%3A%2F%2Fwww.linkedin.com%2Fin%2Fjane"),
            "https://www.linkedin.com/in/jane"
        );
        assert_eq!(percent_decode("plain-text"), "plain-text");
        assert_eq!(percent_decode("trailing%2"), "trailing%2");
    }

    #[test]
    fn test_resolve_redirect_passthrough() {
        assert_eq!(
            resolve_redirect("https://www.linkedin.com/in/jane"),
            "https://www.linkedin.com/in/jane"
        );
    }
}
