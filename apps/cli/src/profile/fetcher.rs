//! Authenticated profile page fetching.
//!
//! One cookie-backed session per run: login happens lazily before the first
//! fetch and the session lives until the fetcher is dropped at end of run,
//! on every exit path. Section text is pulled by structural selector, with
//! fallback selectors per section since the page markup shifts between
//! logged-in and public variants.

use anyhow::Context;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::profile::RawProfileData;
use crate::search::ProfileUrl;

const LOGIN_URL: &str = "https://www.linkedin.com/login";
const LOGIN_SUBMIT_URL: &str = "https://www.linkedin.com/checkpoint/lg/login-submit";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct ProfileFetcher {
    client: Client,
    username: String,
    password: String,
    logged_in: bool,
}

impl ProfileFetcher {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(config.http_timeout)
            .build()
            .context("failed to build browsing HTTP client")?;

        Ok(Self {
            client,
            username: config.linkedin_username.clone(),
            password: config.linkedin_password.clone(),
            logged_in: false,
        })
    }

    /// Fetches raw section text for one profile. Missing sections come back
    /// empty with a logged partial-extraction warning; a page with no
    /// recognizable sections at all is treated as unavailable.
    pub async fn fetch(&mut self, url: &ProfileUrl) -> Result<RawProfileData, AppError> {
        self.ensure_authenticated().await?;

        debug!("fetching profile {url}");
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| AppError::ProfileUnavailable(format!("{url}: {e}")))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(AppError::ProfileUnavailable(format!("{url}: not found")));
        }
        if !status.is_success() {
            return Err(AppError::ProfileUnavailable(format!("{url}: HTTP {status}")));
        }
        if response.url().path().contains("authwall") {
            return Err(AppError::ProfileUnavailable(format!(
                "{url}: redirected to auth wall"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| AppError::ProfileUnavailable(format!("{url}: {e}")))?;

        let raw = extract_sections(&html);
        if raw.is_empty() {
            return Err(AppError::ProfileUnavailable(format!(
                "{url}: no recognizable profile sections"
            )));
        }

        let missing = raw.missing_sections();
        if !missing.is_empty() {
            warn!("partial extraction for {url}: missing {}", missing.join(", "));
        }
        Ok(raw)
    }

    /// Logs in once per run. Subsequent fetches reuse the session cookies.
    async fn ensure_authenticated(&mut self) -> Result<(), AppError> {
        if self.logged_in {
            return Ok(());
        }

        info!("authenticating browsing session");
        let login_page = self
            .client
            .get(LOGIN_URL)
            .send()
            .await
            .map_err(|e| AppError::AuthenticationFailed(e.to_string()))?;
        if !login_page.status().is_success() {
            return Err(AppError::AuthenticationFailed(format!(
                "login page returned HTTP {}",
                login_page.status()
            )));
        }
        let login_html = login_page
            .text()
            .await
            .map_err(|e| AppError::AuthenticationFailed(e.to_string()))?;
        let csrf = extract_login_csrf(&login_html).unwrap_or_default();

        let form = [
            ("session_key", self.username.as_str()),
            ("session_password", self.password.as_str()),
            ("loginCsrfParam", csrf.as_str()),
        ];
        let response = self
            .client
            .post(LOGIN_SUBMIT_URL)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::AuthenticationFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::AuthenticationFailed(format!(
                "login submit returned HTTP {}",
                response.status()
            )));
        }
        // A rejected login lands back on the login page or a checkpoint.
        let landing = response.url().path().to_string();
        if landing.contains("login") || landing.contains("checkpoint") {
            return Err(AppError::AuthenticationFailed(
                "credentials rejected".to_string(),
            ));
        }

        info!("browsing session authenticated");
        self.logged_in = true;
        Ok(())
    }
}

fn extract_login_csrf(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"input[name="loginCsrfParam"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("value"))
        .map(|v| v.to_string())
}

/// Pulls the fixed page regions out of a profile page. Each section tries a
/// list of selectors in order, covering the logged-in and public layouts.
fn extract_sections(html: &str) -> RawProfileData {
    let document = Html::parse_document(html);

    let name = first_text(
        &document,
        &["h1.text-heading-xlarge", "h1.top-card-layout__title", "main h1"],
    );
    let headline = first_text(
        &document,
        &[
            "div.text-body-medium.break-words",
            "h2.top-card-layout__headline",
        ],
    );
    let skills = all_texts(
        &document,
        &[
            ".pv-skill-category-entity__name-text",
            "section.skills li a span",
        ],
    );
    let experience = all_texts(
        &document,
        &[
            ".pv-entity__summary-info",
            "section.experience li",
            "li.experience-item",
        ],
    );
    let education = all_texts(
        &document,
        &[
            ".pv-education-entity",
            "section.education li",
            "li.education-item",
        ],
    );

    RawProfileData {
        name,
        headline,
        skills,
        experience,
        education,
    }
}

/// First non-trivial text match across the selector list, or empty.
fn first_text(document: &Html, selectors: &[&str]) -> String {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = element_text(&element);
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }
    String::new()
}

/// All non-trivial text matches for the first selector that yields any.
fn all_texts(document: &Html, selectors: &[&str]) -> Vec<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            let texts: Vec<String> = document
                .select(&selector)
                .map(|el| element_text(&el))
                .filter(|t| !t.is_empty())
                .collect();
            if !texts.is_empty() {
                return texts;
            }
        }
    }
    Vec::new()
}

fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Collapses whitespace runs into single spaces.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
