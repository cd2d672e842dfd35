//! Canonical profile URL type.
//!
//! A `ProfileUrl` can only be built through a validating parse, so every
//! value in the pipeline is already normalized: https scheme, `www.` host,
//! no query string, no trailing slash. That makes equality-based
//! deduplication across search queries sound.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PROFILE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-z]{2,3}\.)?linkedin\.com/in/([A-Za-z0-9\-_%]+)")
        .unwrap()
});

/// A canonical LinkedIn profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    /// Parses and canonicalizes a raw URL. Returns `None` for anything that
    /// is not a profile page (company pages, posts, unrelated hosts).
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = PROFILE_PATTERN.captures(raw)?;
        let slug = captures.get(1)?.as_str();
        Some(Self(format!("https://www.linkedin.com/in/{slug}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
