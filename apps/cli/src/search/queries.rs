//! Search query construction from extracted JD attributes.
//!
//! Every query is scoped to the profile-hosting domain with a `site:`
//! restriction. Strategies, in priority order: verbatim search keywords,
//! title, title + location, top-skill pair, title + top skill. If no
//! attribute yields a non-empty term, no query is built at all — an
//! all-empty JD must never turn into an unconstrained search.

use std::collections::HashSet;

use crate::jd::JobAttributes;

const SITE_SCOPE: &str = "site:linkedin.com/in";

/// Upper bound on queries per run; each one is a full search-engine request.
const MAX_QUERIES: usize = 6;

pub fn build_search_queries(attrs: &JobAttributes) -> Vec<String> {
    if !attrs.has_search_terms() {
        return Vec::new();
    }

    let title = attrs.title.trim();
    let location = attrs.location.trim();
    let skills: Vec<&str> = attrs
        .required_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let mut queries = Vec::new();

    // Search keywords are used verbatim, highest priority.
    for keyword in &attrs.search_keywords {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            continue;
        }
        queries.push(scoped(&[keyword, location]));
    }

    if !title.is_empty() {
        queries.push(scoped(&[title]));
        if !location.is_empty() {
            queries.push(scoped(&[title, location]));
        }
        if let Some(skill) = skills.first() {
            queries.push(scoped(&[title, skill]));
        }
    }

    if skills.len() >= 2 {
        queries.push(scoped(&[skills[0], skills[1], location]));
    }

    let mut seen = HashSet::new();
    queries.retain(|q| seen.insert(q.clone()));
    queries.truncate(MAX_QUERIES);
    queries
}

/// Quotes each non-empty term and prefixes the site scope.
fn scoped(terms: &[&str]) -> String {
    let mut query = String::from(SITE_SCOPE);
    for term in terms {
        if !term.is_empty() {
            query.push_str(&format!(" \"{term}\""));
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jd::MinimumDegree;

    fn attrs() -> JobAttributes {
        JobAttributes {
            title: "Data Scientist".to_string(),
            minimum_degree: MinimumDegree::Bachelor,
            location: "San Francisco, CA".to_string(),
            required_skills: vec!["python".to_string(), "sql".to_string()],
            experience_years: 3,
            search_keywords: vec!["Machine Learning Engineer".to_string()],
            work_authorization: String::new(),
        }
    }

    fn empty_attrs() -> JobAttributes {
        JobAttributes {
            title: String::new(),
            minimum_degree: MinimumDegree::None,
            location: String::new(),
            required_skills: vec![],
            experience_years: 0,
            search_keywords: vec![],
            work_authorization: String::new(),
        }
    }

    #[test]
    fn test_empty_attributes_build_no_queries() {
        assert!(build_search_queries(&empty_attrs()).is_empty());
    }

    #[test]
    fn test_location_alone_builds_no_queries() {
        let mut attrs = empty_attrs();
        attrs.location = "Berlin".to_string();
        assert!(build_search_queries(&attrs).is_empty());
    }

    #[test]
    fn test_keywords_come_first_and_verbatim() {
        let queries = build_search_queries(&attrs());
        assert_eq!(
            queries[0],
            "site:linkedin.com/in \"Machine Learning Engineer\" \"San Francisco, CA\""
        );
    }

    #[test]
    fn test_all_queries_are_site_scoped() {
        for query in build_search_queries(&attrs()) {
            assert!(query.starts_with("site:linkedin.com/in "));
        }
    }

    #[test]
    fn test_title_and_skill_strategies_present() {
        let queries = build_search_queries(&attrs());
        assert!(queries.contains(&"site:linkedin.com/in \"Data Scientist\"".to_string()));
        assert!(queries
            .contains(&"site:linkedin.com/in \"Data Scientist\" \"python\"".to_string()));
        assert!(queries.contains(
            &"site:linkedin.com/in \"python\" \"sql\" \"San Francisco, CA\"".to_string()
        ));
    }

    #[test]
    fn test_duplicate_strategies_collapse() {
        let mut attrs = attrs();
        // Keyword identical to the title: title+location strategy collides
        // with the keyword strategy and must appear once.
        attrs.search_keywords = vec!["Data Scientist".to_string()];
        let queries = build_search_queries(&attrs);
        let expected =
            "site:linkedin.com/in \"Data Scientist\" \"San Francisco, CA\"".to_string();
        assert_eq!(queries.iter().filter(|q| **q == expected).count(), 1);
    }

    #[test]
    fn test_query_count_is_bounded() {
        let mut attrs = attrs();
        attrs.search_keywords = (0..20).map(|i| format!("Keyword {i}")).collect();
        assert!(build_search_queries(&attrs).len() <= MAX_QUERIES);
    }
}
