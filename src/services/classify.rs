// src/services/classify.rs

//! Keyword classification of extracted job tuples.
//!
//! Three pure predicates, all case-insensitive substring matches against
//! configured keyword lists. Relevance is a filter; remote and senior are
//! annotations.

use url::Url;

use crate::models::{
    FALLBACK_COMPANY, FALLBACK_LINK, FALLBACK_LOCATION, FALLBACK_TIME, JobRecord, KeywordConfig,
    RawJob,
};
use crate::utils::resolve_url;

/// Classifies raw job tuples and assembles retained records.
pub struct Classifier {
    keywords: KeywordConfig,
    origin: Option<Url>,
}

impl Classifier {
    /// Create a classifier with the given keyword lists and site origin.
    ///
    /// The origin is used to absolutize relative job links.
    pub fn new(keywords: KeywordConfig, origin: &str) -> Self {
        Self {
            keywords,
            origin: Url::parse(origin).ok(),
        }
    }

    /// True if the title contains any relevance keyword.
    pub fn is_relevant(&self, title: &str) -> bool {
        contains_any(&title.to_lowercase(), &self.keywords.relevance)
    }

    /// True if the title or location contains any remote keyword.
    pub fn is_remote(&self, title: &str, location: &str) -> bool {
        let title = title.to_lowercase();
        let location = location.to_lowercase();
        self.keywords
            .remote
            .iter()
            .any(|kw| title.contains(&kw.to_lowercase()) || location.contains(&kw.to_lowercase()))
    }

    /// True if the title contains any seniority keyword.
    pub fn is_senior(&self, title: &str) -> bool {
        contains_any(&title.to_lowercase(), &self.keywords.senior)
    }

    /// Turn a raw tuple into a retained record, or `None` if the title fails
    /// the relevance filter. Missing optional fields get their placeholders,
    /// relative links are absolutized against the origin.
    pub fn annotate(&self, raw: RawJob, scraped_at: &str) -> Option<JobRecord> {
        if !self.is_relevant(&raw.title) {
            return None;
        }

        // Remote is judged on the raw location; the placeholder is only a
        // display default and must not feed the keyword match.
        let remote = self.is_remote(&raw.title, raw.location.as_deref().unwrap_or(""));
        let senior = self.is_senior(&raw.title);
        let location = raw
            .location
            .unwrap_or_else(|| FALLBACK_LOCATION.to_string());

        Some(JobRecord {
            senior,
            remote,
            location,
            company: raw.company.unwrap_or_else(|| FALLBACK_COMPANY.to_string()),
            time: raw.time.unwrap_or_else(|| FALLBACK_TIME.to_string()),
            link: self.absolutize(raw.link),
            title: raw.title,
            scraped_at: scraped_at.to_string(),
        })
    }

    fn absolutize(&self, link: Option<String>) -> String {
        match link {
            Some(href) if href.starts_with("http") => href,
            Some(href) => match &self.origin {
                Some(origin) => resolve_url(origin, &href),
                None => href,
            },
            None => FALLBACK_LINK.to_string(),
        }
    }
}

fn contains_any(haystack_lower: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| haystack_lower.contains(&kw.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeywordConfig;

    fn classifier() -> Classifier {
        Classifier::new(KeywordConfig::default(), "https://www.linkedin.com")
    }

    fn raw(title: &str) -> RawJob {
        RawJob {
            title: title.to_string(),
            company: None,
            location: None,
            time: None,
            link: None,
        }
    }

    #[test]
    fn test_relevance_case_insensitive() {
        let c = classifier();
        assert!(c.is_relevant("ANALISTA DE SISTEMAS Pleno"));
        assert!(c.is_relevant("Senior Analyst - Data"));
        assert!(!c.is_relevant("Recruiter"));
    }

    #[test]
    fn test_remote_matches_title_or_location() {
        let c = classifier();
        assert!(c.is_remote("Analista (Remoto)", "Brasil"));
        assert!(c.is_remote("Analista", "Home Office"));
        assert!(!c.is_remote("Analista", "São Paulo"));
    }

    #[test]
    fn test_senior_keywords() {
        let c = classifier();
        assert!(c.is_senior("Analista de Sistemas Sênior"));
        assert!(c.is_senior("Sr. Systems Analyst"));
        assert!(!c.is_senior("Analista de Sistemas Júnior"));
    }

    #[test]
    fn test_predicates_are_idempotent() {
        let c = classifier();
        let title = "Analista de Sistemas Sênior Remoto";
        assert_eq!(c.is_remote(title, ""), c.is_remote(title, ""));
        assert_eq!(c.is_senior(title), c.is_senior(title));
    }

    #[test]
    fn test_annotate_drops_irrelevant() {
        assert!(classifier().annotate(raw("Recruiter"), "x").is_none());
    }

    #[test]
    fn test_annotate_applies_placeholders() {
        let record = classifier()
            .annotate(raw("Analista de Sistemas"), "01/02/2026 10:00:00")
            .unwrap();
        assert_eq!(record.company, FALLBACK_COMPANY);
        assert_eq!(record.location, FALLBACK_LOCATION);
        assert_eq!(record.time, FALLBACK_TIME);
        assert_eq!(record.link, FALLBACK_LINK);
        assert_eq!(record.scraped_at, "01/02/2026 10:00:00");
    }

    #[test]
    fn test_annotate_missing_location_is_not_remote() {
        // The "Remoto" display placeholder must not feed the keyword match.
        let record = classifier().annotate(raw("Analista de Sistemas"), "x").unwrap();
        assert_eq!(record.location, FALLBACK_LOCATION);
        assert!(!record.remote);
    }

    #[test]
    fn test_annotate_remote_from_actual_location() {
        let mut job = raw("Analista de Sistemas");
        job.location = Some("Home Office".to_string());
        let record = classifier().annotate(job, "x").unwrap();
        assert!(record.remote);
    }

    #[test]
    fn test_annotate_absolutizes_relative_link() {
        let mut job = raw("Analista de Sistemas");
        job.link = Some("/jobs/view/123".to_string());
        let record = classifier().annotate(job, "x").unwrap();
        assert_eq!(record.link, "https://www.linkedin.com/jobs/view/123");
    }

    #[test]
    fn test_annotate_keeps_absolute_link() {
        let mut job = raw("Analista de Sistemas");
        job.link = Some("https://example.com/v/1".to_string());
        let record = classifier().annotate(job, "x").unwrap();
        assert_eq!(record.link, "https://example.com/v/1");
    }

    #[test]
    fn test_scenario_three_cards() {
        let c = classifier();
        let titles = [
            "Analista de Sistemas Sênior",
            "Recruiter",
            "Systems Analyst Senior",
        ];
        let mut third = raw(titles[2]);
        third.location = Some("Remote, São Paulo".to_string());

        let first = c.annotate(raw(titles[0]), "x");
        let second = c.annotate(raw(titles[1]), "x");
        let third = c.annotate(third, "x");

        assert!(first.as_ref().is_some_and(|r| r.senior));
        assert!(second.is_none());
        assert!(third.as_ref().is_some_and(|r| r.remote));
    }
}
