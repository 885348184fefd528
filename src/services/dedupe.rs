// src/services/dedupe.rs

//! Duplicate removal over the accumulated record sequence.

use std::collections::HashSet;

use crate::models::JobRecord;

/// Drop records whose identity key (title + company) was already seen,
/// preserving first-seen order.
pub fn dedupe_jobs(jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(job.identity_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: &str, link: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            company: company.to_string(),
            location: "Remoto".to_string(),
            time: "hoje".to_string(),
            link: link.to_string(),
            remote: true,
            senior: false,
            scraped_at: "01/02/2026 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let jobs = vec![
            record("Analista", "Acme", "https://a/1"),
            record("Analista", "Acme", "https://a/2"),
        ];
        let deduped = dedupe_jobs(jobs);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].link, "https://a/1");
    }

    #[test]
    fn test_same_title_different_company_kept() {
        let jobs = vec![
            record("Analista", "Acme", "https://a/1"),
            record("Analista", "Globex", "https://a/2"),
        ];
        assert_eq!(dedupe_jobs(jobs).len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let jobs = vec![
            record("A", "X", "1"),
            record("B", "Y", "2"),
            record("A", "X", "3"),
            record("C", "Z", "4"),
        ];
        let titles: Vec<_> = dedupe_jobs(jobs).into_iter().map(|j| j.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_jobs(Vec::new()).is_empty());
    }
}
