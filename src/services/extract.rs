// src/services/extract.rs

//! Record extraction from rendered page markup.
//!
//! Walks the repeating card elements of one results page and reads the
//! sub-fields of each. Every field has a prioritized selector fallback list
//! to tolerate markup variation between card generations.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{PageSelectors, RawJob};

/// Extracts raw job tuples from one rendered results page.
///
/// Read-only over already-fetched markup; selectors are parsed once at
/// construction.
pub struct JobExtractor {
    cards: Vec<Selector>,
    title: Vec<Selector>,
    company: Vec<Selector>,
    location: Vec<Selector>,
    time: Vec<Selector>,
    link: Vec<Selector>,
    link_attr: String,
}

impl JobExtractor {
    /// Build an extractor from selector fallback lists.
    pub fn new(selectors: &PageSelectors) -> Result<Self> {
        Ok(Self {
            cards: parse_all(&selectors.cards)?,
            title: parse_all(&selectors.title)?,
            company: parse_all(&selectors.company)?,
            location: parse_all(&selectors.location)?,
            time: parse_all(&selectors.time)?,
            link: parse_all(&selectors.link)?,
            link_attr: selectors.link_attr.clone(),
        })
    }

    /// Extract one raw tuple per matched card element.
    ///
    /// Cards without a title are excluded here, unconditionally and before
    /// any relevance filtering.
    pub fn extract(&self, html: &str) -> Vec<RawJob> {
        let document = Html::parse_document(html);

        // First card selector that matches anything wins.
        let cards: Vec<ElementRef> = self
            .cards
            .iter()
            .map(|sel| document.select(sel).collect::<Vec<_>>())
            .find(|matches| !matches.is_empty())
            .unwrap_or_default();

        let total = cards.len();
        let jobs: Vec<RawJob> = cards
            .into_iter()
            .filter_map(|card| self.parse_card(&card))
            .collect();
        if jobs.len() < total {
            log::debug!("Skipped {} card(s) without a title", total - jobs.len());
        }
        jobs
    }

    fn parse_card(&self, card: &ElementRef) -> Option<RawJob> {
        let title = self.field_text(card, &self.title)?;

        Some(RawJob {
            title,
            company: self.field_text(card, &self.company),
            location: self.field_text(card, &self.location),
            time: self.field_text(card, &self.time),
            link: self.field_attr(card, &self.link, &self.link_attr),
        })
    }

    /// First selector whose match has non-empty text wins.
    fn field_text(&self, card: &ElementRef, selectors: &[Selector]) -> Option<String> {
        selectors
            .iter()
            .filter_map(|sel| card.select(sel).next())
            .map(|elem| normalize_whitespace(&elem.text().collect::<String>()))
            .find(|text| !text.is_empty())
    }

    fn field_attr(&self, card: &ElementRef, selectors: &[Selector], attr: &str) -> Option<String> {
        selectors
            .iter()
            .filter_map(|sel| card.select(sel).next())
            .filter_map(|elem| elem.value().attr(attr))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

fn parse_all(selectors: &[String]) -> Result<Vec<Selector>> {
    selectors.iter().map(|s| parse_selector(s)).collect()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageSelectors;

    fn extractor() -> JobExtractor {
        JobExtractor::new(&PageSelectors::default()).unwrap()
    }

    const PAGE: &str = r#"
        <ul class="jobs-search__results-list">
          <li>
            <a class="base-card__full-link" href="/jobs/view/111"></a>
            <h3 class="base-search-card__title"> Analista de Sistemas Sênior </h3>
            <h4 class="base-search-card__subtitle">Acme</h4>
            <span class="job-search-card__location">São Paulo</span>
            <time class="job-search-card__listdate">há 2 dias</time>
          </li>
          <li>
            <h3 class="job-search-card__title">Systems Analyst Senior</h3>
            <span class="job-search-card__location">Remote</span>
          </li>
          <li>
            <h4 class="base-search-card__subtitle">Sem Título Ltda</h4>
          </li>
        </ul>
    "#;

    #[test]
    fn test_extracts_one_tuple_per_card() {
        let jobs = extractor().extract(PAGE);
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_title_required() {
        let jobs = extractor().extract(PAGE);
        assert!(jobs.iter().all(|j| !j.title.is_empty()));
        assert!(!jobs.iter().any(|j| j.company.as_deref() == Some("Sem Título Ltda")));
    }

    #[test]
    fn test_fallback_selectors_read_both_generations() {
        let jobs = extractor().extract(PAGE);
        assert_eq!(jobs[0].title, "Analista de Sistemas Sênior");
        assert_eq!(jobs[1].title, "Systems Analyst Senior");
    }

    #[test]
    fn test_whitespace_normalized() {
        let jobs = extractor().extract(PAGE);
        assert_eq!(jobs[0].title, "Analista de Sistemas Sênior");
    }

    #[test]
    fn test_optional_fields() {
        let jobs = extractor().extract(PAGE);
        assert_eq!(jobs[0].company.as_deref(), Some("Acme"));
        assert_eq!(jobs[0].link.as_deref(), Some("/jobs/view/111"));
        assert_eq!(jobs[0].time.as_deref(), Some("há 2 dias"));
        assert!(jobs[1].company.is_none());
        assert!(jobs[1].link.is_none());
    }

    #[test]
    fn test_empty_page() {
        assert!(extractor().extract("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut selectors = PageSelectors::default();
        selectors.cards = vec!["[[invalid".into()];
        assert!(JobExtractor::new(&selectors).is_err());
    }
}
