// src/models/selectors.rs

//! CSS selectors for scraping a job search results page.
//!
//! Every field carries a prioritized fallback list: the first selector that
//! matches wins. The target site renders two generations of card markup, so
//! each list holds the current class name followed by the older one.

use serde::{Deserialize, Serialize};

/// Selector fallback lists for one results-page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSelectors {
    /// Selectors for each job card element
    #[serde(default = "defaults::cards")]
    pub cards: Vec<String>,

    /// Selectors for the title element within a card
    #[serde(default = "defaults::title")]
    pub title: Vec<String>,

    /// Selectors for the company element within a card
    #[serde(default = "defaults::company")]
    pub company: Vec<String>,

    /// Selectors for the location element within a card
    #[serde(default = "defaults::location")]
    pub location: Vec<String>,

    /// Selectors for the posting date element within a card
    #[serde(default = "defaults::time")]
    pub time: Vec<String>,

    /// Selectors for the link element within a card
    #[serde(default = "defaults::link")]
    pub link: Vec<String>,

    /// HTML attribute name for extracting links (usually "href")
    #[serde(default = "defaults::link_attr")]
    pub link_attr: String,

    /// Selectors for the next-page control
    #[serde(default = "defaults::next_button")]
    pub next_button: Vec<String>,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            cards: defaults::cards(),
            title: defaults::title(),
            company: defaults::company(),
            location: defaults::location(),
            time: defaults::time(),
            link: defaults::link(),
            link_attr: defaults::link_attr(),
            next_button: defaults::next_button(),
        }
    }
}

mod defaults {
    pub fn cards() -> Vec<String> {
        vec![
            ".jobs-search__results-list li".into(),
            ".job-search-card".into(),
            "[data-entity-urn*=\"jobPosting\"]".into(),
        ]
    }

    pub fn title() -> Vec<String> {
        vec![
            ".base-search-card__title".into(),
            ".job-search-card__title".into(),
        ]
    }

    pub fn company() -> Vec<String> {
        vec![
            ".base-search-card__subtitle".into(),
            ".job-search-card__company".into(),
        ]
    }

    pub fn location() -> Vec<String> {
        vec![
            ".job-search-card__location".into(),
            ".job-search-card__metadata__item".into(),
        ]
    }

    pub fn time() -> Vec<String> {
        vec![".job-search-card__listdate".into(), "time".into()]
    }

    pub fn link() -> Vec<String> {
        vec![
            "a.base-card__full-link".into(),
            "a.job-search-card__link".into(),
        ]
    }

    pub fn link_attr() -> String {
        "href".into()
    }

    pub fn next_button() -> Vec<String> {
        vec![
            "button[aria-label=\"Avançar\"]".into(),
            "button[aria-label=\"Next\"]".into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_nonempty() {
        let selectors = PageSelectors::default();
        assert!(!selectors.cards.is_empty());
        assert!(!selectors.title.is_empty());
        assert!(!selectors.next_button.is_empty());
        assert_eq!(selectors.link_attr, "href");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let selectors: PageSelectors = toml::from_str("cards = [\".card\"]").unwrap();
        assert_eq!(selectors.cards, vec![".card".to_string()]);
        assert_eq!(selectors.title.len(), 2);
    }
}
