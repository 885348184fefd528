// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::PageSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Search query parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Pagination and timing behavior
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Keyword lists for classification
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// CSS selector fallback lists
    #[serde(default)]
    pub selectors: PageSelectors,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.browser.user_agent.trim().is_empty() {
            return Err(AppError::validation("browser.user_agent is empty"));
        }
        if self.browser.navigation_timeout_secs == 0 {
            return Err(AppError::validation(
                "browser.navigation_timeout_secs must be > 0",
            ));
        }
        if self.scraper.max_pages == 0 {
            return Err(AppError::validation("scraper.max_pages must be > 0"));
        }
        if self.search.keywords.trim().is_empty() {
            return Err(AppError::validation("search.keywords is empty"));
        }
        Url::parse(&self.search.base_url)
            .map_err(|e| AppError::validation(format!("search.base_url is invalid: {e}")))?;
        Url::parse(&self.search.origin)
            .map_err(|e| AppError::validation(format!("search.origin is invalid: {e}")))?;
        if self.keywords.relevance.is_empty() {
            return Err(AppError::validation("keywords.relevance is empty"));
        }
        if self.selectors.cards.is_empty() {
            return Err(AppError::validation("selectors.cards is empty"));
        }
        if self.output.csv_file.trim().is_empty() || self.output.json_file.trim().is_empty() {
            return Err(AppError::validation("output file names must not be empty"));
        }
        Ok(())
    }
}

/// Browser session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run the browser without a visible window
    #[serde(default = "defaults::headless")]
    pub headless: bool,

    /// User-Agent presented to the target site
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept-Language header value
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Per-navigation timeout in seconds
    #[serde(default = "defaults::navigation_timeout")]
    pub navigation_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: defaults::headless(),
            user_agent: defaults::user_agent(),
            accept_language: defaults::accept_language(),
            navigation_timeout_secs: defaults::navigation_timeout(),
        }
    }
}

/// Search query parameters for the jobs search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search results base URL
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Site origin used to absolutize relative job links
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Role keywords for the query
    #[serde(default = "defaults::search_keywords")]
    pub keywords: String,

    /// Locale/location string
    #[serde(default = "defaults::location")]
    pub location: String,

    /// Remote-work filter code (f_WF)
    #[serde(default = "defaults::remote_filter")]
    pub remote_filter: String,

    /// Experience-level filter code (f_E)
    #[serde(default = "defaults::experience_filter")]
    pub experience_filter: String,

    /// Employment-type filter code (f_JT)
    #[serde(default = "defaults::job_type_filter")]
    pub job_type_filter: String,

    /// Sort order code
    #[serde(default = "defaults::sort_by")]
    pub sort_by: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            origin: defaults::origin(),
            keywords: defaults::search_keywords(),
            location: defaults::location(),
            remote_filter: defaults::remote_filter(),
            experience_filter: defaults::experience_filter(),
            job_type_filter: defaults::job_type_filter(),
            sort_by: defaults::sort_by(),
        }
    }
}

impl SearchConfig {
    /// Build the full search URL with all query parameters.
    pub fn to_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("keywords", &self.keywords)
            .append_pair("location", &self.location)
            .append_pair("f_WF", &self.remote_filter)
            .append_pair("f_E", &self.experience_filter)
            .append_pair("f_JT", &self.job_type_filter)
            .append_pair("sortBy", &self.sort_by)
            .append_pair("position", "1")
            .append_pair("pageNum", "0");
        Ok(url)
    }
}

/// Pagination and timing behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Hard ceiling on pages visited per run
    #[serde(default = "defaults::max_pages")]
    pub max_pages: usize,

    /// Settle delay after the initial navigation, in milliseconds
    #[serde(default = "defaults::initial_settle")]
    pub initial_settle_ms: u64,

    /// Settle delay after each next-page click, in milliseconds
    #[serde(default = "defaults::page_settle")]
    pub page_settle_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_pages: defaults::max_pages(),
            initial_settle_ms: defaults::initial_settle(),
            page_settle_ms: defaults::page_settle(),
        }
    }
}

/// Keyword lists for record classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// A title must contain one of these to be retained
    #[serde(default = "defaults::relevance_keywords")]
    pub relevance: Vec<String>,

    /// Title or location containing one of these marks the job remote
    #[serde(default = "defaults::remote_keywords")]
    pub remote: Vec<String>,

    /// Title containing one of these marks the job senior-level
    #[serde(default = "defaults::senior_keywords")]
    pub senior: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            relevance: defaults::relevance_keywords(),
            remote: defaults::remote_keywords(),
            senior: defaults::senior_keywords(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for output files
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// CSV output file name
    #[serde(default = "defaults::csv_file")]
    pub csv_file: String,

    /// JSON output file name
    #[serde(default = "defaults::json_file")]
    pub json_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            csv_file: defaults::csv_file(),
            json_file: defaults::json_file(),
        }
    }
}

mod defaults {
    // Browser defaults
    pub fn headless() -> bool {
        true
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn accept_language() -> String {
        "pt-BR,pt;q=0.9,en;q=0.8".into()
    }
    pub fn navigation_timeout() -> u64 {
        30
    }

    // Search defaults
    pub fn base_url() -> String {
        "https://www.linkedin.com/jobs/search/".into()
    }
    pub fn origin() -> String {
        "https://www.linkedin.com".into()
    }
    pub fn search_keywords() -> String {
        "Analista de Sistemas Sênior".into()
    }
    pub fn location() -> String {
        "Brasil".into()
    }
    pub fn remote_filter() -> String {
        "9".into()
    }
    pub fn experience_filter() -> String {
        "4".into()
    }
    pub fn job_type_filter() -> String {
        "F".into()
    }
    pub fn sort_by() -> String {
        "DD".into()
    }

    // Scraper defaults
    pub fn max_pages() -> usize {
        3
    }
    pub fn initial_settle() -> u64 {
        5000
    }
    pub fn page_settle() -> u64 {
        3000
    }

    // Keyword defaults
    pub fn relevance_keywords() -> Vec<String> {
        vec![
            "analista de sistemas".into(),
            "systems analyst".into(),
            "analista sistemas".into(),
            "analista sênior".into(),
            "senior analyst".into(),
        ]
    }
    pub fn remote_keywords() -> Vec<String> {
        vec![
            "remote".into(),
            "remoto".into(),
            "remota".into(),
            "home office".into(),
            "teletrabalho".into(),
        ]
    }
    pub fn senior_keywords() -> Vec<String> {
        vec![
            "sênior".into(),
            "senior".into(),
            "sr.".into(),
            "sr".into(),
            "pleno".into(),
            "experiente".into(),
        ]
    }

    // Output defaults
    pub fn output_dir() -> String {
        "output".into()
    }
    pub fn csv_file() -> String {
        "vagas_remotas_senior.csv".into()
    }
    pub fn json_file() -> String {
        "vagas_remotas_senior.json".into()
    }
}
