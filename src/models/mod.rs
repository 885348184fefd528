// src/models/mod.rs

//! Domain models for the scraper application.

mod config;
mod job;
mod selectors;

// Re-export all public types
pub use config::{
    BrowserConfig, Config, KeywordConfig, OutputConfig, ScraperConfig, SearchConfig,
};
pub use job::{
    FALLBACK_COMPANY, FALLBACK_LINK, FALLBACK_LOCATION, FALLBACK_TIME, JobRecord, RawJob,
    SCRAPED_AT_FORMAT,
};
pub use selectors::PageSelectors;
