// src/pipeline/mod.rs

//! Pipeline entry point for scraper runs.
//!
//! - `run_scrape`: navigate the search results, extract and classify job
//!   cards page by page, deduplicate, report, persist.

pub mod scrape;

pub use scrape::{ScrapeOutcome, run_scrape};
