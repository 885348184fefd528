// src/services/mod.rs

//! Service layer for the scraper application.
//!
//! This module contains the business logic for:
//! - Record extraction from rendered markup (`JobExtractor`)
//! - Keyword classification (`Classifier`)
//! - Result-page pagination (`Paginator`)
//! - Duplicate removal (`dedupe_jobs`)

mod classify;
mod dedupe;
mod extract;
mod paginate;

pub use classify::Classifier;
pub use dedupe::dedupe_jobs;
pub use extract::JobExtractor;
pub use paginate::{PageState, Paginator};
