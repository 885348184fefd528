// src/lib.rs

//! vagascout Library
//!
//! Browser-driven extraction of job postings from a dynamic search-results
//! page: navigate, wait for render, extract records, classify, paginate,
//! deduplicate, persist.

pub mod browser;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
