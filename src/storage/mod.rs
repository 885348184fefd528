// src/storage/mod.rs

//! Persistence sinks for the final record set.
//!
//! Two independent serializations of the same sequence: a localized CSV table
//! and a pretty-printed JSON array. Both are whole-file overwrites; filesystem
//! failures propagate to the caller.

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::JobRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Localized CSV header, one column per record field.
pub const CSV_HEADER: [&str; 8] = [
    "Cargo",
    "Empresa",
    "Localização",
    "Data/Período",
    "Link da Vaga",
    "Remoto",
    "Nível Sênior",
    "Data da Coleta",
];

/// Trait for job record sinks.
#[async_trait]
pub trait JobStorage: Send + Sync {
    /// Write the record set as CSV. Returns the written path.
    async fn write_csv(&self, jobs: &[JobRecord]) -> Result<PathBuf>;

    /// Write the record set as pretty-printed JSON. Returns the written path.
    async fn write_json(&self, jobs: &[JobRecord]) -> Result<PathBuf>;

    /// Load the last persisted JSON record set, empty if none exists.
    async fn load_jobs(&self) -> Result<Vec<JobRecord>>;
}
