// src/storage/local.rs

//! Local filesystem sink.
//!
//! Serializes the record set to `{dir}/{csv_file}` and `{dir}/{json_file}`.
//! Files are written atomically (write to temp, then rename) so readers never
//! observe a partial file.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{JobRecord, OutputConfig};
use crate::storage::{CSV_HEADER, JobStorage};

/// Filesystem-backed job sink.
#[derive(Clone)]
pub struct LocalStorage {
    dir: PathBuf,
    csv_file: String,
    json_file: String,
}

impl LocalStorage {
    /// Create a sink from output settings.
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            dir: PathBuf::from(&output.dir),
            csv_file: output.csv_file.clone(),
            json_file: output.json_file.clone(),
        }
    }

    /// Path of the CSV output file.
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    /// Path of the JSON output file.
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json_file)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &PathBuf, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    fn encode_csv(jobs: &[JobRecord]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for job in jobs {
            writer.write_record([
                job.title.as_str(),
                job.company.as_str(),
                job.location.as_str(),
                job.time.as_str(),
                job.link.as_str(),
                if job.remote { "true" } else { "false" },
                if job.senior { "true" } else { "false" },
                job.scraped_at.as_str(),
            ])?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::scrape("csv encode", e))
    }
}

#[async_trait]
impl JobStorage for LocalStorage {
    async fn write_csv(&self, jobs: &[JobRecord]) -> Result<PathBuf> {
        let path = self.csv_path();
        let bytes = Self::encode_csv(jobs)?;
        self.write_bytes(&path, &bytes).await?;
        Ok(path)
    }

    async fn write_json(&self, jobs: &[JobRecord]) -> Result<PathBuf> {
        let path = self.json_path();
        let bytes = serde_json::to_vec_pretty(jobs)?;
        self.write_bytes(&path, &bytes).await?;
        Ok(path)
    }

    async fn load_jobs(&self) -> Result<Vec<JobRecord>> {
        let path = self.json_path();
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
