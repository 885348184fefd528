// src/models/job.rs

//! Job posting data structures.

use serde::{Deserialize, Serialize};

/// Timestamp format for `scraped_at` (pt-BR locale style).
pub const SCRAPED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Placeholder for a missing company name.
pub const FALLBACK_COMPANY: &str = "Não informado";
/// Placeholder for a missing location.
pub const FALLBACK_LOCATION: &str = "Remoto";
/// Placeholder for a missing posting date.
pub const FALLBACK_TIME: &str = "Não informado";
/// Placeholder for a missing link.
pub const FALLBACK_LINK: &str = "Não disponível";

/// Raw field tuple read from one card element on a results page.
///
/// No defaults applied yet; empty-title cards never reach this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJob {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub time: Option<String>,
    pub link: Option<String>,
}

/// A job posting that passed the relevance filter.
///
/// Serde field names match the JSON output contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    /// Job title (never empty)
    pub title: String,

    /// Company name
    pub company: String,

    /// Location text
    pub location: String,

    /// Free-form posting date/age string
    pub time: String,

    /// Absolute URL to the posting
    pub link: String,

    /// Title or location matched a remote keyword
    pub remote: bool,

    /// Title matched a seniority keyword
    pub senior: bool,

    /// Timestamp of extraction, set once and never recomputed
    #[serde(rename = "scrapedAt")]
    pub scraped_at: String,
}

impl JobRecord {
    /// Identity key for deduplication: two records with the same
    /// title and company are the same job.
    pub fn identity_key(&self) -> String {
        format!("{}-{}", self.title, self.company)
    }

    /// Format the record for console display using a template.
    ///
    /// Supported placeholders:
    /// - `{title}`, `{company}`, `{location}`, `{time}`, `{link}`
    /// - `{remote}`, `{senior}`, `{scraped_at}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{company}", &self.company)
            .replace("{location}", &self.location)
            .replace("{time}", &self.time)
            .replace("{link}", &self.link)
            .replace("{remote}", if self.remote { "sim" } else { "não" })
            .replace("{senior}", if self.senior { "sim" } else { "não" })
            .replace("{scraped_at}", &self.scraped_at)
    }
}
