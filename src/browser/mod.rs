// src/browser/mod.rs

//! Browser session abstraction.
//!
//! The pipeline only needs a narrow capability surface from the headless
//! engine: navigate with a timeout, snapshot the rendered DOM, locate and
//! click the next-page control, and close the session. Keeping it behind a
//! trait lets tests drive the pipeline with scripted pages.

pub mod chrome;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use chrome::ChromeSession;

/// Result of attempting to click the next-page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Control found, enabled, and clicked
    Clicked,
    /// Control found but disabled
    Disabled,
    /// No control matched any selector
    NotFound,
}

/// A single browser page context.
///
/// Exactly one page is used per run: opened once at startup, closed exactly
/// once at shutdown.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Navigate to a URL and wait for the load to complete, bounded by the
    /// session's navigation timeout.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Snapshot the rendered DOM as an HTML string.
    async fn content(&self) -> Result<String>;

    /// Try each selector in order; click the first enabled match.
    async fn click_next(&self, selectors: &[String]) -> Result<ClickOutcome>;

    /// Close the page and the underlying browser process.
    async fn close(&mut self) -> Result<()>;
}
