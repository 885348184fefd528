// src/pipeline/scrape.rs

//! Job scraping pipeline.
//!
//! Sequences the whole run: build the search URL, navigate, wait for the
//! client-side render, then loop extract → classify → accumulate → paginate
//! up to the page ceiling. The accumulated set is deduplicated, reported and
//! persisted. A failure inside the loop is caught at this boundary so the
//! partial set collected up to that point still reaches the sinks; the caller
//! owns the browser session and closes it afterwards.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;

use crate::browser::BrowserPage;
use crate::error::Result;
use crate::models::{Config, JobRecord, SCRAPED_AT_FORMAT};
use crate::services::{Classifier, JobExtractor, PageState, Paginator, dedupe_jobs};
use crate::storage::JobStorage;

/// Summary of a scrape run.
#[derive(Debug)]
pub struct ScrapeOutcome {
    /// Final deduplicated record set
    pub jobs: Vec<JobRecord>,
    /// Pages actually visited
    pub pages_visited: usize,
    /// True if the extraction loop was cut short by a failure
    pub aborted: bool,
    /// Where the CSV was written
    pub csv_path: PathBuf,
    /// Where the JSON was written
    pub json_path: PathBuf,
}

/// Run the full scraping pipeline against an open browser session.
///
/// Persistence failures propagate; extraction-loop failures do not.
pub async fn run_scrape(
    config: &Config,
    page: &dyn BrowserPage,
    storage: &dyn JobStorage,
) -> Result<ScrapeOutcome> {
    let mut jobs = Vec::new();
    let mut paginator = Paginator::new(
        config.scraper.max_pages,
        Duration::from_millis(config.scraper.page_settle_ms),
    );

    let aborted = match collect_jobs(config, page, &mut paginator, &mut jobs).await {
        Ok(()) => false,
        Err(e) => {
            log::error!("Scrape aborted, keeping partial results: {e}");
            true
        }
    };

    let jobs = dedupe_jobs(jobs);
    log::info!(
        "Collected {} unique jobs across {} page(s)",
        jobs.len(),
        paginator.pages_visited()
    );

    report_results(&jobs);

    let csv_path = storage.write_csv(&jobs).await?;
    let json_path = storage.write_json(&jobs).await?;
    log::info!("Saved results to {} and {}", csv_path.display(), json_path.display());

    Ok(ScrapeOutcome {
        jobs,
        pages_visited: paginator.pages_visited(),
        aborted,
        csv_path,
        json_path,
    })
}

/// Navigate and accumulate classified records page by page.
async fn collect_jobs(
    config: &Config,
    page: &dyn BrowserPage,
    paginator: &mut Paginator,
    jobs: &mut Vec<JobRecord>,
) -> Result<()> {
    let extractor = JobExtractor::new(&config.selectors)?;
    let classifier = Classifier::new(config.keywords.clone(), &config.search.origin);

    let search_url = config.search.to_url()?;
    log::info!("Searching jobs at {search_url}");
    page.navigate(search_url.as_str()).await?;

    let initial_settle = Duration::from_millis(config.scraper.initial_settle_ms);
    if !initial_settle.is_zero() {
        tokio::time::sleep(initial_settle).await;
    }

    while paginator.begin_cycle() {
        log::info!("Processing page {}...", paginator.pages_visited());

        let html = page.content().await?;
        let scraped_at = Local::now().format(SCRAPED_AT_FORMAT).to_string();

        let raw_jobs = extractor.extract(&html);
        let before = jobs.len();
        jobs.extend(
            raw_jobs
                .into_iter()
                .filter_map(|raw| classifier.annotate(raw, &scraped_at)),
        );
        log::info!("Found {} relevant jobs on this page", jobs.len() - before);

        if paginator.advance(page, &config.selectors.next_button).await == PageState::Exhausted {
            log::info!("No more result pages");
            break;
        }
    }

    Ok(())
}

/// Human-readable run summary. Not a stable contract.
fn report_results(jobs: &[JobRecord]) {
    if jobs.is_empty() {
        log::warn!("No jobs found. Try adjusting the search parameters.");
        return;
    }

    for (index, job) in jobs.iter().enumerate() {
        log::info!(
            "{}. {}",
            index + 1,
            job.format("{title} | {company} | {location} | remoto: {remote} | sênior: {senior}")
        );
    }

    let remote = jobs.iter().filter(|j| j.remote).count();
    let senior = jobs.iter().filter(|j| j.senior).count();
    log::info!(
        "Summary: {} jobs ({} remote, {} senior)",
        jobs.len(),
        remote,
        senior
    );
}
