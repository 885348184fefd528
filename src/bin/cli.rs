//! vagascout CLI
//!
//! Local execution entry point for the job scraping pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vagascout::{
    browser::{BrowserPage, ChromeSession},
    error::Result,
    models::Config,
    pipeline,
    storage::{JobStorage, LocalStorage},
};

/// vagascout - Remote senior systems-analyst job scraper
#[derive(Parser, Debug)]
#[command(
    name = "vagascout",
    version,
    about = "Browser-driven job posting scraper"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scraping pipeline
    Scrape {
        /// Hard ceiling on result pages to visit
        #[arg(long)]
        max_pages: Option<usize>,

        /// Directory for the output files
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Show output state from the last run
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Scrape {
            max_pages,
            output_dir,
        } => {
            if let Some(n) = max_pages {
                config.scraper.max_pages = n;
            }
            if let Some(dir) = output_dir {
                config.output.dir = dir.display().to_string();
            }
            config.validate()?;

            let storage = LocalStorage::new(&config.output);

            log::info!("Launching browser session...");
            let mut session = ChromeSession::launch(&config.browser).await?;

            // The session is closed exactly once, whatever the run did.
            let result = pipeline::run_scrape(&config, &session, &storage).await;
            if let Err(e) = session.close().await {
                log::warn!("Browser close failed: {e}");
            }
            let outcome = result?;

            if outcome.jobs.is_empty() {
                log::warn!("No jobs found.");
            } else {
                log::info!(
                    "Done! {} jobs saved ({} pages visited{})",
                    outcome.jobs.len(),
                    outcome.pages_visited,
                    if outcome.aborted { ", run aborted early" } else { "" }
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("Config OK (search, keywords, selectors, output)");
        }

        Command::Info => {
            let storage = LocalStorage::new(&config.output);
            log::info!("Output directory: {}", config.output.dir);

            let jobs = storage.load_jobs().await?;
            if jobs.is_empty() {
                log::info!("No persisted results found yet.");
            } else {
                log::info!("Last run persisted {} jobs", jobs.len());
                if let Some(job) = jobs.first() {
                    log::info!("Most recent scrape: {}", job.scraped_at);
                }
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
