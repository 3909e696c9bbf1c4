//! # vaga_watch
//!
//! A single-purpose watcher for the G1 news search: one run fetches the
//! search results page for public-sector IT internship openings, extracts
//! candidate (title, link) pairs, keeps the ones whose titles pass a
//! two-tier keyword rule and whose links have not been reported before,
//! prints them, and appends their links to a line-delimited seen-links
//! file. Repeated runs (cron, systemd timer, by hand) therefore only
//! surface new matches.
//!
//! ## Usage
//!
//! ```sh
//! vaga_watch
//! vaga_watch --query "concurso ti goiania" --seen-file /var/lib/vaga_watch/links.txt
//! vaga_watch --probe
//! ```
//!
//! ## Architecture
//!
//! One sequential pipeline, no concurrency:
//! 1. **Store load**: read the seen-links file into a set (empty if absent)
//! 2. **Fetch**: one GET with a browser-like `User-Agent` and a 15s timeout
//! 3. **Extract**: primary class-marker selector, tracker-label fallback
//! 4. **Filter**: two-tier keyword rule plus the not-yet-seen check
//! 5. **Report**: print each match, appending its link immediately
//!
//! A fetch failure aborts the run before any state mutation and still exits
//! 0; scheduling the next attempt is the caller's job.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod config;
mod extract;
mod fetch;
mod filter;
mod models;
mod pipeline;
mod report;
mod store;

use cli::Cli;
use config::SearchConfig;
use fetch::HttpFetcher;
use pipeline::RunOutcome;
use store::FileStore;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!(date = %Local::now().format("%Y-%m-%d %H:%M:%S"), "vaga_watch starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.query, ?args.seen_file, ?args.probe, "Parsed CLI arguments");

    let config = SearchConfig::from_cli(&args);
    let search_url = config.search_url();
    match Url::parse(&search_url) {
        Ok(parsed) => info!(
            host = parsed.host_str().unwrap_or("<none>"),
            url = %search_url,
            "Search target"
        ),
        Err(e) => warn!(error = %e, url = %search_url, "Search URL did not parse cleanly"),
    }

    let fetcher = match HttpFetcher::new(&config.user_agent, config.timeout) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "Could not build the HTTP client");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    let outcome = if args.probe {
        pipeline::run_probe(&config, &fetcher).await
    } else {
        let mut store = FileStore::open(&config.seen_file)?;
        info!(known_links = store.len(), seen_file = %config.seen_file, "Seen-link store ready");
        pipeline::run_search(&config, &fetcher, &mut store).await?
    };

    match outcome {
        RunOutcome::Found(count) => info!(count, "Run completed with new matches"),
        RunOutcome::Empty => info!("Run completed; nothing new"),
        RunOutcome::FetchFailed => warn!("Run aborted at the fetch boundary; state untouched"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
