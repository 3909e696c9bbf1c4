//! The search-and-report pipeline.
//!
//! One run is a linear sequence: fetch the results page, extract candidates,
//! select the unseen relevant ones, report and persist them. There is
//! exactly one failure branch — a fetch failure aborts the run before any
//! state mutation — and one empty branch, where nothing new is reported and
//! nothing is written. Store write failures during reporting propagate.

use crate::config::SearchConfig;
use crate::fetch::Fetcher;
use crate::models::Vacancy;
use crate::store::SeenLinkStore;
use crate::{extract, filter, report};
use chrono::Local;
use std::error::Error;
use tracing::{error, info, instrument};

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Completed; this many matches were reported and persisted.
    Found(usize),
    /// Completed; nothing new survived the filter.
    Empty,
    /// Aborted at the fetch boundary; no state was mutated.
    FetchFailed,
}

/// One full search-and-report cycle.
///
/// Fetch failures are a handled branch ([`RunOutcome::FetchFailed`]), not an
/// `Err`; only store I/O failures during reporting propagate.
#[instrument(level = "info", skip_all)]
pub async fn run_search<F, S>(
    config: &SearchConfig,
    fetcher: &F,
    store: &mut S,
) -> Result<RunOutcome, Box<dyn Error>>
where
    F: Fetcher,
    S: SeenLinkStore,
{
    let url = config.search_url();
    println!(
        "[{}] Starting G1 search...",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let html = match fetcher.fetch(&url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, %url, "Search page fetch failed; aborting this run");
            println!("ERROR: could not access the URL. Check your connection or the URL. Details: {e}");
            return Ok(RunOutcome::FetchFailed);
        }
    };

    let candidates = extract::extract_candidates(&html);
    let vacancies: Vec<Vacancy> = filter::select_new(candidates, &config.keywords, store);
    info!(matches = vacancies.len(), "Relevance filtering done");

    let outcome = if vacancies.is_empty() {
        report::report_empty();
        RunOutcome::Empty
    } else {
        report::report_matches(&vacancies, store, &config.seen_file)?;
        RunOutcome::Found(vacancies.len())
    };

    println!("{}", "-".repeat(60));
    Ok(outcome)
}

/// Selector-debugging run: fetch and extract, then dump every candidate
/// without consulting the keyword rule or the store.
#[instrument(level = "info", skip_all)]
pub async fn run_probe<F: Fetcher>(config: &SearchConfig, fetcher: &F) -> RunOutcome {
    let url = config.search_url();
    let html = match fetcher.fetch(&url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, %url, "Probe fetch failed");
            println!("ERROR: could not access the URL. Details: {e}");
            return RunOutcome::FetchFailed;
        }
    };

    let candidates = extract::extract_candidates(&html);
    for candidate in &candidates {
        println!("{}", "=".repeat(100));
        println!("{}", candidate.title);
        if let Some(link) = &candidate.link {
            println!("{link}");
        }
    }
    println!("{}", "=".repeat(100));
    println!("{} candidates extracted.", candidates.len());

    if candidates.is_empty() {
        RunOutcome::Empty
    } else {
        RunOutcome::Found(candidates.len())
    }
}
