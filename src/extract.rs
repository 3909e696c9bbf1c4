//! Candidate extraction from the search results page.
//!
//! This is the part most vulnerable to markup drift on the G1 side, so two
//! selector strategies exist:
//!
//! 1. **Primary**: every `<a>` whose `class` attribute — treated as a
//!    whitespace-separated token set — has a token containing one of the
//!    result-title markers (`_highlight-title`, `post-titulo`).
//! 2. **Fallback**: every `<a>` carrying `data-tracker-label="title"`, tried
//!    only when the primary strategy matched zero anchors. The switch is a
//!    cardinality check, not error-based; extraction itself never fails.
//!
//! An empty or unrecognizable page degrades to an empty candidate list.

use crate::models::Candidate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

/// Class-token substrings that mark a result-title anchor.
const CLASS_MARKERS: [&str; 2] = ["_highlight-title", "post-titulo"];

static CLASSED_ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[class]").unwrap());
static TRACKER_ANCHORS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-tracker-label="title"]"#).unwrap());

/// Extract (title, link) candidates from the raw results-page markup.
///
/// Output order is the document order of the surviving strategy's matches.
/// No deduplication happens here; candidates may lack an `href`.
#[instrument(level = "info", skip_all)]
pub fn extract_candidates(html: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);

    let mut matched: Vec<ElementRef> = document
        .select(&CLASSED_ANCHORS)
        .filter(|element| {
            element
                .value()
                .attr("class")
                .is_some_and(|classes| has_marker_token(classes))
        })
        .collect();

    if matched.is_empty() {
        debug!("Primary selector matched nothing; trying tracker-label fallback");
        matched = document.select(&TRACKER_ANCHORS).collect();
    }

    let candidates: Vec<Candidate> = matched
        .into_iter()
        .map(|element| Candidate {
            title: element.text().collect::<String>().trim().to_string(),
            link: element.value().attr("href").map(|href| href.to_string()),
        })
        .collect();

    info!(count = candidates.len(), "Extracted candidates");
    candidates
}

/// True if any whitespace-separated class token contains a marker substring.
fn has_marker_token(classes: &str) -> bool {
    classes
        .split_whitespace()
        .any(|token| CLASS_MARKERS.iter().any(|marker| token.contains(marker)))
}
