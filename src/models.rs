//! Data models for extracted search results.
//!
//! This module defines the two records that flow through the pipeline:
//! - [`Candidate`]: a raw (title, link) pair extracted from one anchor node
//! - [`Vacancy`]: a candidate that passed the relevance filter and the
//!   not-yet-seen check
//!
//! Neither is persisted; only a vacancy's link reaches the seen-links file.

/// A raw search result extracted from one anchor node on the results page.
///
/// The link is whatever the anchor's `href` attribute held and may be absent
/// entirely (some anchors carry only tracking attributes). Candidates with an
/// absent link are dropped by the filter, not at extraction time, so the
/// extractor's output order stays exactly the document order of its matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The anchor's text content, trimmed of surrounding whitespace.
    pub title: String,
    /// The anchor's raw `href` value, if it had one. Often site-relative.
    pub link: Option<String>,
}

/// A candidate that satisfied both keyword tiers and had an unseen link.
///
/// Consumed immediately by the reporter: printed, then its link appended to
/// the seen-links store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    /// The matched title, verbatim from the candidate.
    pub title: String,
    /// The link that will be persisted. Kept raw (possibly relative);
    /// resolving it would orphan links persisted by earlier runs.
    pub link: String,
}
