//! Two-tier keyword relevance filtering.
//!
//! A candidate title is relevant when its lowercased form contains at least
//! one PRIMARY-tier term (the kind of announcement: an opening, a call, a
//! selection process) AND at least one SECONDARY-tier term (the field or the
//! public body). Matching is plain substring containment with no word
//! boundaries: `ti` matches anywhere it literally occurs inside a longer
//! word. That imprecision is inherited from the keyword lists and kept as-is.

use crate::models::{Candidate, Vacancy};
use crate::store::SeenLinkStore;
use tracing::debug;

/// The two keyword tiers applied to every candidate title.
///
/// A title must hit at least one term from each tier to pass. Terms are
/// stored lowercase; the title is lowercased before matching.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Announcement-type terms; ≥ 1 must appear in the title.
    pub primary: Vec<String>,
    /// Field/public-body terms; ≥ 1 must appear in the title.
    pub secondary: Vec<String>,
}

impl KeywordRule {
    /// The default tiers for the G1 public-sector IT internship search.
    pub fn g1_defaults() -> Self {
        Self {
            primary: ["estágio", "edital", "seleção", "concurso"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            secondary: [
                "estágio",
                "ti",
                "informática",
                "seleção",
                "edital",
                "concurso",
                "governo",
                "prefeitura",
                "federal",
                "universidade",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// True when the lowercased title contains at least one primary-tier
    /// term and at least one secondary-tier term.
    pub fn matches(&self, title: &str) -> bool {
        let title_low = title.to_lowercase();
        self.primary.iter().any(|term| title_low.contains(term.as_str()))
            && self.secondary.iter().any(|term| title_low.contains(term.as_str()))
    }
}

/// Select the candidates worth reporting, preserving candidate order.
///
/// A candidate survives iff its link is present, not already in the store,
/// and its title passes `rule`. Discards have no side effects; nothing is
/// appended here. Two candidates sharing one unseen link in the same page
/// both survive (filtering runs against the set as loaded before the run).
pub fn select_new(
    candidates: Vec<Candidate>,
    rule: &KeywordRule,
    store: &dyn SeenLinkStore,
) -> Vec<Vacancy> {
    let mut vacancies = Vec::new();
    for candidate in candidates {
        let Some(link) = candidate.link else {
            debug!(title = %candidate.title, "Dropping candidate without href");
            continue;
        };
        if store.contains(&link) {
            debug!(%link, "Dropping already-reported link");
            continue;
        }
        if !rule.matches(&candidate.title) {
            debug!(title = %candidate.title, "Dropping title outside keyword tiers");
            continue;
        }
        vacancies.push(Vacancy {
            title: candidate.title,
            link,
        });
    }
    vacancies
}
