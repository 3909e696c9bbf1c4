//! Human-readable reporting of new matches.
//!
//! Output goes to stdout and is not a machine-parseable contract. After each
//! match is printed, its link is appended to the store immediately — one
//! independent write per match, in match order — so a crash mid-report
//! leaves every already-printed match persisted.

use crate::models::Vacancy;
use crate::store::SeenLinkStore;
use std::io;

/// Print the matches and persist each link right after its lines.
pub fn report_matches(
    vacancies: &[Vacancy],
    store: &mut dyn SeenLinkStore,
    seen_file: &str,
) -> io::Result<()> {
    println!();
    println!("New public-sector openings found ({}):", vacancies.len());
    println!("{}", "-".repeat(64));
    for vacancy in vacancies {
        println!("Title: {}", vacancy.title);
        println!("Link: {}", vacancy.link);
        println!();
        store.append(&vacancy.link)?;
    }
    println!("Links saved to '{seen_file}'.");
    Ok(())
}

/// Print the nothing-new line for a run with no surviving candidates.
pub fn report_empty() {
    println!();
    println!("No new relevant openings this round.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn vacancy(title: &str, link: &str) -> Vacancy {
        Vacancy {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_report_appends_each_link_in_match_order() {
        let mut store = MemoryStore::new();
        let vacancies = vec![
            vacancy("Edital abre vagas de estágio em TI", "/noticia/1"),
            vacancy("Concurso federal anunciado", "/noticia/2"),
        ];
        report_matches(&vacancies, &mut store, "links_vistos.txt").unwrap();
        assert_eq!(
            store.appended(),
            &["/noticia/1".to_string(), "/noticia/2".to_string()]
        );
        assert!(store.contains("/noticia/1"));
        assert!(store.contains("/noticia/2"));
    }

    #[test]
    fn test_repeat_links_within_one_run_append_twice() {
        // no write-time dedup: the filter ran against the pre-run set, so
        // two matches sharing a link both get their append
        let mut store = MemoryStore::new();
        let vacancies = vec![
            vacancy("Edital de seleção", "/noticia/1"),
            vacancy("Outro edital de seleção", "/noticia/1"),
        ];
        report_matches(&vacancies, &mut store, "links_vistos.txt").unwrap();
        assert_eq!(
            store.appended(),
            &["/noticia/1".to_string(), "/noticia/1".to_string()]
        );
    }
}
