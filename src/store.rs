//! Persistence of already-reported links.
//!
//! The seen-links file is a line-delimited UTF-8 text file, one URL per
//! line, append-only. It is never rewritten or compacted: each run loads it
//! into a set, and every newly reported link adds exactly one line. A
//! missing file means no links have been reported yet and is not an error.
//!
//! The [`SeenLinkStore`] trait is the seam the pipeline depends on; tests
//! substitute [`MemoryStore`] to avoid real file I/O.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Capability for membership checks and appends against the seen-link set.
///
/// `append` both persists the link and inserts it into the in-memory set,
/// so a store reused across runs stays consistent with its backing file.
/// Callers only append links they have verified absent, so no write-time
/// deduplication happens.
pub trait SeenLinkStore {
    /// True if the link was loaded at open time or appended since.
    fn contains(&self, link: &str) -> bool;

    /// Record a newly reported link: one fully written line, no batching.
    fn append(&mut self, link: &str) -> io::Result<()>;
}

/// File-backed store over a line-delimited text file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    seen: HashSet<String>,
}

impl FileStore {
    /// Open the store at `path`, loading every line (trimmed of surrounding
    /// whitespace) into the in-memory set.
    ///
    /// A missing file yields an empty set; any other I/O error (permissions,
    /// invalid UTF-8) propagates.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let seen = match std::fs::read_to_string(&path) {
            Ok(text) => text.lines().map(|line| line.trim().to_string()).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Seen-links file absent; starting empty");
                HashSet::new()
            }
            Err(e) => return Err(e),
        };
        info!(path = %path.display(), known_links = seen.len(), "Loaded seen-links file");
        Ok(Self { path, seen })
    }

    /// Number of distinct links currently known.
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

impl SeenLinkStore for FileStore {
    fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    fn append(&mut self, link: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(link.as_bytes())?;
        file.write_all(b"\n")?;
        self.seen.insert(link.to_string());
        debug!(%link, path = %self.path.display(), "Appended link");
        Ok(())
    }
}

/// In-memory store for tests: a set plus an ordered log of appends.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    seen: HashSet<String>,
    appended: Vec<String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with links, as if loaded from a prior run.
    pub fn with_links<'a>(links: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            seen: links.into_iter().map(|l| l.to_string()).collect(),
            appended: Vec::new(),
        }
    }

    /// Links appended during this run, in append order.
    pub fn appended(&self) -> &[String] {
        &self.appended
    }
}

#[cfg(test)]
impl SeenLinkStore for MemoryStore {
    fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    fn append(&mut self, link: &str) -> io::Result<()> {
        self.seen.insert(link.to_string());
        self.appended.push(link.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vaga_watch_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_open_missing_file_yields_empty_set() {
        let path = temp_path("missing.txt");
        let _ = std::fs::remove_file(&path);
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.len(), 0);
        assert!(!store.contains("/noticia/1"));
    }

    #[test]
    fn test_append_then_reload_round_trips() {
        let path = temp_path("reload.txt");
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.append("/noticia/1").unwrap();
        store.append("https://g1.globo.com/noticia/2").unwrap();
        assert!(store.contains("/noticia/1"));

        let reloaded = FileStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("/noticia/1"));
        assert!(reloaded.contains("https://g1.globo.com/noticia/2"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_append_grows_file_by_one_line_each() {
        let path = temp_path("monotonic.txt");
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        store.append("/a").unwrap();
        store.append("/b").unwrap();
        store.append("/c").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["/a", "/b", "/c"]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_lines_are_trimmed_on_load() {
        let path = temp_path("trim.txt");
        std::fs::write(&path, "  /noticia/1  \n/noticia/2\n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.contains("/noticia/1"));
        assert!(store.contains("/noticia/2"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_memory_store_logs_append_order() {
        let mut store = MemoryStore::new();
        store.append("/b").unwrap();
        store.append("/a").unwrap();
        assert_eq!(store.appended(), &["/b".to_string(), "/a".to_string()]);
        assert!(store.contains("/a"));
    }
}
