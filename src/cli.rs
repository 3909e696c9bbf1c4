//! Command-line interface definitions for vaga_watch.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! A zero-argument invocation performs one search-and-report cycle with the
//! literal defaults; every flag is optional.

use crate::config;
use clap::Parser;

/// Command-line arguments for one vaga_watch run.
///
/// # Examples
///
/// ```sh
/// # One search-and-report cycle against the defaults
/// vaga_watch
///
/// # Different query, different seen-links file
/// vaga_watch --query "concurso ti goiania" --seen-file /var/lib/vaga_watch/links.txt
///
/// # Dump every extracted candidate without filtering or persisting
/// vaga_watch --probe
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Whitespace-separated search query sent to the G1 search page
    #[arg(short, long, default_value = config::DEFAULT_QUERY)]
    pub query: String,

    /// Path of the line-delimited file of already-reported links
    #[arg(short, long, env = "VAGA_WATCH_SEEN_FILE", default_value = config::DEFAULT_SEEN_FILE)]
    pub seen_file: String,

    /// Print every extracted candidate, skipping the keyword filter and the
    /// seen-links store (for tuning selectors when the page layout drifts)
    #[arg(long)]
    pub probe: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vaga_watch"]);
        assert_eq!(cli.query, config::DEFAULT_QUERY);
        assert_eq!(cli.seen_file, config::DEFAULT_SEEN_FILE);
        assert!(!cli.probe);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "vaga_watch",
            "--query",
            "concurso ti goiania",
            "--seen-file",
            "/tmp/links.txt",
        ]);
        assert_eq!(cli.query, "concurso ti goiania");
        assert_eq!(cli.seen_file, "/tmp/links.txt");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["vaga_watch", "-q", "edital", "-s", "/tmp/l.txt"]);
        assert_eq!(cli.query, "edital");
        assert_eq!(cli.seen_file, "/tmp/l.txt");
    }

    #[test]
    fn test_cli_probe_flag() {
        let cli = Cli::parse_from(["vaga_watch", "--probe"]);
        assert!(cli.probe);
    }
}
