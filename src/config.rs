//! Run configuration.
//!
//! The original automation kept everything as script-level constants; here
//! the same values live in [`SearchConfig`], built from the CLI and passed
//! explicitly into the pipeline so tests can substitute any part of it.

use crate::cli::Cli;
use crate::filter::KeywordRule;
use std::time::Duration;

/// The G1 search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://g1.globo.com/busca/";

/// The default search query, as whitespace-separated tokens.
pub const DEFAULT_QUERY: &str = "vagas estagio ti goiania orgao publico";

/// Default path of the line-delimited seen-links file.
pub const DEFAULT_SEEN_FILE: &str = "links_vistos.txt";

/// Browser-like `User-Agent` sent with the one GET per run.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Hard timeout on the fetch, enforced by the HTTP client.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything one run needs, assembled once in `main`.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search endpoint the query is appended to.
    pub base_url: String,
    /// Whitespace-separated query tokens.
    pub query: String,
    /// Path of the seen-links file.
    pub seen_file: String,
    /// `User-Agent` header value for the fetch.
    pub user_agent: String,
    /// Fetch timeout.
    pub timeout: Duration,
    /// The two-tier relevance rule applied to candidate titles.
    pub keywords: KeywordRule,
}

impl SearchConfig {
    /// Assemble the config from parsed CLI arguments; everything the CLI
    /// does not expose keeps its literal default.
    pub fn from_cli(args: &Cli) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: args.query.clone(),
            seen_file: args.seen_file.clone(),
            user_agent: USER_AGENT.to_string(),
            timeout: FETCH_TIMEOUT,
            keywords: KeywordRule::g1_defaults(),
        }
    }

    /// Build the search URL: `{base_url}?q={tokens}`, each token
    /// percent-encoded and tokens joined with `+`.
    pub fn search_url(&self) -> String {
        let encoded = self
            .query
            .split_whitespace()
            .map(|token| urlencoding::encode(token).into_owned())
            .collect::<Vec<_>>()
            .join("+");
        format!("{}?q={}", self.base_url, encoded)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            seen_file: DEFAULT_SEEN_FILE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: FETCH_TIMEOUT,
            keywords: KeywordRule::g1_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_url_matches_g1_endpoint() {
        let config = SearchConfig::default();
        assert_eq!(
            config.search_url(),
            "https://g1.globo.com/busca/?q=vagas+estagio+ti+goiania+orgao+publico"
        );
    }

    #[test]
    fn test_search_url_percent_encodes_tokens() {
        let config = SearchConfig {
            query: "estágio são paulo".to_string(),
            ..SearchConfig::default()
        };
        assert_eq!(
            config.search_url(),
            "https://g1.globo.com/busca/?q=est%C3%A1gio+s%C3%A3o+paulo"
        );
    }

    #[test]
    fn test_default_search_url_parses() {
        let config = SearchConfig::default();
        let parsed = url::Url::parse(&config.search_url()).unwrap();
        assert_eq!(parsed.host_str(), Some("g1.globo.com"));
        assert_eq!(
            parsed.query_pairs().next().map(|(k, _)| k.into_owned()),
            Some("q".to_string())
        );
    }
}
