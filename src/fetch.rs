//! HTTP fetching of the search results page.
//!
//! One GET per run, with a browser-like `User-Agent` and a hard timeout
//! baked into the client. The [`Fetcher`] trait is the seam the pipeline
//! depends on, so tests can substitute a fixed page or a failing transport.
//!
//! Both failure modes — transport problems and non-2xx statuses — are
//! collapsed into [`FetchError`], which the pipeline treats as terminal for
//! the current run: log, abort, touch no state, no retries.

use std::error::Error;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Capability to fetch a URL's body as text.
pub trait Fetcher {
    /// Fetch `url` and return the response body.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Why a fetch failed.
#[derive(Debug)]
pub enum FetchError {
    /// Connection failure, DNS failure, timeout, or a body-read failure.
    Transport(reqwest::Error),
    /// The server answered with a non-2xx status.
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport failure: {e}"),
            FetchError::Status { status, url } => {
                write!(f, "unexpected status {status} from {url}")
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e)
    }
}

/// Real fetcher over a preconfigured [`reqwest::Client`].
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the client once with the given `User-Agent` and timeout; every
    /// fetch through this instance inherits both.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched page body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_names_url_and_code() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            url: "https://g1.globo.com/busca/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("https://g1.globo.com/busca/"));
    }

    #[test]
    fn test_http_fetcher_builds_with_defaults() {
        let fetcher = HttpFetcher::new("Mozilla/5.0", Duration::from_secs(15));
        assert!(fetcher.is_ok());
    }
}
