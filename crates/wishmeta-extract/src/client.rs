use std::time::Duration;

use reqwest::Client;

use crate::error::ExtractError;

/// A fetched page body plus the effective URL it was served from
/// (post-redirect). Exists only for the fetch → parse handoff.
#[derive(Debug)]
pub struct FetchedPage {
    pub body: String,
    pub final_url: String,
}

/// HTTP client for retrieving raw page HTML.
///
/// Presents a desktop-browser `User-Agent` (sites commonly serve degraded or
/// blocking markup to unrecognized clients) and applies a total request
/// timeout. Non-2xx statuses are deliberately not fatal: soft-404 and error
/// pages frequently carry complete metadata, so the body is returned for
/// parsing regardless of status.
pub struct PageClient {
    client: Client,
    timeout_secs: u64,
}

impl PageClient {
    /// Creates a `PageClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Fetches the page at `url` and returns its body text along with the
    /// effective (post-redirect) URL.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Timeout`] — the request exceeded the configured
    ///   timeout; the in-flight request is cancelled.
    /// - [`ExtractError::Transport`] — DNS, connection, TLS, or body-read
    ///   failure.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, ExtractError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, url, "non-2xx response; parsing body anyway");
        }

        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(url, e))?;

        Ok(FetchedPage { body, final_url })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> ExtractError {
        if error.is_timeout() {
            ExtractError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            ExtractError::Transport {
                url: url.to_owned(),
                source: error,
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
