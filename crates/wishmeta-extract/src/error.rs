use thiserror::Error;

/// Pipeline failures surfaced to callers.
///
/// Only validation, transport, and parse failures abort a run; extraction
/// strategy misses are ordinary control flow and never appear here. The
/// variant split matters for caller retry policy (`Timeout`/`Transport` are
/// potentially transient, `Validation`/`Parse` are not), not for the HTTP
/// response shape, which is uniform.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid url \"{url}\": {reason}")]
    Validation { url: String, reason: String },

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("transport failure for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unparseable document: {reason}")]
    Parse { reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
