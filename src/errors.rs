//! Error types for documentation extraction
//!
//! Every variant here is non-fatal at the `SchemaLoader` boundary: the loader
//! logs it and returns a degraded `ComponentMeta` instead. The variants exist
//! so the inner stages can say precisely *why* a slice came back empty.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for extraction operations
pub type DocResult<T> = Result<T, DocError>;

/// Error types for acquisition and parsing
#[derive(Debug, Error)]
pub enum DocError {
    /// Local document absent
    #[error("Documentation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Section heading absent from the document
    #[error("Section '{section}' not found")]
    SectionNotFound { section: String },

    /// Fewer than three table lines survived filtering
    #[error("Malformed table: only {lines} pipe-delimited line(s), need header, separator and a data row")]
    MalformedTable { lines: usize },

    /// Canonical page answered with a non-2xx status
    #[error("Documentation fetch failed for {url} with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Connection, TLS or body read failure
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Fetch exceeded the configured timeout
    #[error("Documentation fetch for {url} timed out after {}ms", timeout.as_millis())]
    Timeout { url: String, timeout: Duration },

    /// HTML to Markdown conversion failed
    #[error("HTML conversion failed: {0}")]
    Conversion(String),

    /// Invalid configuration value (bad doc host, bad selector)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<anyhow::Error> for DocError {
    fn from(error: anyhow::Error) -> Self {
        DocError::Conversion(format!("{error:#}"))
    }
}

impl DocError {
    /// Build a `Network` or `Timeout` error from a reqwest failure.
    pub(crate) fn from_reqwest(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            DocError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            DocError::Network {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Check if the error came from the network step (triggers local fallback)
    #[must_use]
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            DocError::HttpStatus { .. } | DocError::Network { .. } | DocError::Timeout { .. }
        )
    }

    /// Check if something simply was not there (file or section)
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocError::NotFound { .. } | DocError::SectionNotFound { .. })
    }
}
