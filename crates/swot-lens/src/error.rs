//! Error types for the analysis pipeline.

use thiserror::Error;

/// Failure to retrieve a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The address is not an absolute http/https URL.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Connection, DNS, TLS or timeout failure.
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// HTTP status code, if the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a single analysis request. No partial result accompanies any
/// of these.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No address was supplied. Raised before any network call.
    #[error("please provide a website address")]
    EmptyInput,

    /// The page could not be retrieved.
    #[error("failed to retrieve the page: {0}")]
    Fetch(#[from] FetchError),

    /// The page was retrieved but contained no usable text.
    #[error("unable to retrieve content from {url}")]
    EmptyContent { url: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
