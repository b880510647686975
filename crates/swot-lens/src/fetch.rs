//! Page retrieval.
//!
//! A [`PageSource`] turns an address into a [`Document`]. The HTTP
//! implementation performs exactly one GET per call: no retries, no cache,
//! and no timeout beyond the transport default.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, warn};
use url::Url;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("swot-lens/", env!("CARGO_PKG_VERSION"));

/// Raw response body plus response metadata.
#[derive(Debug, Clone)]
pub struct Document {
    /// URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Response body decoded as text.
    pub body: String,
}

/// Something that can retrieve a page for analysis.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url`.
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError>;
}

/// Parse and validate a user-supplied address.
///
/// Only absolute `http` and `https` URLs with a host are accepted.
pub fn parse_address(address: &str) -> Result<Url, FetchError> {
    let address = address.trim();
    let url = Url::parse(address).map_err(|e| FetchError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidAddress {
                address: address.to_string(),
                reason: format!("unsupported scheme '{other}', expected http or https"),
            })
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidAddress {
            address: address.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// [`PageSource`] backed by a `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher with the default user agent.
    pub fn new() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a fetcher that identifies itself with `user_agent`.
    pub fn with_user_agent(user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.to_string(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        debug!("fetching {url}");

        let resp = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        let final_url = resp.url().to_string();

        if !status.is_success() {
            warn!("{url} returned {status}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = resp.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!("fetched {final_url}: {} bytes, status {}", body.len(), status.as_u16());

        Ok(Document {
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
