// src/error.rs
use thiserror::Error;

/// Failures while fetching the catalog or the optional viewer config.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: gloo_net::Error,
    },
}

impl LoadError {
    /// A 404 just means the resource was not deployed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Status { status: 404, .. })
    }
}
