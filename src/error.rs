use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a decoded model.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("request failed with HTTP {0}")]
    Status(u16),
    /// The body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The API's not-found payload, e.g. for an unknown country name.
    #[error("not found: {0}")]
    NotFound(String),
}

impl FetchError {
    /// True when the request gave up because the client timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if e.is_timeout())
    }

    /// True for the API's not-found answer (HTTP 404 or a `message` payload).
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
