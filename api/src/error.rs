use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request to quest backend failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from quest backend: {0}")]
    InvalidResponse(String),

    #[error("quest backend unreachable: {0}")]
    Unreachable(String),

    #[error("quest backend returned an error: {0}")]
    Query(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Whether the response arrived but did not have the expected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidResponse(_) | Self::Query(_))
    }
}
