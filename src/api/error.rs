use thiserror::Error;

/// Failure to obtain a page from the remote source.
///
/// The UI treats every variant the same way (a single error flag); the
/// variant only matters for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned status {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Failed to decode product page: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Request { .. } => "request_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode { .. } => "decode_error",
        }
    }
}
