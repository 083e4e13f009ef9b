//! Error types for the Pixabay client

use thiserror::Error;

/// Errors returned by [`PixabayClient`](crate::PixabayClient)
#[derive(Debug, Error)]
pub enum PixabayError {
    /// The API answered with anything other than HTTP 200.
    ///
    /// `message` is the raw response body, exactly as sent by the service.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport failure (DNS, connection refused, TLS, timeout)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A 200 response whose body is not JSON
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no Pixabay API key configured")]
    MissingApiKey,

    /// Rejected by local validation before any request was sent
    #[error("invalid value for `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl PixabayError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            PixabayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, PixabayError::Api { .. })
    }
}
