use thiserror::Error;

/// Errors raised inside a source adapter.
///
/// These never leave the adapter boundary as errors: they are wrapped in
/// [`crate::SourceOutcome::Unavailable`] and logged.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    ///
    /// The request URL is stripped on conversion so query-string secrets
    /// never reach logs.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {context}")]
    UnexpectedStatus { status: u16, context: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("token response did not contain an access token")]
    MissingToken,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}
