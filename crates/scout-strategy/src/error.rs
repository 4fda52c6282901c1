use thiserror::Error;

/// Failures of the generative call.
///
/// Unlike source failures these are not absorbed: there is no strategy to
/// return without a generated document.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport failure. The request URL is stripped on conversion.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("generator returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("could not parse generator response: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("generator response contained no text")]
    EmptyResponse,

    #[error("invalid generator base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The source clients could not be wired from config.
    #[error("collector setup failed: {0}")]
    Setup(#[from] scout_sources::SourceError),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}
