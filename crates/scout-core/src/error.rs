use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env vars: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejection of an inbound strategy request.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidField(#[source] serde_json::Error),

    #[error("field `{0}` must be a non-empty string")]
    BlankField(&'static str),
}
