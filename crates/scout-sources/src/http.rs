//! Shared HTTP plumbing for every adapter.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Builds the HTTP client shared by all adapters.
///
/// `timeout_secs` bounds every individual outbound call, so a hung source
/// cannot stall collection indefinitely.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed.
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base` and normalises it to end with exactly one slash.
pub(crate) fn parse_base_url(base: &str) -> Result<Url, SourceError> {
    let normalised = format!("{}/", base.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Asserts a 2xx status and deserializes the body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, SourceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_appends_single_trailing_slash() {
        let url = parse_base_url("https://oauth.reddit.com").expect("valid");
        assert_eq!(url.as_str(), "https://oauth.reddit.com/");
        let url = parse_base_url("https://oauth.reddit.com///").expect("valid");
        assert_eq!(url.as_str(), "https://oauth.reddit.com/");
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, SourceError::InvalidBaseUrl { .. }));
    }
}
