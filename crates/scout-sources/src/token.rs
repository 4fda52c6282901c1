//! Reddit application-only OAuth token, cached with a fixed TTL.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::error::SourceError;
use crate::http::{parse_base_url, read_json};

/// Reddit OAuth token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// A bearer token together with the instant it stops being reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Holds at most one forum access token and refreshes it on expiry.
///
/// Concurrent callers that all observe a stale token each perform their own
/// exchange and the last write wins. The lock is never held across the
/// network call.
pub struct RedditTokenCache {
    client: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CachedToken>>,
}

impl RedditTokenCache {
    /// Creates an empty cache using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `auth_base_url` does not parse.
    pub fn new(
        client: Client,
        auth_base_url: &str,
        client_id: &str,
        client_secret: &str,
        ttl: Duration,
    ) -> Result<Self, SourceError> {
        let token_url = parse_base_url(auth_base_url)?
            .join("api/v1/access_token")
            .map_err(|e| SourceError::InvalidBaseUrl {
                url: auth_base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            token_url,
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock: Arc::new(SystemClock),
            slot: RwLock::new(None),
        })
    }

    /// Replaces the clock used for expiry decisions.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a usable token, exchanging credentials only when the cached
    /// one is missing or expired.
    ///
    /// `None` means the forum is unavailable for this request. The cache is
    /// left untouched on failure.
    pub async fn get_token(&self) -> Option<String> {
        let now = self.clock.now();
        if let Some(cached) = self.slot.read().await.as_ref() {
            if cached.is_fresh(now) {
                return Some(cached.value.clone());
            }
        }

        match self.fetch_token().await {
            Ok(value) => {
                let expires_at = now
                    .checked_add_signed(self.ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                *self.slot.write().await = Some(CachedToken {
                    value: value.clone(),
                    expires_at,
                });
                tracing::debug!(%expires_at, "refreshed Reddit access token");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(
                    source = "reddit_token",
                    error = %e,
                    "Reddit token exchange failed; skipping community listings"
                );
                None
            }
        }
    }

    /// Snapshot of the cached token, if any.
    pub async fn cached(&self) -> Option<CachedToken> {
        self.slot.read().await.clone()
    }

    async fn fetch_token(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let token: TokenResponse = read_json(response, "reddit token exchange").await?;

        token
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(SourceError::MissingToken)
    }
}
