//! `YouTube` Data API v3 adapters: trend search and competitor channel listing.

use reqwest::{Client, Url};
use serde::Deserialize;

use scout_core::TitleRecord;

use crate::error::SourceError;
use crate::http::{parse_base_url, read_json};
use crate::outcome::SourceOutcome;

/// Google API key header; keeps the key out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// `search.list` response, reduced to what we read.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: Option<SearchItemId>,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: Option<String>,
    #[serde(rename = "channelId")]
    channel_id: Option<String>,
}

impl SearchItem {
    fn title(&self) -> Option<TitleRecord> {
        self.snippet
            .as_ref()
            .and_then(|s| s.title.as_deref())
            .and_then(TitleRecord::from_raw)
    }

    fn channel_id(&self) -> Option<&str> {
        self.id
            .as_ref()
            .and_then(|id| id.channel_id.as_deref())
            .or_else(|| self.snippet.as_ref().and_then(|s| s.channel_id.as_deref()))
            .filter(|id| !id.is_empty())
    }
}

/// Client for the `YouTube` Data API `search` endpoint.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl YouTubeClient {
    /// Creates a client against `base_url` (normally `https://www.googleapis.com`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(client: Client, api_key: &str, base_url: &str) -> Result<Self, SourceError> {
        let search_url = parse_base_url(base_url)?
            .join("youtube/v3/search")
            .map_err(|e| SourceError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Titles of the top videos matching `query`.
    pub async fn trending_titles(&self, query: &str, limit: usize) -> SourceOutcome {
        SourceOutcome::absorb(
            "youtube_search",
            query,
            self.fetch_trending_titles(query, limit).await,
        )
    }

    /// Titles of the most recent uploads of the channel best matching `channel`.
    ///
    /// A name that resolves to no channel yields an empty, successful outcome.
    pub async fn channel_titles(&self, channel: &str, limit: usize) -> SourceOutcome {
        SourceOutcome::absorb(
            "youtube_channel",
            channel,
            self.fetch_channel_titles(channel, limit).await,
        )
    }

    async fn fetch_trending_titles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TitleRecord>, SourceError> {
        let limit = limit.to_string();
        let response = self
            .search(
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "video"),
                    ("maxResults", &limit),
                ],
                "youtube trend search",
            )
            .await?;
        Ok(response.items.iter().filter_map(SearchItem::title).collect())
    }

    async fn fetch_channel_titles(
        &self,
        channel: &str,
        limit: usize,
    ) -> Result<Vec<TitleRecord>, SourceError> {
        let Some(channel_id) = self.resolve_channel_id(channel).await? else {
            tracing::debug!(channel, "no YouTube channel matched name");
            return Ok(Vec::new());
        };

        let limit = limit.to_string();
        let response = self
            .search(
                &[
                    ("part", "snippet"),
                    ("channelId", &channel_id),
                    ("order", "date"),
                    ("type", "video"),
                    ("maxResults", &limit),
                ],
                "youtube channel listing",
            )
            .await?;
        Ok(response.items.iter().filter_map(SearchItem::title).collect())
    }

    /// Resolves a display name to a channel id, taking the first match only.
    async fn resolve_channel_id(&self, channel: &str) -> Result<Option<String>, SourceError> {
        let response = self
            .search(
                &[
                    ("part", "snippet"),
                    ("q", channel),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
                "youtube channel lookup",
            )
            .await?;
        Ok(response
            .items
            .first()
            .and_then(SearchItem::channel_id)
            .map(ToOwned::to_owned))
    }

    async fn search(
        &self,
        params: &[(&str, &str)],
        context: &str,
    ) -> Result<SearchResponse, SourceError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(params)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        read_json(response, context).await
    }
}
