//! Reddit hot-listing adapter (application-only OAuth).

use reqwest::{Client, Url};
use serde::Deserialize;

use scout_core::TitleRecord;

use crate::error::SourceError;
use crate::http::{parse_base_url, read_json};
use crate::outcome::SourceOutcome;

/// Reddit listing wrapper.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: Option<String>,
}

/// Client for `oauth.reddit.com` listings.
pub struct RedditClient {
    client: Client,
    api_base: Url,
}

impl RedditClient {
    /// Creates a client against `api_base_url` (normally `https://oauth.reddit.com`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `api_base_url` does not parse.
    pub fn new(client: Client, api_base_url: &str) -> Result<Self, SourceError> {
        Ok(Self {
            client,
            api_base: parse_base_url(api_base_url)?,
        })
    }

    /// Titles from the community's hot listing, in Reddit's own ranking order.
    pub async fn hot_titles(&self, community: &str, token: &str, limit: usize) -> SourceOutcome {
        SourceOutcome::absorb(
            "reddit_hot",
            community,
            self.fetch_hot_titles(community, token, limit).await,
        )
    }

    async fn fetch_hot_titles(
        &self,
        community: &str,
        token: &str,
        limit: usize,
    ) -> Result<Vec<TitleRecord>, SourceError> {
        let url = self.hot_url(community)?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        let listing: Listing = read_json(response, &format!("reddit hot r/{community}")).await?;

        Ok(listing
            .data
            .children
            .iter()
            .filter_map(|post| post.data.title.as_deref().and_then(TitleRecord::from_raw))
            .take(limit)
            .collect())
    }

    /// Builds `{api_base}/r/{community}/hot`, accepting `r/name` and `/r/name`
    /// spellings and percent-encoding the name as a single path segment.
    fn hot_url(&self, community: &str) -> Result<Url, SourceError> {
        let name = community
            .trim()
            .trim_start_matches('/')
            .trim_start_matches("r/")
            .trim_end_matches('/');

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| SourceError::InvalidBaseUrl {
                url: self.api_base.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(["r", name, "hot"]);
        Ok(url)
    }
}
