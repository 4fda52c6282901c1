//! Concurrent collection across every source.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use scout_core::{
    AppConfig, ChannelResult, CollectedData, CommunityResult, Credentials, StrategyRequest,
    DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_RESULT_LIMIT,
};

use crate::error::SourceError;
use crate::http::build_http_client;
use crate::reddit::RedditClient;
use crate::token::RedditTokenCache;
use crate::youtube::YouTubeClient;

/// Policy values for a [`Collector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorSettings {
    /// Titles requested from each search, channel, and community.
    pub result_limit: usize,
    /// In-flight per-item requests allowed within one fan-out branch.
    pub max_concurrent_fetches: usize,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

/// Runs every source adapter for a request and gathers the results.
///
/// Holds the forum token cache, so one `Collector` should live for the whole
/// process and be shared between requests.
pub struct Collector {
    youtube: YouTubeClient,
    reddit: RedditClient,
    tokens: Arc<RedditTokenCache>,
    settings: CollectorSettings,
}

impl Collector {
    #[must_use]
    pub fn new(
        youtube: YouTubeClient,
        reddit: RedditClient,
        tokens: Arc<RedditTokenCache>,
        settings: CollectorSettings,
    ) -> Self {
        Self {
            youtube,
            reddit,
            tokens,
            settings,
        }
    }

    /// Wires all adapters from application config and credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be built or a
    /// configured base URL is invalid.
    pub fn from_config(config: &AppConfig, credentials: &Credentials) -> Result<Self, SourceError> {
        let client = build_http_client(config.source_timeout_secs, &config.user_agent)?;
        let youtube = YouTubeClient::new(
            client.clone(),
            &credentials.youtube_api_key,
            &config.endpoints.youtube_base_url,
        )?;
        let reddit = RedditClient::new(client.clone(), &config.endpoints.reddit_api_url)?;
        let tokens = RedditTokenCache::new(
            client,
            &config.endpoints.reddit_auth_url,
            &credentials.reddit_client_id,
            &credentials.reddit_client_secret,
            Duration::from_secs(config.token_ttl_secs),
        )?;

        Ok(Self::new(
            youtube,
            reddit,
            Arc::new(tokens),
            CollectorSettings {
                result_limit: config.result_limit,
                max_concurrent_fetches: config.max_concurrent_fetches,
            },
        ))
    }

    /// Collects trend, competitor, and community titles for `request`.
    ///
    /// The three branches run concurrently and every per-item call inside a
    /// branch runs concurrently with its siblings. Per-item results keep the
    /// order of the request lists. Source failures degrade to empty results,
    /// so this never fails.
    pub async fn collect(&self, request: &StrategyRequest) -> CollectedData {
        let trend_query = request.trend_query();
        let (top_titles, competitor_results, community_results) = tokio::join!(
            self.youtube
                .trending_titles(&trend_query, self.settings.result_limit),
            self.collect_channels(&request.competitor_channels),
            self.collect_communities(&request.communities),
        );

        let data = CollectedData {
            top_titles: top_titles.into_titles(),
            competitor_results,
            community_results,
        };

        tracing::info!(
            top_titles = data.top_titles.len(),
            channels = data.competitor_results.len(),
            communities = data.community_results.len(),
            "collection complete"
        );

        data
    }

    async fn collect_channels(&self, channels: &[String]) -> Vec<ChannelResult> {
        let limit = self.settings.result_limit;
        stream::iter(channels.to_vec())
            .map(|channel| async move {
                let videos = self.youtube.channel_titles(&channel, limit).await;
                ChannelResult {
                    channel,
                    videos: videos.into_titles(),
                }
            })
            .buffered(self.fan_out())
            .collect()
            .await
    }

    async fn collect_communities(&self, communities: &[String]) -> Vec<CommunityResult> {
        if communities.is_empty() {
            return Vec::new();
        }

        let Some(token) = self.tokens.get_token().await else {
            return Vec::new();
        };

        let limit = self.settings.result_limit;
        let token = token.as_str();
        stream::iter(communities.to_vec())
            .map(|community| async move {
                let posts = self.reddit.hot_titles(&community, token, limit).await;
                CommunityResult {
                    community,
                    posts: posts.into_titles(),
                }
            })
            .buffered(self.fan_out())
            .collect()
            .await
    }

    fn fan_out(&self) -> usize {
        self.settings.max_concurrent_fetches.max(1)
    }
}
