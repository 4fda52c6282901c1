use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single normalized item collected from any source.
///
/// Every adapter reduces its platform-specific payload to this shape. A record
/// is only ever constructed from a non-blank title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub title: String,
}

impl TitleRecord {
    /// Builds a record from a raw platform title.
    ///
    /// Trims surrounding whitespace and decodes the HTML entities the video
    /// platform escapes titles with. Returns `None` when nothing is left.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let title = decode_html(raw.trim());
        if title.is_empty() {
            None
        } else {
            Some(Self { title })
        }
    }
}

/// Text with an entity the decoder cannot resolve is kept as-is.
fn decode_html(value: &str) -> String {
    quick_xml::escape::unescape(value)
        .map_or_else(|_| value.to_string(), Cow::into_owned)
        .trim()
        .to_string()
}

/// Recent titles from one competitor channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelResult {
    pub channel: String,
    pub videos: Vec<TitleRecord>,
}

/// Hot titles from one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityResult {
    pub community: String,
    pub posts: Vec<TitleRecord>,
}

/// Everything the collection stage gathered for one request.
///
/// `competitor_results` and `community_results` follow the order of the
/// request's `competitor_channels` and `communities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedData {
    pub top_titles: Vec<TitleRecord>,
    pub competitor_results: Vec<ChannelResult>,
    pub community_results: Vec<CommunityResult>,
}

/// Inbound request for a content strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub audience: String,
    pub goal: String,
    #[serde(rename = "competitorYouTubeChannels")]
    pub competitor_channels: Vec<String>,
    #[serde(rename = "relevantSubreddits")]
    pub communities: Vec<String>,
}

impl StrategyRequest {
    /// Parses and validates a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedBody`] if the body is not JSON,
    /// [`ValidationError::InvalidField`] if a field is missing or has the wrong
    /// type, and [`ValidationError::BlankField`] if `audience` or `goal` is
    /// blank.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(ValidationError::MalformedBody)?;
        let request: Self =
            serde_json::from_value(value).map_err(ValidationError::InvalidField)?;
        request.validate()?;
        Ok(request)
    }

    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.audience.trim().is_empty() {
            return Err(ValidationError::BlankField("audience"));
        }
        if self.goal.trim().is_empty() {
            return Err(ValidationError::BlankField("goal"));
        }
        Ok(())
    }

    /// Query used for the trend search branch.
    #[must_use]
    pub fn trend_query(&self) -> String {
        format!("{} {}", self.audience, self.goal)
    }
}
