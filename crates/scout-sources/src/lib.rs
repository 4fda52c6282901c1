//! Source adapters and the collection orchestrator for content-scout.
//!
//! Pulls trending video titles and competitor channel uploads from the
//! `YouTube` Data API and hot community posts from Reddit, then gathers them
//! into one [`scout_core::CollectedData`]. Every adapter absorbs its own
//! failures, so collection as a whole never fails.

pub mod clock;
pub mod collect;
pub mod error;
mod http;
pub mod outcome;
pub mod reddit;
pub mod token;
pub mod youtube;

pub use clock::{Clock, SystemClock};
pub use collect::{Collector, CollectorSettings};
pub use error::SourceError;
pub use http::build_http_client;
pub use outcome::SourceOutcome;
pub use reddit::RedditClient;
pub use token::{CachedToken, RedditTokenCache};
pub use youtube::YouTubeClient;
