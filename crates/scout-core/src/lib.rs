//! Shared domain types and configuration for content-scout.

mod app_config;
mod config;
mod error;
mod types;

pub use app_config::{AppConfig, Credentials, Environment, SourceEndpoints};
pub use config::{
    build_app_config, build_credentials, load_app_config, load_app_config_from_env,
    load_credentials, DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_RESULT_LIMIT, DEFAULT_TOKEN_TTL_SECS,
};
pub use error::{ConfigError, ValidationError};
pub use types::{
    ChannelResult, CollectedData, CommunityResult, StrategyRequest, TitleRecord,
};
