use crate::app_config::{AppConfig, Credentials, Environment, SourceEndpoints};
use crate::ConfigError;

/// Items requested per trend search, channel listing, and community listing.
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// How long a forum access token is reused. The provider issues 60-minute
/// tokens; we refresh ten minutes early.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 50 * 60;

/// Upper bound on in-flight per-item requests within one fan-out branch.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

const CREDENTIAL_VARS: [&str; 4] = [
    "YOUTUBE_API_KEY",
    "REDDIT_CLIENT_ID",
    "REDDIT_CLIENT_SECRET",
    "GEMINI_API_KEY",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load the external API credentials from the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredentials`] listing every unset or empty variable.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    build_credentials(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so this only fails on unparseable values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] naming the offending variable.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let parse_positive = |var: &str, default: usize| -> Result<usize, ConfigError> {
        let value = match lookup(var) {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| invalid(var, e.to_string()))?,
            Err(_) => default,
        };
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("SCOUT_ENV", "development"))?;

    let bind_addr = or_default("SCOUT_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("SCOUT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("SCOUT_LOG_LEVEL", "info");
    let user_agent = or_default("SCOUT_USER_AGENT", "content-scout/0.1 (strategy-research)");

    let source_timeout_secs = parse_u64("SCOUT_SOURCE_TIMEOUT_SECS", 15)?;
    let generator_timeout_secs = parse_u64("SCOUT_GENERATOR_TIMEOUT_SECS", 120)?;
    let result_limit = parse_positive("SCOUT_RESULT_LIMIT", DEFAULT_RESULT_LIMIT)?;
    let max_concurrent_fetches =
        parse_positive("SCOUT_MAX_CONCURRENT_FETCHES", DEFAULT_MAX_CONCURRENT_FETCHES)?;
    let token_ttl_secs = parse_u64("SCOUT_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
    let gemini_model = or_default("SCOUT_GEMINI_MODEL", "gemini-1.5-flash");

    let defaults = SourceEndpoints::default();
    let endpoints = SourceEndpoints {
        youtube_base_url: or_default("SCOUT_YOUTUBE_BASE_URL", &defaults.youtube_base_url),
        reddit_auth_url: or_default("SCOUT_REDDIT_AUTH_URL", &defaults.reddit_auth_url),
        reddit_api_url: or_default("SCOUT_REDDIT_API_URL", &defaults.reddit_api_url),
        gemini_base_url: or_default("SCOUT_GEMINI_BASE_URL", &defaults.gemini_base_url),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        user_agent,
        source_timeout_secs,
        generator_timeout_secs,
        result_limit,
        max_concurrent_fetches,
        token_ttl_secs,
        gemini_model,
        endpoints,
    })
}

/// Build the credential set using the provided env-var lookup function.
///
/// Empty values count as missing.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredentials`] listing every missing variable.
pub fn build_credentials<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut missing = Vec::new();
    let values = CREDENTIAL_VARS.map(|var| {
        let value = lookup(var).ok().filter(|v| !v.trim().is_empty());
        if value.is_none() {
            missing.push(var);
        }
        value.unwrap_or_default()
    });

    if !missing.is_empty() {
        return Err(ConfigError::MissingCredentials(missing));
    }

    let [youtube_api_key, reddit_client_id, reddit_client_secret, gemini_api_key] = values;

    Ok(Credentials {
        youtube_api_key,
        reddit_client_id,
        reddit_client_secret,
        gemini_api_key,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SCOUT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
