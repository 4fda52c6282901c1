use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all four credentials populated.
fn full_credentials<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("YOUTUBE_API_KEY", "yt-key");
    m.insert("REDDIT_CLIENT_ID", "reddit-id");
    m.insert("REDDIT_CLIENT_SECRET", "reddit-secret");
    m.insert("GEMINI_API_KEY", "gemini-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SCOUT_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.source_timeout_secs, 15);
    assert_eq!(cfg.generator_timeout_secs, 120);
    assert_eq!(cfg.result_limit, DEFAULT_RESULT_LIMIT);
    assert_eq!(cfg.result_limit, 3);
    assert_eq!(cfg.max_concurrent_fetches, DEFAULT_MAX_CONCURRENT_FETCHES);
    assert_eq!(cfg.token_ttl_secs, 3000);
    assert_eq!(cfg.gemini_model, "gemini-1.5-flash");
    assert_eq!(cfg.endpoints, SourceEndpoints::default());
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("SCOUT_ENV", "production");
    map.insert("SCOUT_BIND_ADDR", "127.0.0.1:8080");
    map.insert("SCOUT_RESULT_LIMIT", "5");
    map.insert("SCOUT_TOKEN_TTL_SECS", "60");
    map.insert("SCOUT_YOUTUBE_BASE_URL", "http://localhost:9000");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.result_limit, 5);
    assert_eq!(cfg.token_ttl_secs, 60);
    assert_eq!(cfg.endpoints.youtube_base_url, "http://localhost:9000");
    assert_eq!(cfg.endpoints.reddit_api_url, "https://oauth.reddit.com");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SCOUT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCOUT_BIND_ADDR"),
        "expected InvalidEnvVar(SCOUT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_result_limit() {
    let mut map = HashMap::new();
    map.insert("SCOUT_RESULT_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCOUT_RESULT_LIMIT"),
        "expected InvalidEnvVar(SCOUT_RESULT_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("SCOUT_SOURCE_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCOUT_SOURCE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SCOUT_SOURCE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_credentials_succeeds_with_all_vars() {
    let map = full_credentials();
    let creds = build_credentials(lookup_from_map(&map)).expect("all credentials set");
    assert_eq!(creds.youtube_api_key, "yt-key");
    assert_eq!(creds.reddit_client_id, "reddit-id");
    assert_eq!(creds.reddit_client_secret, "reddit-secret");
    assert_eq!(creds.gemini_api_key, "gemini-key");
}

#[test]
fn build_credentials_lists_every_missing_var() {
    let mut map = full_credentials();
    map.remove("REDDIT_CLIENT_SECRET");
    map.insert("GEMINI_API_KEY", "   ");
    let err = build_credentials(lookup_from_map(&map)).unwrap_err();
    match err {
        ConfigError::MissingCredentials(missing) => {
            assert_eq!(missing, vec!["REDDIT_CLIENT_SECRET", "GEMINI_API_KEY"]);
        }
        other => panic!("expected MissingCredentials, got: {other:?}"),
    }
}
