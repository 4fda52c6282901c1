use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Base URLs of every outbound collaborator.
///
/// Overridable so tests and staging can point at mock servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    pub youtube_base_url: String,
    pub reddit_auth_url: String,
    pub reddit_api_url: String,
    pub gemini_base_url: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            youtube_base_url: "https://www.googleapis.com".to_string(),
            reddit_auth_url: "https://www.reddit.com".to_string(),
            reddit_api_url: "https://oauth.reddit.com".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub user_agent: String,
    pub source_timeout_secs: u64,
    pub generator_timeout_secs: u64,
    pub result_limit: usize,
    pub max_concurrent_fetches: usize,
    pub token_ttl_secs: u64,
    pub gemini_model: String,
    pub endpoints: SourceEndpoints,
}

/// The four external credentials a strategy request needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub youtube_api_key: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub gemini_api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("youtube_api_key", &"[redacted]")
            .field("reddit_client_id", &self.reddit_client_id)
            .field("reddit_client_secret", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .finish()
    }
}
