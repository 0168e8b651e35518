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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub youtube_api_key: String,
    /// Chat-completion key. `None` keeps the analysis on the local generator.
    pub xai_api_key: Option<String>,
    pub chat_model: String,
    pub upstream_timeout_secs: u64,
    pub youtube_cache_ttl_secs: u64,
    pub youtube_cache_capacity: usize,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("reddit_client_id", &"[redacted]")
            .field("reddit_client_secret", &"[redacted]")
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("youtube_api_key", &"[redacted]")
            .field(
                "xai_api_key",
                &self.xai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("chat_model", &self.chat_model)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("youtube_cache_ttl_secs", &self.youtube_cache_ttl_secs)
            .field("youtube_cache_capacity", &self.youtube_cache_capacity)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
