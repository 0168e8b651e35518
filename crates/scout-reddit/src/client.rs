//! HTTP client for Reddit's OAuth API.

use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use scout_core::{PostSource, RedditPost, SourceOutcome};
use tokio::sync::Mutex;

use crate::error::RedditError;
use crate::helpers::select_posts;
use crate::token::CachedToken;
use crate::types::{Listing, TokenResponse};

const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";
const SUBREDDIT: &str = "ClashOfClans";
const SEARCH_LIMIT: usize = 10;

/// Settings for [`RedditClient`].
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

/// Reddit search client with a lazily refreshed bearer token.
pub struct RedditClient {
    client: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    api_base: String,
    token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
    /// Creates a client pointed at the production Reddit endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &RedditConfig) -> Result<Self, RedditError> {
        Self::with_endpoints(config, DEFAULT_TOKEN_URL, DEFAULT_API_BASE)
    }

    /// Creates a client with custom endpoints (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoints(
        config: &RedditConfig,
        token_url: &str,
        api_base: &str,
    ) -> Result<Self, RedditError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: token_url.to_owned(),
            api_base: api_base.trim_end_matches('/').to_owned(),
            token: Mutex::new(None),
        })
    }

    /// Search r/ClashOfClans, absorbing every failure into
    /// [`SourceOutcome::Unavailable`].
    pub async fn search(&self, query: &str) -> SourceOutcome<RedditPost> {
        match self.try_search(query).await {
            Ok(posts) => {
                tracing::debug!(query, count = posts.len(), "Reddit search complete");
                SourceOutcome::Found(posts)
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Reddit search failed; returning no posts");
                SourceOutcome::unavailable(e.to_string())
            }
        }
    }

    /// Search r/ClashOfClans and return up to three posts whose titles
    /// mention a query term.
    ///
    /// A 401 from the search endpoint drops the cached token and retries once.
    ///
    /// # Errors
    ///
    /// - [`RedditError::TokenExchange`] if the credentials are rejected.
    /// - [`RedditError::UnexpectedStatus`] on a non-2xx search response.
    /// - [`RedditError::Http`] on network failure.
    /// - [`RedditError::Deserialize`] if the listing is malformed.
    pub async fn try_search(&self, query: &str) -> Result<Vec<RedditPost>, RedditError> {
        let token = self.bearer_token().await?;
        let listing = match self.fetch_listing(query, &token).await {
            Err(RedditError::UnexpectedStatus { status: 401 }) => {
                tracing::info!("Reddit rejected cached token; re-authenticating");
                self.invalidate_token().await;
                let token = self.bearer_token().await?;
                self.fetch_listing(query, &token).await?
            }
            other => other?,
        };
        Ok(select_posts(query, listing))
    }

    async fn bearer_token(&self) -> Result<String, RedditError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.value().to_owned());
        }

        let token = self.fetch_token().await?;
        let value = token.value().to_owned();
        *cached = Some(token);
        Ok(value)
    }

    async fn invalidate_token(&self) {
        self.token.lock().await.take();
    }

    async fn fetch_token(&self) -> Result<CachedToken, RedditError> {
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::TokenExchange(format!(
                "token endpoint returned status {}",
                response.status()
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| RedditError::TokenExchange(format!("token parse error: {e}")))?;

        match body.access_token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(CachedToken::new(token, body.expires_in, Instant::now())),
            None => Err(RedditError::TokenExchange(
                body.error
                    .unwrap_or_else(|| "response carried no access token".to_string()),
            )),
        }
    }

    async fn fetch_listing(&self, query: &str, token: &str) -> Result<Listing, RedditError> {
        let url = format!("{}/r/{SUBREDDIT}/search", self.api_base);
        let scoped_query = format!("{query} subreddit:{SUBREDDIT}");
        let limit = SEARCH_LIMIT.to_string();
        let params = [
            ("q", scoped_query.as_str()),
            ("sort", "relevance"),
            ("limit", limit.as_str()),
            ("restrict_sr", "true"),
            ("include_over_18", "false"),
        ];

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedditError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RedditError::Deserialize {
            context: "subreddit search listing".to_string(),
            source: e,
        })
    }
}

impl PostSource for RedditClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SourceOutcome<RedditPost>> {
        // Inherent method; not a recursive call.
        RedditClient::search(self, query).boxed()
    }
}
