//! Client-side search state, mirroring what the web front end keeps per page.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use scout_core::{RedditPost, SearchResponse, SourceHealth, YouTubeVideo};
use serde::Deserialize;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// User-facing classification of a failed search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    TimedOut,
    RateLimited,
    ServiceUnavailable,
    Offline,
    Unexpected,
}

impl SearchFailure {
    #[must_use]
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::TimedOut;
        }
        match err.status() {
            Some(StatusCode::TOO_MANY_REQUESTS) => Self::RateLimited,
            Some(StatusCode::NOT_FOUND) => Self::ServiceUnavailable,
            Some(_) => Self::Unexpected,
            None if err.is_connect() => Self::Offline,
            None => Self::Unexpected,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::TimedOut => {
                "Request timed out. Please check your internet connection and try again."
            }
            Self::RateLimited => "Too many requests. Please wait a moment before trying again.",
            Self::ServiceUnavailable => {
                "Search service is currently unavailable. Please try again later."
            }
            Self::Offline => "No internet connection. Please check your network and try again.",
            Self::Unexpected => "An unexpected error occurred. Please try again later.",
        }
    }
}

impl std::fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

pub struct SearchSession {
    client: Client,
    base_url: String,
    reddit_results: Vec<RedditPost>,
    youtube_results: Vec<YouTubeVideo>,
    ai_analysis: Option<String>,
    sources: Option<SourceHealth>,
    is_loading: bool,
    has_searched: bool,
    error: Option<SearchFailure>,
}

impl SearchSession {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            reddit_results: Vec::new(),
            youtube_results: Vec::new(),
            ai_analysis: None,
            sources: None,
            is_loading: false,
            has_searched: false,
            error: None,
        })
    }

    /// Run one search, replacing the current results.
    ///
    /// Failures never propagate: results are cleared and a classified
    /// message is kept in [`SearchSession::error`].
    pub async fn search_strategies(&mut self, query: &str) {
        self.is_loading = true;
        self.error = None;

        match self.fetch(query).await {
            Ok(response) => {
                self.reddit_results = response.reddit_posts;
                self.youtube_results = response.youtube_videos;
                self.ai_analysis = response.ai_analysis.filter(|text| !text.is_empty());
                self.sources = Some(response.sources);
                self.has_searched = true;
            }
            Err(e) => {
                let failure = SearchFailure::classify(&e);
                tracing::warn!(error = %e, ?failure, "search request failed");
                self.error = Some(failure);
                self.reddit_results.clear();
                self.youtube_results.clear();
                self.ai_analysis = None;
                self.sources = None;
            }
        }

        self.is_loading = false;
    }

    async fn fetch(&self, query: &str) -> Result<SearchResponse, reqwest::Error> {
        self.client
            .get(format!("{}/api/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await
    }

    /// Ask the server for its liveness status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not `{ "status": ... }`.
    pub async fn health(&self) -> Result<String, reqwest::Error> {
        let body = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<HealthBody>()
            .await?;
        Ok(body.status)
    }

    #[must_use]
    pub fn reddit_results(&self) -> &[RedditPost] {
        &self.reddit_results
    }

    #[must_use]
    pub fn youtube_results(&self) -> &[YouTubeVideo] {
        &self.youtube_results
    }

    #[must_use]
    pub fn ai_analysis(&self) -> Option<&str> {
        self.ai_analysis.as_deref()
    }

    #[must_use]
    pub fn sources(&self) -> Option<&SourceHealth> {
        self.sources.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    #[must_use]
    pub fn error(&self) -> Option<SearchFailure> {
        self.error
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
