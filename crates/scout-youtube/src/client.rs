//! HTTP client for the YouTube Data API v3.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use scout_core::{SourceOutcome, VideoSource, YouTubeVideo, MAX_RESULTS_PER_SOURCE};
use serde::de::DeserializeOwned;

use crate::cache::VideoCache;
use crate::error::YouTubeError;
use crate::merge::merge_by_id;
use crate::types::{ErrorEnvelope, SearchListResponse, VideoListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the `search` and `videos` endpoints.
///
/// Use [`YouTubeClient::new`] for production or
/// [`YouTubeClient::with_base_url`] to point at a mock server in tests.
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Arc<VideoCache>,
}

impl YouTubeClient {
    /// # Errors
    ///
    /// Returns [`YouTubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        cache: Arc<VideoCache>,
    ) -> Result<Self, YouTubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL, cache)
    }

    /// # Errors
    ///
    /// Returns [`YouTubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        cache: Arc<VideoCache>,
    ) -> Result<Self, YouTubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            cache,
        })
    }

    /// Look up strategy videos, absorbing every failure into
    /// [`SourceOutcome::Unavailable`].
    pub async fn search(&self, query: &str) -> SourceOutcome<YouTubeVideo> {
        match self.try_search(query).await {
            Ok(videos) => SourceOutcome::Found(videos),
            Err(e) => {
                tracing::warn!(query, error = %e, "YouTube search failed; returning no videos");
                SourceOutcome::unavailable(e.to_string())
            }
        }
    }

    /// Up to three medium-length strategy guides for `query`.
    ///
    /// Served from the cache when a fresh entry exists. Failures are not cached.
    ///
    /// # Errors
    ///
    /// - [`YouTubeError::Api`] on a non-2xx response from either endpoint.
    /// - [`YouTubeError::Http`] on network failure.
    /// - [`YouTubeError::Deserialize`] if a response does not match the expected shape.
    pub async fn try_search(&self, query: &str) -> Result<Vec<YouTubeVideo>, YouTubeError> {
        if let Some(videos) = self.cache.get(query).await {
            tracing::debug!(query, count = videos.len(), "YouTube cache hit");
            return Ok(videos);
        }

        let hits = self.search_videos(query).await?.items;
        let ids: Vec<&str> = hits
            .iter()
            .filter_map(|hit| hit.id.video_id.as_deref())
            .collect();

        let videos = if ids.is_empty() {
            Vec::new()
        } else {
            let details = self.video_details(&ids).await?.items;
            merge_by_id(hits, details)
        };

        tracing::debug!(query, count = videos.len(), "YouTube lookup complete");
        self.cache.insert(query, videos.clone()).await;
        Ok(videos)
    }

    async fn search_videos(&self, query: &str) -> Result<SearchListResponse, YouTubeError> {
        let augmented = format!("Clash of Clans {query} strategy guide");
        let max_results = MAX_RESULTS_PER_SOURCE.to_string();
        let params = [
            ("part", "snippet"),
            ("q", augmented.as_str()),
            ("maxResults", max_results.as_str()),
            ("type", "video"),
            ("relevanceLanguage", "en"),
            ("videoDuration", "medium"),
            ("key", self.api_key.as_str()),
        ];
        self.get_json("search", &params).await
    }

    async fn video_details(&self, ids: &[&str]) -> Result<VideoListResponse, YouTubeError> {
        let joined = ids.join(",");
        let params = [
            ("part", "statistics,contentDetails"),
            ("id", joined.as_str()),
            ("key", self.api_key.as_str()),
        ];
        self.get_json("videos", &params).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, YouTubeError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "no error details".to_string());
            return Err(YouTubeError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| YouTubeError::Deserialize {
            context: format!("{endpoint} response"),
            source: e,
        })
    }
}

impl VideoSource for YouTubeClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SourceOutcome<YouTubeVideo>> {
        // Inherent method; not a recursive call.
        YouTubeClient::search(self, query).boxed()
    }
}
