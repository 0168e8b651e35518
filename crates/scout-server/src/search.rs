//! Fan-out over the upstream sources for a single search request.

use std::sync::Arc;

use scout_core::{
    Analyst, PostSource, SearchResponse, SourceHealth, SourceOutcome, VideoSource,
    MAX_RESULTS_PER_SOURCE,
};
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFailure {
    Panicked,
    Cancelled,
}

impl std::fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panicked => write!(f, "panicked"),
            Self::Cancelled => write!(f, "was cancelled"),
        }
    }
}

impl From<&JoinError> for TaskFailure {
    fn from(err: &JoinError) -> Self {
        if err.is_panic() {
            Self::Panicked
        } else {
            Self::Cancelled
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// A spawned source lookup never produced an outcome.
    #[error("{source_name} lookup task {reason}")]
    TaskFailed {
        source_name: &'static str,
        reason: TaskFailure,
    },
}

/// Owns the source seams and produces the aggregated response.
pub struct SearchService {
    reddit: Arc<dyn PostSource>,
    youtube: Arc<dyn VideoSource>,
    analyst: Option<Arc<dyn Analyst>>,
}

impl SearchService {
    #[must_use]
    pub fn new(reddit: Arc<dyn PostSource>, youtube: Arc<dyn VideoSource>) -> Self {
        Self {
            reddit,
            youtube,
            analyst: None,
        }
    }

    #[must_use]
    pub fn with_analyst(mut self, analyst: Arc<dyn Analyst>) -> Self {
        self.analyst = Some(analyst);
        self
    }

    /// Queries both sources concurrently, then summarizes the Reddit posts.
    ///
    /// Each source already absorbs its own upstream failures, so both tasks
    /// always run to completion and neither cancels the other.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TaskFailed`] if a lookup task panics or is
    /// cancelled before producing an outcome.
    pub async fn run(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let reddit = Arc::clone(&self.reddit);
        let reddit_query = query.to_owned();
        let reddit_task = tokio::spawn(async move { reddit.search(&reddit_query).await });

        let youtube = Arc::clone(&self.youtube);
        let youtube_query = query.to_owned();
        let youtube_task = tokio::spawn(async move { youtube.search(&youtube_query).await });

        let (reddit, youtube) = tokio::join!(reddit_task, youtube_task);
        let reddit = reddit.map_err(|e| task_failed("reddit", &e))?;
        let youtube = youtube.map_err(|e| task_failed("youtube", &e))?;

        if let SourceOutcome::Unavailable { cause } = &reddit {
            tracing::warn!(query, cause = %cause, "reddit unavailable; returning no posts");
        }
        if let SourceOutcome::Unavailable { cause } = &youtube {
            tracing::warn!(query, cause = %cause, "youtube unavailable; returning no videos");
        }

        let (reddit, youtube) = (capped(reddit), capped(youtube));
        let sources = SourceHealth {
            reddit: reddit.status(),
            youtube: youtube.status(),
        };
        let reddit_posts = reddit.into_items();
        let youtube_videos = youtube.into_items();

        let ai_analysis = match &self.analyst {
            Some(analyst) => Some(analyst.analyze(&reddit_posts).await),
            None => None,
        };

        tracing::info!(
            query,
            reddit = reddit_posts.len(),
            youtube = youtube_videos.len(),
            "search complete"
        );

        Ok(SearchResponse {
            reddit_posts,
            youtube_videos,
            ai_analysis,
            sources,
        })
    }
}

fn capped<T>(outcome: SourceOutcome<T>) -> SourceOutcome<T> {
    match outcome {
        SourceOutcome::Found(mut items) => {
            items.truncate(MAX_RESULTS_PER_SOURCE);
            SourceOutcome::Found(items)
        }
        unavailable @ SourceOutcome::Unavailable { .. } => unavailable,
    }
}

fn task_failed(source_name: &'static str, err: &JoinError) -> SearchError {
    tracing::error!(source_name, error = %err, "source lookup task failed");
    SearchError::TaskFailed {
        source_name,
        reason: TaskFailure::from(err),
    }
}
