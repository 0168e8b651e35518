//! Seams between the orchestrator and the upstream clients.
//!
//! Every client keeps the simple contract (a list, never an error) while still
//! telling the caller whether the list is a real answer or a degraded one.

use futures::future::BoxFuture;

use crate::models::{RedditPost, SourceStatus, YouTubeVideo};

/// Result of asking one upstream provider for matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome<T> {
    /// The provider answered; the list may legitimately be empty.
    Found(Vec<T>),
    /// The provider could not be reached or returned garbage.
    Unavailable { cause: String },
}

impl<T> SourceOutcome<T> {
    #[must_use]
    pub fn unavailable(cause: impl Into<String>) -> Self {
        Self::Unavailable {
            cause: cause.into(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Found(items) => items,
            Self::Unavailable { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Found(items) => items,
            Self::Unavailable { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn status(&self) -> SourceStatus {
        match self {
            Self::Found(items) => SourceStatus::Ok { count: items.len() },
            Self::Unavailable { .. } => SourceStatus::Unavailable,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<Vec<T>, E>> for SourceOutcome<T> {
    fn from(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::Found(items),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }
}

pub trait PostSource: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SourceOutcome<RedditPost>>;
}

pub trait VideoSource: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SourceOutcome<YouTubeVideo>>;
}

/// Produces a human-readable digest of a set of posts. Never fails.
pub trait Analyst: Send + Sync {
    fn analyze<'a>(&'a self, posts: &'a [RedditPost]) -> BoxFuture<'a, String>;
}
