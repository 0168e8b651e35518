use serde::{Deserialize, Serialize};

/// Upper bound on the number of items either source contributes to a response.
pub const MAX_RESULTS_PER_SOURCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedditPost {
    pub id: String,
    pub title: String,
    /// Absolute URL built from the listing's relative permalink.
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    /// Creation time in Unix seconds.
    pub created: i64,
    pub score: i64,
    /// At most 200 characters of the post body; empty for link posts.
    pub selftext: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: u64,
    pub like_count: u64,
    /// ISO-8601 duration as returned by the API, e.g. `PT4M13S`.
    pub duration: String,
}

/// Whether a source answered, and with how many items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SourceStatus {
    Ok { count: usize },
    Unavailable,
}

impl Default for SourceStatus {
    fn default() -> Self {
        Self::Ok { count: 0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHealth {
    pub reddit: SourceStatus,
    pub youtube: SourceStatus,
}

/// Envelope returned by `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub reddit_posts: Vec<RedditPost>,
    #[serde(default)]
    pub youtube_videos: Vec<YouTubeVideo>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub sources: SourceHealth,
}
