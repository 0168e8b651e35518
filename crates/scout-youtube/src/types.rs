//! Raw YouTube Data API payloads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchListResponse {
    #[serde(default)]
    pub(crate) items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub(crate) id: SearchItemId,
    #[serde(default)]
    pub(crate) snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    pub(crate) video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Snippet {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) thumbnails: Thumbnails,
    pub(crate) channel_title: String,
    pub(crate) published_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub(crate) high: Option<Thumbnail>,
    pub(crate) medium: Option<Thumbnail>,
    pub(crate) default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub(crate) url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub(crate) items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub(crate) id: String,
    pub(crate) statistics: Option<Statistics>,
    pub(crate) content_details: Option<ContentDetails>,
}

/// Counts arrive as decimal strings; any may be hidden by the uploader.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    pub(crate) view_count: Option<String>,
    pub(crate) like_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    pub(crate) duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}
