//! Joins search hits with their detail records on the video id.

use std::collections::HashMap;

use scout_core::{YouTubeVideo, MAX_RESULTS_PER_SOURCE};

use crate::types::{SearchItem, Snippet, VideoItem};

/// Pair each search hit with the detail record carrying the same id.
///
/// Hits without a video id (channels, playlists) and hits the details
/// response does not mention are dropped. Search order is preserved.
pub(crate) fn merge_by_id(hits: Vec<SearchItem>, details: Vec<VideoItem>) -> Vec<YouTubeVideo> {
    let mut by_id: HashMap<String, VideoItem> = details
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();

    hits.into_iter()
        .filter_map(|hit| {
            let id = hit.id.video_id?;
            let Some(detail) = by_id.remove(&id) else {
                tracing::warn!(video_id = %id, "no detail record for search hit; dropping video");
                return None;
            };
            Some(to_video(id, hit.snippet, detail))
        })
        .take(MAX_RESULTS_PER_SOURCE)
        .collect()
}

fn to_video(id: String, snippet: Snippet, detail: VideoItem) -> YouTubeVideo {
    let stats = detail.statistics.unwrap_or_default();
    let thumbnail = snippet
        .thumbnails
        .high
        .or(snippet.thumbnails.medium)
        .or(snippet.thumbnails.default)
        .map(|t| t.url)
        .unwrap_or_default();

    YouTubeVideo {
        view_count: parse_count(stats.view_count.as_deref()),
        like_count: parse_count(stats.like_count.as_deref()),
        duration: detail
            .content_details
            .and_then(|c| c.duration)
            .unwrap_or_default(),
        id,
        title: snippet.title,
        description: snippet.description,
        thumbnail,
        channel_title: snippet.channel_title,
        published_at: snippet.published_at,
    }
}

/// Hidden or malformed counts read as zero.
pub(crate) fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentDetails, SearchItemId, Statistics, Thumbnail, Thumbnails};

    fn hit(id: Option<&str>, title: &str) -> SearchItem {
        SearchItem {
            id: SearchItemId {
                video_id: id.map(ToOwned::to_owned),
            },
            snippet: Snippet {
                title: title.to_string(),
                thumbnails: Thumbnails {
                    high: Some(Thumbnail {
                        url: format!("https://i.ytimg.com/{title}/hq.jpg"),
                    }),
                    ..Thumbnails::default()
                },
                ..Snippet::default()
            },
        }
    }

    fn detail(id: &str, views: Option<&str>, duration: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            statistics: Some(Statistics {
                view_count: views.map(ToOwned::to_owned),
                like_count: Some("10".to_string()),
            }),
            content_details: Some(ContentDetails {
                duration: Some(duration.to_string()),
            }),
        }
    }

    #[test]
    fn merge_joins_on_id_even_when_details_are_reordered() {
        let hits = vec![hit(Some("a"), "first"), hit(Some("b"), "second")];
        let details = vec![
            detail("b", Some("200"), "PT2M"),
            detail("a", Some("100"), "PT1M"),
        ];
        let videos = merge_by_id(hits, details);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "a");
        assert_eq!(videos[0].view_count, 100);
        assert_eq!(videos[0].duration, "PT1M");
        assert_eq!(videos[1].id, "b");
        assert_eq!(videos[1].view_count, 200);
        assert_eq!(videos[0].thumbnail, "https://i.ytimg.com/first/hq.jpg");
    }

    #[test]
    fn merge_drops_hits_without_details() {
        let hits = vec![hit(Some("a"), "first"), hit(Some("b"), "second")];
        let details = vec![detail("b", Some("5"), "PT3M")];
        let videos = merge_by_id(hits, details);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "b");
    }

    #[test]
    fn merge_skips_hits_without_video_id() {
        let hits = vec![hit(None, "a channel"), hit(Some("v"), "video")];
        let details = vec![detail("v", Some("1"), "PT4M13S")];
        let videos = merge_by_id(hits, details);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "video");
    }

    #[test]
    fn missing_statistics_read_as_zero() {
        let hits = vec![hit(Some("a"), "first")];
        let mut d = detail("a", None, "PT1M");
        d.statistics = None;
        let videos = merge_by_id(hits, vec![d]);
        assert_eq!(videos[0].view_count, 0);
        assert_eq!(videos[0].like_count, 0);
    }

    #[test]
    fn parse_count_handles_garbage() {
        assert_eq!(parse_count(Some("12345")), 12_345);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(Some("-4")), 0);
        assert_eq!(parse_count(None), 0);
    }
}
