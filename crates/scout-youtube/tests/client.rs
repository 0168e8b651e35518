//! Integration tests for `YouTubeClient` using wiremock HTTP mocks.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_core::SourceOutcome;
use scout_youtube::{ManualClock, VideoCache, YouTubeClient, YouTubeError};

fn test_client(server: &MockServer, cache: Arc<VideoCache>) -> YouTubeClient {
    YouTubeClient::with_base_url("yt-key", 5, &server.uri(), cache)
        .expect("client construction should not fail")
}

fn fresh_cache() -> Arc<VideoCache> {
    Arc::new(VideoCache::new(Duration::from_secs(3600), 16))
}

fn search_body(ids: &[&str]) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "kind": "youtube#searchResult",
                "id": { "kind": "youtube#video", "videoId": id },
                "snippet": {
                    "title": format!("Guide {id}"),
                    "description": "Three star every base",
                    "channelTitle": "Clash Academy",
                    "publishedAt": "2024-05-01T12:00:00Z",
                    "thumbnails": {
                        "default": { "url": format!("https://i.ytimg.com/vi/{id}/default.jpg") },
                        "high": { "url": format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg") }
                    }
                }
            })
        })
        .collect();
    json!({ "kind": "youtube#searchListResponse", "items": items })
}

fn details_body(entries: &[(&str, Option<&str>, &str)]) -> serde_json::Value {
    let items: Vec<_> = entries
        .iter()
        .map(|(id, views, duration)| {
            let mut stats = json!({ "likeCount": "250" });
            if let Some(v) = views {
                stats["viewCount"] = json!(v);
            }
            json!({
                "id": id,
                "statistics": stats,
                "contentDetails": { "duration": duration }
            })
        })
        .collect();
    json!({ "kind": "youtube#videoListResponse", "items": items })
}

async fn mount_search(server: &MockServer, ids: &[&str], expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(ids)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_merges_details_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Clash of Clans hog rider strategy guide"))
        .and(query_param("maxResults", "3"))
        .and(query_param("type", "video"))
        .and(query_param("videoDuration", "medium"))
        .and(query_param("relevanceLanguage", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&["a", "b", "c"])))
        .mount(&server)
        .await;

    // Details come back in a different order than the search hits.
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "statistics,contentDetails"))
        .and(query_param("id", "a,b,c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body(&[
            ("c", Some("3000"), "PT12M"),
            ("a", Some("1000"), "PT4M13S"),
            ("b", Some("2000"), "PT1H2M3S"),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server, fresh_cache());
    let videos = client.try_search("hog rider").await.expect("search");

    assert_eq!(videos.len(), 3);
    assert_eq!(videos[0].id, "a");
    assert_eq!(videos[0].view_count, 1000);
    assert_eq!(videos[0].like_count, 250);
    assert_eq!(videos[0].duration, "PT4M13S");
    assert_eq!(videos[0].thumbnail, "https://i.ytimg.com/vi/a/hqdefault.jpg");
    assert_eq!(videos[0].channel_title, "Clash Academy");
    assert_eq!(videos[2].id, "c");
    assert_eq!(videos[2].view_count, 3000);
}

#[tokio::test]
async fn video_missing_from_details_is_dropped() {
    let server = MockServer::start().await;
    mount_search(&server, &["a", "b"], 1).await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(details_body(&[("b", None, "PT9M")])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server, fresh_cache());
    let videos = client.try_search("queen charge").await.expect("search");

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "b");
    assert_eq!(videos[0].view_count, 0, "hidden view count reads as zero");
}

#[tokio::test]
async fn repeated_query_within_ttl_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_search(&server, &["a"], 2).await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(details_body(&[("a", Some("1"), "PT5M")])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(VideoCache::with_clock(
        Duration::from_secs(3600),
        16,
        clock.clone(),
    ));
    let client = test_client(&server, cache);

    let first = client.try_search("th9 attack").await.expect("first");
    clock.advance(Duration::from_secs(1800));
    let second = client.try_search("th9 attack").await.expect("second");
    assert_eq!(
        serde_json::to_vec(&first).expect("serialize"),
        serde_json::to_vec(&second).expect("serialize")
    );

    clock.advance(Duration::from_secs(1800));
    let third = client.try_search("th9 attack").await.expect("third");
    assert_eq!(third, first);
    // Expectations on the mocks (2 calls each) are verified when the server drops.
}

#[tokio::test]
async fn failed_lookup_is_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let cache = fresh_cache();
    let client = test_client(&server, cache.clone());

    let err = client.try_search("base").await.expect_err("should fail");
    assert!(
        matches!(err, YouTubeError::Api { status: 403, ref message, .. } if message == "quotaExceeded"),
        "expected Api(403), got: {err:?}"
    );

    let outcome = client.search("base").await;
    assert!(matches!(outcome, SourceOutcome::Unavailable { .. }));
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn failed_detail_lookup_is_an_error_not_an_empty_join() {
    let server = MockServer::start().await;
    mount_search(&server, &["a", "b"], 1).await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server, fresh_cache());
    let err = client.try_search("loons").await.expect_err("should fail");
    assert!(
        matches!(err, YouTubeError::Api { endpoint: "videos", status: 500, .. }),
        "expected Api(videos, 500), got: {err:?}"
    );
}

#[tokio::test]
async fn empty_search_skips_detail_request() {
    let server = MockServer::start().await;
    mount_search(&server, &[], 1).await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_body(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server, fresh_cache());
    let outcome = client.search("nothing here").await;
    assert_eq!(outcome, SourceOutcome::Found(vec![]));
}
