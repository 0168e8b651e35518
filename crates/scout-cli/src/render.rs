//! Plain-text presentation of a [`SearchSession`].

use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use scout_core::{RedditPost, SourceStatus, YouTubeVideo};

use crate::session::SearchSession;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid regex"));

pub const LOADING: &str = "Searching for strategies...";

/// Turn an ISO-8601 duration (`PT1H2M3S`) into `1:02:03`, or `4:13` under an hour.
///
/// Anything without a `PT` time part renders as an empty string.
#[must_use]
pub fn format_duration(duration: &str) -> String {
    let Some(caps) = DURATION_RE.captures(duration) else {
        return String::new();
    };
    let part = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Compact view/like counts: `999`, `1.2K`, `3.4M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// `2024-03-01T12:00:00Z` becomes `Mar 1, 2024`; unparseable input is shown as-is.
#[must_use]
pub fn format_published(published_at: &str) -> String {
    DateTime::parse_from_rfc3339(published_at).map_or_else(
        |_| published_at.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

#[must_use]
pub fn reddit_section(posts: &[RedditPost]) -> String {
    let mut out = String::new();
    if posts.is_empty() {
        return out;
    }

    out.push_str("Reddit Posts\n");
    for (i, post) in posts.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, post.title);
        if !post.selftext.is_empty() {
            let _ = writeln!(out, "   {}", post.selftext);
        }
        let _ = writeln!(
            out,
            "   {} comments | {} points",
            post.num_comments, post.score
        );
        let _ = writeln!(out, "   Read More: {}", post.url);
    }
    out
}

#[must_use]
pub fn youtube_section(videos: &[YouTubeVideo]) -> String {
    let mut out = String::new();
    if videos.is_empty() {
        return out;
    }

    out.push_str("YouTube Videos\n");
    for (i, video) in videos.iter().enumerate() {
        let duration = format_duration(&video.duration);
        if duration.is_empty() {
            let _ = writeln!(out, "{}. {}", i + 1, video.title);
        } else {
            let _ = writeln!(out, "{}. {} [{duration}]", i + 1, video.title);
        }
        let _ = writeln!(out, "   {}", video.channel_title);
        if !video.description.is_empty() {
            let _ = writeln!(out, "   {}", video.description);
        }
        let _ = writeln!(
            out,
            "   {} views | {} likes | {}",
            format_count(video.view_count),
            format_count(video.like_count),
            format_published(&video.published_at)
        );
        let _ = writeln!(out, "   Watch: {}", watch_url(&video.id));
    }
    out
}

#[must_use]
pub fn analysis_section(analysis: Option<&str>) -> String {
    match analysis {
        Some(text) if !text.is_empty() => format!("AI Strategy Analysis\n{text}\n"),
        _ => String::new(),
    }
}

/// Whole-screen view with the same precedence as the web results panel:
/// loading, then error, then the empty states, then results.
#[must_use]
pub fn render_session(session: &SearchSession) -> String {
    if session.is_loading() {
        return format!("{LOADING}\n");
    }

    if let Some(failure) = session.error() {
        return format!("Error: {failure}\nPlease try again with a different query\n");
    }

    if !session.has_searched() {
        return "Enter your question above to find strategies\n".to_string();
    }

    let mut out = analysis_section(session.ai_analysis());

    if session.reddit_results().is_empty() && session.youtube_results().is_empty() {
        out.push_str("No results found\nTry using different keywords or check your spelling\n");
    } else {
        out.push_str("Strategy Results\n\n");
        let reddit = reddit_section(session.reddit_results());
        if !reddit.is_empty() {
            out.push_str(&reddit);
            out.push('\n');
        }
        out.push_str(&youtube_section(session.youtube_results()));
    }

    if let Some(sources) = session.sources() {
        for (name, status) in [("Reddit", sources.reddit), ("YouTube", sources.youtube)] {
            if status == SourceStatus::Unavailable {
                let _ = writeln!(out, "Note: {name} is currently unavailable.");
            }
        }
    }

    out
}
