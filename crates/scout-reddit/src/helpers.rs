//! Listing post-processing: relevance filter, truncation, and conversion.

use scout_core::{RedditPost, MAX_RESULTS_PER_SOURCE};

use crate::types::{Listing, PostData};

/// Maximum characters of body text carried on a post.
pub const SELFTEXT_LIMIT: usize = 200;

const REDDIT_ORIGIN: &str = "https://www.reddit.com";

/// Lowercased whitespace-delimited tokens of a query.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// True when the title contains any term, case-insensitively.
#[must_use]
pub fn title_matches(title: &str, terms: &[String]) -> bool {
    let title = title.to_lowercase();
    terms.iter().any(|term| title.contains(term.as_str()))
}

/// Keep at most `max` characters. Never splits a code point.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Reddit marks missing previews with sentinels such as `self`, `default`,
/// `nsfw` or an empty string. Only real image URLs survive.
#[must_use]
pub fn normalize_thumbnail(thumbnail: Option<&str>) -> Option<String> {
    thumbnail
        .map(str::trim)
        .filter(|t| t.starts_with("http://") || t.starts_with("https://"))
        .map(ToOwned::to_owned)
}

pub(crate) fn to_post(data: PostData) -> Option<RedditPost> {
    let id = data.id.filter(|id| !id.is_empty())?;
    let title = data.title?;
    let permalink = data.permalink?;

    #[allow(clippy::cast_possible_truncation)]
    let created = data.created_utc.unwrap_or_default() as i64;

    Some(RedditPost {
        id,
        title,
        url: format!("{REDDIT_ORIGIN}{permalink}"),
        author: data.author.unwrap_or_else(|| "[deleted]".to_string()),
        num_comments: data.num_comments.unwrap_or_default(),
        created,
        score: data.score.unwrap_or_default(),
        selftext: truncate_chars(data.selftext.as_deref().unwrap_or_default(), SELFTEXT_LIMIT),
        thumbnail: normalize_thumbnail(data.thumbnail.as_deref()),
    })
}

/// Convert a listing into the response shape, keeping the first posts whose
/// title mentions the query in the order Reddit returned them.
pub(crate) fn select_posts(query: &str, listing: Listing) -> Vec<RedditPost> {
    let terms = query_terms(query);
    listing
        .data
        .children
        .into_iter()
        .filter_map(|child| to_post(child.data))
        .filter(|post| title_matches(&post.title, &terms))
        .take(MAX_RESULTS_PER_SOURCE)
        .collect()
}
