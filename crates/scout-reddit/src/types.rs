//! Raw Reddit API payloads. Only the fields the client reads are modelled.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: Option<String>,
    pub(crate) expires_in: Option<u64>,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub(crate) children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Child {
    pub(crate) data: PostData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostData {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) permalink: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) num_comments: Option<u64>,
    pub(crate) created_utc: Option<f64>,
    pub(crate) score: Option<i64>,
    pub(crate) selftext: Option<String>,
    pub(crate) thumbnail: Option<String>,
}
