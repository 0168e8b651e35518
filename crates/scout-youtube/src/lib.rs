//! YouTube Data API v3 client for Clash of Clans strategy videos.
//!
//! A lookup is two requests: `search` for candidate ids, then `videos` for
//! statistics and durations. The two responses are joined on the video id.
//! Successful lookups are kept in a [`VideoCache`] shared by reference.

pub mod cache;
pub mod client;
pub mod error;

mod merge;
mod types;

pub use cache::{Clock, ManualClock, SystemClock, VideoCache};
pub use client::YouTubeClient;
pub use error::YouTubeError;
