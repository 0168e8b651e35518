//! Reddit search client scoped to r/ClashOfClans.
//!
//! Authenticates with the client-credentials grant, caches the bearer token
//! until shortly before it expires, and reduces a subreddit search listing to
//! at most three posts whose titles mention the query.

pub mod client;
pub mod error;
pub mod helpers;

mod token;
mod types;

pub use client::{RedditClient, RedditConfig};
pub use error::RedditError;
