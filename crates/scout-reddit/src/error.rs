use thiserror::Error;

/// Errors returned by the Reddit client.
#[derive(Debug, Error)]
pub enum RedditError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client-credentials exchange was rejected or returned no token.
    #[error("failed to authenticate with Reddit: {0}")]
    TokenExchange(String),

    #[error("unexpected HTTP status {status} from Reddit search")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
