use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no chat-completion API key configured")]
    MissingApiKey,

    #[error("chat completion returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("chat completion returned no content")]
    EmptyCompletion,
}
