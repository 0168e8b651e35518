//! Chat-completion summarizer with a local fallback.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use scout_core::{Analyst, RedditPost};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::report::generate_report;

const DEFAULT_ENDPOINT: &str = "https://api.x.ai/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;
const SYSTEM_PROMPT: &str = "You are Grok, a highly intelligent Clash of Clans strategy expert. \
Analyze these Reddit posts and provide a concise, witty, and practical summary of the key \
strategies and tips discussed. Use your characteristic direct and sometimes sarcastic tone \
while maintaining helpfulness.";

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// `None` skips the remote call entirely.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct Summarizer {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
    rng: Mutex<StdRng>,
}

impl Summarizer {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &SummarizerConfig) -> Result<Self, AnalysisError> {
        Self::with_endpoint(config, DEFAULT_ENDPOINT)
    }

    /// Point at a different chat-completion URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoint(config: &SummarizerConfig, endpoint: &str) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            endpoint: endpoint.to_owned(),
            model: config.model.clone(),
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Replace the random source so fallback reports are reproducible.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summary of `posts`. Always returns text: any failure of the remote
    /// call falls back to [`generate_report`].
    pub async fn analyze(&self, posts: &[RedditPost]) -> String {
        if posts.is_empty() {
            tracing::debug!("no posts to summarize; using local analysis");
            return self.local_report(posts);
        }

        match self.complete(posts).await {
            Ok(summary) => summary,
            Err(AnalysisError::MissingApiKey) => {
                tracing::info!("chat-completion key missing; using local analysis");
                self.local_report(posts)
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat completion failed; falling back to local analysis");
                self.local_report(posts)
            }
        }
    }

    /// Ask the chat-completion endpoint for a summary and return the first
    /// choice's text verbatim.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::MissingApiKey`] when no key is configured.
    /// - [`AnalysisError::UnexpectedStatus`] on a non-2xx response.
    /// - [`AnalysisError::EmptyCompletion`] if no choice carries content.
    /// - [`AnalysisError::Http`] on network or decoding failure.
    pub async fn complete(&self, posts: &[RedditPost]) -> Result<String, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let user_prompt = format!(
            "Please analyze these Clash of Clans strategy posts and provide a summary:\n\n{}",
            build_post_digest(posts)
        );
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AnalysisError::EmptyCompletion)
    }

    fn local_report(&self, posts: &[RedditPost]) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_report(posts, &mut *rng)
    }
}

impl Analyst for Summarizer {
    fn analyze<'a>(&'a self, posts: &'a [RedditPost]) -> BoxFuture<'a, String> {
        // Inherent method; not a recursive call.
        Summarizer::analyze(self, posts).boxed()
    }
}

/// Title, body and link of each post, separated by `---` rules.
fn build_post_digest(posts: &[RedditPost]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                "\nTitle: {}\nContent: {}\nURL: {}\n",
                post.title, post.selftext, post.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}
