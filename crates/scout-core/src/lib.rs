//! Shared model, source seams, and configuration for the Clash strategy scout.

pub mod app_config;
pub mod config;
pub mod models;
pub mod sources;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use models::{
    RedditPost, SearchResponse, SourceHealth, SourceStatus, YouTubeVideo, MAX_RESULTS_PER_SOURCE,
};
pub use sources::{Analyst, PostSource, SourceOutcome, VideoSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
