mod api;
mod middleware;
mod search;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use scout_analysis::{Summarizer, SummarizerConfig};
use scout_reddit::{RedditClient, RedditConfig};
use scout_youtube::{VideoCache, YouTubeClient};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
    search::SearchService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = scout_core::load_app_config().context("refusing to start")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let reddit = RedditClient::new(&RedditConfig {
        client_id: config.reddit_client_id.clone(),
        client_secret: config.reddit_client_secret.clone(),
        user_agent: config.reddit_user_agent.clone(),
        timeout_secs: config.upstream_timeout_secs,
    })?;

    let cache = Arc::new(VideoCache::new(
        Duration::from_secs(config.youtube_cache_ttl_secs),
        config.youtube_cache_capacity,
    ));
    let youtube = YouTubeClient::new(&config.youtube_api_key, config.upstream_timeout_secs, cache)?;

    let summarizer = Summarizer::new(&SummarizerConfig {
        api_key: config.xai_api_key.clone(),
        model: config.chat_model.clone(),
        timeout_secs: config.upstream_timeout_secs,
    })?;
    if !summarizer.has_api_key() {
        tracing::warn!("XAI_API_KEY not set; AI analysis will use the local generator");
    }

    let service = SearchService::new(Arc::new(reddit), Arc::new(youtube))
        .with_analyst(Arc::new(summarizer));
    let rate_limit = RateLimitState::per_minute(config.rate_limit_per_minute);
    let app = build_app(
        AppState {
            search: Arc::new(service),
        },
        rate_limit,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
