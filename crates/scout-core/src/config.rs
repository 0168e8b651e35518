use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Credentials the server cannot run without.
const REQUIRED_VARS: [&str; 3] = [
    "REDDIT_CLIENT_ID",
    "REDDIT_CLIENT_SECRET",
    "YOUTUBE_API_KEY",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Empty values count as missing. Every absent credential is reported in one
/// error so an operator can fix the environment in a single pass.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let present = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { present(var).unwrap_or_else(|| default.to_string()) };

    let missing: Vec<String> = REQUIRED_VARS
        .iter()
        .filter(|var| present(**var).is_none())
        .map(|var| (*var).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingEnvVars(missing));
    }

    let env = parse_environment(&or_default("SCOUT_ENV", "development"));
    let port: u16 = parse_var("PORT", &or_default("PORT", "3001"))?;
    let bind_addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level: or_default("SCOUT_LOG_LEVEL", "info"),
        reddit_client_id: or_default("REDDIT_CLIENT_ID", ""),
        reddit_client_secret: or_default("REDDIT_CLIENT_SECRET", ""),
        reddit_user_agent: or_default("SCOUT_REDDIT_USER_AGENT", "ClashStrategyFinder/1.0.0"),
        youtube_api_key: or_default("YOUTUBE_API_KEY", ""),
        xai_api_key: present("XAI_API_KEY"),
        chat_model: or_default("SCOUT_CHAT_MODEL", "grok-3-beta"),
        upstream_timeout_secs: parse_var(
            "SCOUT_UPSTREAM_TIMEOUT_SECS",
            &or_default("SCOUT_UPSTREAM_TIMEOUT_SECS", "15"),
        )?,
        youtube_cache_ttl_secs: parse_var(
            "SCOUT_YOUTUBE_CACHE_TTL_SECS",
            &or_default("SCOUT_YOUTUBE_CACHE_TTL_SECS", "3600"),
        )?,
        youtube_cache_capacity: parse_var(
            "SCOUT_YOUTUBE_CACHE_CAPACITY",
            &or_default("SCOUT_YOUTUBE_CACHE_CAPACITY", "256"),
        )?,
        rate_limit_per_minute: parse_var(
            "SCOUT_RATE_LIMIT_PER_MINUTE",
            &or_default("SCOUT_RATE_LIMIT_PER_MINUTE", "120"),
        )?,
    })
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
