use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";
const SEARCH_WINDOW: Duration = Duration::from_secs(60);

/// Request id carried as a request extension and echoed on the response.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Debug)]
struct SearchWindow {
    opened_at: Instant,
    served: usize,
}

/// Shared fixed-window budget for `/api/search`.
///
/// Every search fans out to both upstream APIs, so the budget is counted per
/// search request across all callers, not per client.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    budget: usize,
    window: Duration,
    current: Arc<Mutex<SearchWindow>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(budget: usize, window: Duration) -> Self {
        Self {
            budget,
            window,
            current: Arc::new(Mutex::new(SearchWindow {
                opened_at: Instant::now(),
                served: 0,
            })),
        }
    }

    /// Budget from `SCOUT_RATE_LIMIT_PER_MINUTE`.
    #[must_use]
    pub fn per_minute(budget: usize) -> Self {
        Self::new(budget, SEARCH_WINDOW)
    }

    /// Counts one search against the window. On rejection returns how long
    /// until the window reopens.
    async fn admit(&self) -> Result<(), Duration> {
        let mut window = self.current.lock().await;
        let elapsed = window.opened_at.elapsed();
        if elapsed >= self.window {
            window.opened_at = Instant::now();
            window.served = 0;
        } else if window.served >= self.budget {
            return Err(self.window - elapsed);
        }
        window.served += 1;
        Ok(())
    }
}

/// Echo the caller's `x-request-id` or mint a UUIDv4, and expose it to
/// handlers as [`RequestId`].
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}

/// Rejects searches beyond the window budget with 429 and `Retry-After`.
pub async fn enforce_rate_limit(
    State(limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let Err(retry_in) = limit.admit().await else {
        return next.run(req).await;
    };

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map_or("-", |id| id.0.as_str());
    tracing::warn!(
        request_id,
        budget = limit.budget,
        retry_in_secs = retry_in.as_secs(),
        "search budget exhausted"
    );

    let mut res = ApiError::rate_limited().into_response();
    let retry_after = retry_in.as_secs().max(1).to_string();
    if let Ok(val) = HeaderValue::from_str(&retry_after) {
        res.headers_mut().insert(header::RETRY_AFTER, val);
    }
    res
}
