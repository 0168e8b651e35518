use std::time::{Duration, Instant};

/// Refresh this long before the declared expiry.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Lifetime assumed when the token response omits `expires_in`.
const DEFAULT_LIFETIME: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub(crate) struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    pub(crate) fn new(value: String, expires_in_secs: Option<u64>, now: Instant) -> Self {
        let lifetime = expires_in_secs.map_or(DEFAULT_LIFETIME, Duration::from_secs);
        Self {
            value,
            expires_at: now + lifetime,
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn is_fresh(&self, now: Instant) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}
