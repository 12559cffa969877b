// src/application/ports/rate_limit.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Sliding-window policy: at most `max_requests` per key within `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub max_requests: u32,
}

impl RateLimitPolicy {
    pub const CONTACT_WINDOW: Duration = Duration::from_secs(10 * 60);
    pub const CONTACT_MAX_REQUESTS: u32 = 3;

    pub const fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
        }
    }

    pub fn window_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.window).unwrap_or(chrono::Duration::MAX)
    }

    /// Whether `timestamp` still counts against the window ending at `now`.
    pub fn in_window(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(timestamp) < self.window_chrono()
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(Self::CONTACT_WINDOW, Self::CONTACT_MAX_REQUESTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

impl RateLimitDecision {
    pub const fn is_limited(&self) -> bool {
        matches!(self, Self::Limited { .. })
    }
}

/// Per-key request history. Implementations must make `record` atomic per key.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    fn policy(&self) -> RateLimitPolicy;

    /// Prune stale entries, then either reject or count this request.
    async fn record(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<RateLimitDecision>;

    /// Read-only check; does not count a request.
    async fn is_limited(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<bool>;

    /// Drop keys whose history is entirely outside the window. Returns how many were evicted.
    async fn sweep(&self, now: DateTime<Utc>) -> ApplicationResult<usize>;
}
