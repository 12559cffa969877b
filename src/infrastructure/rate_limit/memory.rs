use crate::application::ApplicationResult;
use crate::application::ports::rate_limit::{RateLimitDecision, RateLimitPolicy, RateLimitStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Per-process sliding-window limiter. The whole prune/check/append sequence
/// of `record` runs under one lock.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    policy: RateLimitPolicy,
    entries: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl InMemoryRateLimitStore {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<DateTime<Utc>>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.lock().len()
    }

    fn retry_after(&self, oldest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Duration {
        oldest
            .and_then(|oldest| oldest.checked_add_signed(self.policy.window_chrono()))
            .map_or(self.policy.window, |until| {
                (until - now).to_std().unwrap_or(Duration::ZERO)
            })
    }
}

fn as_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    async fn record(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<RateLimitDecision> {
        let policy = self.policy;
        let mut entries = self.lock();
        let stamps = entries.entry(key.to_string()).or_default();
        stamps.retain(|stamp| policy.in_window(*stamp, now));

        if as_u32(stamps.len()) >= policy.max_requests {
            let oldest = stamps.iter().min().copied();
            return Ok(RateLimitDecision::Limited {
                retry_after: self.retry_after(oldest, now),
            });
        }

        stamps.push(now);
        Ok(RateLimitDecision::Allowed {
            remaining: policy.max_requests - as_u32(stamps.len()),
        })
    }

    async fn is_limited(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<bool> {
        let policy = self.policy;
        let entries = self.lock();
        let recent = entries.get(key).map_or(0, |stamps| {
            stamps.iter().filter(|stamp| policy.in_window(**stamp, now)).count()
        });
        Ok(as_u32(recent) >= policy.max_requests)
    }

    async fn sweep(&self, now: DateTime<Utc>) -> ApplicationResult<usize> {
        let policy = self.policy;
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, stamps| {
            stamps.retain(|stamp| policy.in_window(*stamp, now));
            !stamps.is_empty()
        });
        Ok(before - entries.len())
    }
}
