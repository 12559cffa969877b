use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::rate_limit::{RateLimitDecision, RateLimitPolicy, RateLimitStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use std::time::Duration;

const KEY_PREFIX: &str = "ratelimit:contact:";

// KEYS[1] = sorted set of accepted request times (ms)
// ARGV = now_ms, window_ms, max_requests, member
// Returns {limited, count, oldest_ms}.
const RECORD_SCRIPT: &str = r"
    local now = tonumber(ARGV[1])
    local window = tonumber(ARGV[2])
    redis.call('ZREMRANGEBYSCORE', KEYS[1], '-inf', now - window)
    local count = redis.call('ZCARD', KEYS[1])
    if count >= tonumber(ARGV[3]) then
        local oldest = redis.call('ZRANGE', KEYS[1], 0, 0, 'WITHSCORES')
        return {1, count, tonumber(oldest[2]) or now}
    end
    redis.call('ZADD', KEYS[1], now, ARGV[4])
    redis.call('PEXPIRE', KEYS[1], window)
    return {0, count + 1, now}
";

/// Limiter shared by every instance behind the load balancer. Keys expire on
/// their own, so there is nothing to sweep.
#[derive(Clone)]
pub struct RedisRateLimitStore {
    pool: Pool,
    policy: RateLimitPolicy,
}

impl RedisRateLimitStore {
    /// `url` like `redis://:password@host:6379/0`.
    pub fn from_url(url: &str, policy: RateLimitPolicy) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool, policy })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn window_ms(&self) -> i64 {
        i64::try_from(self.policy.window.as_millis()).unwrap_or(i64::MAX)
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimitStore {
    fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    async fn record(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<RateLimitDecision> {
        let mut conn = self.connection().await?;
        let now_ms = now.timestamp_millis();
        let window_ms = self.window_ms();
        let member = format!("{now_ms}-{}", uuid::Uuid::new_v4());

        let (limited, count, oldest_ms): (i64, i64, i64) = redis::cmd("EVAL")
            .arg(RECORD_SCRIPT)
            .arg(1)
            .arg(format!("{KEY_PREFIX}{key}"))
            .arg(now_ms)
            .arg(window_ms)
            .arg(self.policy.max_requests)
            .arg(member)
            .query_async(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        if limited == 1 {
            let wait_ms = (oldest_ms + window_ms - now_ms).max(0);
            return Ok(RateLimitDecision::Limited {
                retry_after: Duration::from_millis(u64::try_from(wait_ms).unwrap_or(0)),
            });
        }

        let used = u32::try_from(count).unwrap_or(u32::MAX);
        Ok(RateLimitDecision::Allowed {
            remaining: self.policy.max_requests.saturating_sub(used),
        })
    }

    async fn is_limited(&self, key: &str, now: DateTime<Utc>) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        let floor = now.timestamp_millis() - self.window_ms();

        let recent: i64 = redis::cmd("ZCOUNT")
            .arg(format!("{KEY_PREFIX}{key}"))
            .arg(format!("({floor}"))
            .arg("+inf")
            .query_async(&mut conn)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(recent >= i64::from(self.policy.max_requests))
    }

    async fn sweep(&self, _now: DateTime<Utc>) -> ApplicationResult<usize> {
        Ok(0)
    }
}
