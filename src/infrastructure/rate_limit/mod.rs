mod memory;
mod redis_store;

pub use memory::InMemoryRateLimitStore;
pub use redis_store::RedisRateLimitStore;

use crate::application::ports::rate_limit::RateLimitStore;
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;

/// Periodically evict idle keys so the table does not grow without bound.
pub fn spawn_sweeper(store: Arc<dyn RateLimitStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.sweep(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(evicted) => tracing::debug!(evicted, "rate-limit sweep"),
                Err(err) => tracing::warn!(error = %err, "rate-limit sweep failed"),
            }
        }
    })
}
