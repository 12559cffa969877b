// src/application/ports/mod.rs
pub mod notifier;
pub mod rate_limit;
pub mod time;

pub type ClockPort = dyn time::Clock;
pub type ContactNotifierPort = dyn notifier::ContactNotifier;
pub type RateLimitStorePort = dyn rate_limit::RateLimitStore;
