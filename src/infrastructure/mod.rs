pub mod database;
pub mod notifier;
pub mod rate_limit;
pub mod repositories;
pub mod time;
