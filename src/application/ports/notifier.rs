// src/application/ports/notifier.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent,
    /// Notifications are not configured.
    Skipped,
    Failed(String),
}

/// Advisory e-mail notification for new contact messages. Never fails the caller.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, notification: &ContactNotification) -> NotificationOutcome;
}
