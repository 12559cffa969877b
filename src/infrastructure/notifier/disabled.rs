use crate::application::ports::notifier::{ContactNotification, ContactNotifier, NotificationOutcome};
use async_trait::async_trait;

/// Used when EmailJS is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl ContactNotifier for DisabledNotifier {
    async fn notify(&self, _notification: &ContactNotification) -> NotificationOutcome {
        NotificationOutcome::Skipped
    }
}
