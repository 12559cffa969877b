use crate::application::ports::notifier::NotificationOutcome;
use crate::domain::contact::ClientIp;

/// Who sent a request, as far as the proxy headers tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: ClientIp,
    pub user_agent: String,
}

impl ClientInfo {
    pub fn new(ip: ClientIp, user_agent: impl Into<String>) -> Self {
        Self {
            ip,
            user_agent: user_agent.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub id: Option<String>,
    pub notification: NotificationOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionReceipt {
    pub already_subscribed: bool,
}
