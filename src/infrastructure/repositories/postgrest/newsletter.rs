use super::client::PostgrestClient;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{NewSubscription, NewsletterRepository, SubscriptionOutcome};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone)]
pub struct PostgrestNewsletterRepository {
    client: PostgrestClient,
}

impl PostgrestNewsletterRepository {
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct SubscriberRow<'a> {
    email: &'a str,
    subscribed_at: DateTime<Utc>,
}

#[async_trait]
impl NewsletterRepository for PostgrestNewsletterRepository {
    async fn subscribe(&self, subscription: NewSubscription) -> DomainResult<SubscriptionOutcome> {
        let row = SubscriberRow {
            email: subscription.email.as_str(),
            subscribed_at: subscription.subscribed_at,
        };
        match self.client.insert("newsletter_subscribers", &row).await {
            Ok(()) => Ok(SubscriptionOutcome::Created),
            Err(DomainError::Conflict(_)) => Ok(SubscriptionOutcome::AlreadySubscribed),
            Err(err) => Err(err),
        }
    }
}
