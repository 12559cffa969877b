use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewSubscription, SubscriptionOutcome};
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// A duplicate address yields `AlreadySubscribed` rather than an error.
    async fn subscribe(&self, subscription: NewSubscription) -> DomainResult<SubscriptionOutcome>;
}
