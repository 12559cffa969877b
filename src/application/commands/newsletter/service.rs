use std::sync::Arc;

use crate::{
    application::{
        dto::SubscriptionReceipt,
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::newsletter::{
        NewSubscription, NewsletterEmail, NewsletterRepository, SubscriptionOutcome,
    },
};

pub struct NewsletterCommandService {
    repo: Arc<dyn NewsletterRepository>,
    clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(repo: Arc<dyn NewsletterRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn subscribe(&self, email: &str) -> ApplicationResult<SubscriptionReceipt> {
        let email = NewsletterEmail::parse(email)?;
        let subscription = NewSubscription {
            email,
            subscribed_at: self.clock.now(),
        };

        let outcome = self
            .repo
            .subscribe(subscription)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to store newsletter subscription"))?;

        Ok(SubscriptionReceipt {
            already_subscribed: outcome == SubscriptionOutcome::AlreadySubscribed,
        })
    }
}
