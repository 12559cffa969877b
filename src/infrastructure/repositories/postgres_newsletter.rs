use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::newsletter::{NewSubscription, NewsletterRepository, SubscriptionOutcome};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn subscribe(&self, subscription: NewSubscription) -> DomainResult<SubscriptionOutcome> {
        let result = sqlx::query(
            "INSERT INTO newsletter_subscribers (email, subscribed_at) VALUES ($1, $2)",
        )
        .bind(subscription.email.as_str())
        .bind(subscription.subscribed_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(SubscriptionOutcome::Created),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(SubscriptionOutcome::AlreadySubscribed)
            }
            Err(err) => Err(map_sqlx(err)),
        }
    }
}
