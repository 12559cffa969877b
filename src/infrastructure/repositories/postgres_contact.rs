use super::map_sqlx;
use crate::domain::contact::{ContactMessageId, ContactMessageRepository, NewContactMessage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<Option<ContactMessageId>> {
        let id: String = sqlx::query_scalar(
            "INSERT INTO contact_messages (name, email, subject, message, ip_address, user_agent, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id::text",
        )
        .bind(&message.name)
        .bind(message.email.as_str())
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.ip_address.as_str())
        .bind(&message.user_agent)
        .bind(message.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Some(ContactMessageId::new(id)))
    }
}
