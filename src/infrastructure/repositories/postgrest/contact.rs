use super::client::PostgrestClient;
use crate::domain::contact::{ContactMessageId, ContactMessageRepository, NewContactMessage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct PostgrestContactMessageRepository {
    client: PostgrestClient,
}

impl PostgrestContactMessageRepository {
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct ContactRow<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    ip_address: &'a str,
    user_agent: &'a str,
    status: &'a str,
}

#[derive(Deserialize)]
struct InsertedId {
    id: serde_json::Value,
}

#[async_trait]
impl ContactMessageRepository for PostgrestContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<Option<ContactMessageId>> {
        let row = ContactRow {
            name: &message.name,
            email: message.email.as_str(),
            subject: &message.subject,
            message: &message.message,
            ip_address: message.ip_address.as_str(),
            user_agent: &message.user_agent,
            status: message.status.as_str(),
        };

        let inserted: Vec<InsertedId> = self
            .client
            .insert_returning("contact_messages", &row, "id")
            .await?;

        Ok(inserted.into_iter().next().map(|row| {
            ContactMessageId::new(match row.id {
                serde_json::Value::String(id) => id,
                other => other.to_string(),
            })
        }))
    }
}
