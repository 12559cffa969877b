use crate::domain::contact::entity::NewContactMessage;
use crate::domain::contact::value_objects::ContactMessageId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Persist the message. The store may not hand an id back.
    async fn insert(&self, message: NewContactMessage) -> DomainResult<Option<ContactMessageId>>;
}
