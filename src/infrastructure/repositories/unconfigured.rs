use crate::domain::article::{
    Article, ArticleReadRepository, ArticleSlug, PageWindow, SearchTerm, TagCount, TagName,
};
use crate::domain::contact::{ContactMessageId, ContactMessageRepository, NewContactMessage};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{NewSubscription, NewsletterRepository, SubscriptionOutcome};
use async_trait::async_trait;

const REASON: &str = "set DATABASE_URL or SUPABASE_URL and SUPABASE_ANON_KEY";

/// Stand-in used when no store credentials are present. Every call fails
/// with [`DomainError::Unconfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredStore;

fn unconfigured<T>() -> DomainResult<T> {
    Err(DomainError::Unconfigured(REASON.into()))
}

#[async_trait]
impl ArticleReadRepository for UnconfiguredStore {
    async fn list_recent(&self, _limit: Option<u32>) -> DomainResult<Vec<Article>> {
        unconfigured()
    }

    async fn list_page(&self, _window: PageWindow) -> DomainResult<Vec<Article>> {
        unconfigured()
    }

    async fn count(&self) -> DomainResult<u64> {
        unconfigured()
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        unconfigured()
    }

    async fn search(&self, _term: &SearchTerm) -> DomainResult<Vec<Article>> {
        unconfigured()
    }

    async fn list_by_tag(&self, _tag: &TagName) -> DomainResult<Vec<Article>> {
        unconfigured()
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        unconfigured()
    }
}

#[async_trait]
impl ContactMessageRepository for UnconfiguredStore {
    async fn insert(&self, _message: NewContactMessage) -> DomainResult<Option<ContactMessageId>> {
        unconfigured()
    }
}

#[async_trait]
impl NewsletterRepository for UnconfiguredStore {
    async fn subscribe(&self, _subscription: NewSubscription) -> DomainResult<SubscriptionOutcome> {
        unconfigured()
    }
}
