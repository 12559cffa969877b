use crate::domain::article::entity::Article;
use crate::domain::article::tags::TagCount;
use crate::domain::article::value_objects::{ArticleSlug, PageWindow, SearchTerm, TagName};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read access to the `posts` table. Every listing is ordered newest first.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<Article>>;
    async fn list_page(&self, window: PageWindow) -> DomainResult<Vec<Article>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<Article>>;
    async fn list_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>>;
    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>>;
}
