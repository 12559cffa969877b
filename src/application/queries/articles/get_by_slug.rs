use super::ArticleQueryService;
use crate::domain::{
    article::{ArticleLookup, ArticleSlug},
    errors::{DomainError, StoreError, StoreErrorKind},
};

impl ArticleQueryService {
    pub async fn get_by_slug(&self, slug: &str) -> ArticleLookup {
        let Ok(slug) = ArticleSlug::new(slug) else {
            return ArticleLookup::NotFound;
        };

        match self.read_repo.find_by_slug(&slug).await {
            Ok(Some(article)) => ArticleLookup::Found(Box::new(article)),
            Ok(None) | Err(DomainError::NotFound(_)) => ArticleLookup::NotFound,
            Err(DomainError::Store(err)) => {
                tracing::error!(slug = %slug, error = %err, "article lookup failed");
                ArticleLookup::BackendError(err)
            }
            Err(DomainError::Unconfigured(reason)) => {
                tracing::warn!(slug = %slug, %reason, "article store not configured");
                ArticleLookup::BackendError(
                    StoreError::new(StoreErrorKind::Unavailable, reason).with_code("store_unconfigured"),
                )
            }
            Err(other) => {
                tracing::error!(slug = %slug, error = %other, "article lookup returned an unusable row");
                ArticleLookup::BackendError(StoreError::new(StoreErrorKind::Other, other.to_string()))
            }
        }
    }
}
