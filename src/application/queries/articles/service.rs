use crate::domain::{article::ArticleReadRepository, errors::DomainError};
use std::sync::Arc;

/// Read side of the site. Store failures never escape: they are logged and
/// turned into empty results, except where a `try_` variant says otherwise.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    pub(super) fn fail_soft<T>(operation: &'static str, result: Result<T, DomainError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Unconfigured(reason)) => {
                tracing::warn!(operation, %reason, "article store not configured, returning empty result");
                None
            }
            Err(err) => {
                tracing::error!(operation, error = %err, "article store query failed");
                None
            }
        }
    }
}
