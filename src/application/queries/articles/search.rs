use super::ArticleQueryService;
use crate::{application::dto::ArticleDto, domain::article::SearchTerm};

impl ArticleQueryService {
    /// Case-insensitive match on title, excerpt or content.
    ///
    /// Input shorter than two characters (trimmed) returns nothing without
    /// touching the store.
    pub async fn search(&self, query: &str) -> Vec<ArticleDto> {
        let Some(term) = SearchTerm::parse(query) else {
            return Vec::new();
        };

        let result = self.read_repo.search(&term).await;
        Self::fail_soft("search", result)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
