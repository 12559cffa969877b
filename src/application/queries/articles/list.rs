use super::ArticleQueryService;
use crate::{
    application::dto::{ArticleDto, PaginatedArticles, page_labels},
    domain::article::PageRequest,
};

impl ArticleQueryService {
    /// Newest first, optionally capped at `limit`.
    pub async fn list_recent(&self, limit: Option<u32>) -> Vec<ArticleDto> {
        let result = self.read_repo.list_recent(limit).await;
        Self::fail_soft("list_recent", result)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub async fn list_page(&self, request: PageRequest) -> Vec<ArticleDto> {
        let result = self.read_repo.list_page(request.window()).await;
        Self::fail_soft("list_page", result)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub async fn count_all(&self) -> u64 {
        let result = self.read_repo.count().await;
        Self::fail_soft("count_all", result).unwrap_or(0)
    }

    /// One page of articles plus what the pagination bar needs.
    pub async fn paginate(&self, request: PageRequest) -> PaginatedArticles {
        let (articles, total_count) = tokio::join!(self.list_page(request), self.count_all());
        let total_pages = request.total_pages(total_count);
        let page = request.page();

        PaginatedArticles {
            articles,
            page,
            page_size: request.page_size(),
            total_count,
            total_pages,
            pages: page_labels(total_pages, page),
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
