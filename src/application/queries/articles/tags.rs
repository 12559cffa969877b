use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, TagCountDto},
        error::ApplicationResult,
    },
    domain::article::TagName,
};

impl ArticleQueryService {
    /// Articles carrying exactly `tag` (case-sensitive), newest first.
    pub async fn try_list_by_tag(&self, tag: &str) -> ApplicationResult<Vec<ArticleDto>> {
        let tag = TagName::new(tag)?;
        let articles = self.read_repo.list_by_tag(&tag).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_tag(&self, tag: &str) -> Vec<ArticleDto> {
        let Ok(tag) = TagName::new(tag) else {
            return Vec::new();
        };
        let result = self.read_repo.list_by_tag(&tag).await;
        Self::fail_soft("list_by_tag", result)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Distinct tags with the number of articles using each.
    pub async fn try_tag_counts(&self) -> ApplicationResult<Vec<TagCountDto>> {
        let counts = self.read_repo.tag_counts().await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }

    pub async fn tag_counts(&self) -> Vec<TagCountDto> {
        let result = self.read_repo.tag_counts().await;
        Self::fail_soft("tag_counts", result)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
