use crate::domain::article::{Article, TagCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Article in the shape the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub date: DateTime<Utc>,
    pub excerpt: String,
    /// Formatted markup, rendered as rich text by the client.
    pub content: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub author: String,
    /// Estimated minutes to read `content`.
    pub reading_time: u32,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let reading_time = article.reading_time_minutes();
        Self {
            id: article.id.into_inner(),
            title: article.title,
            slug: article.slug.into_inner(),
            date: article.date,
            excerpt: article.excerpt,
            content: article.content,
            tags: article.tags,
            cover_image: article.cover_image,
            author: article.author,
            reading_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TagCountDto {
    pub tag: String,
    pub count: u64,
}

impl From<TagCount> for TagCountDto {
    fn from(value: TagCount) -> Self {
        Self {
            tag: value.tag,
            count: value.count,
        }
    }
}
