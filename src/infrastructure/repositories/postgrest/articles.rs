use super::client::{PostgrestClient, quote};
use crate::infrastructure::repositories::normalise_rows;
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleSlug, PageWindow, SearchTerm, StoredPost, TagCount,
    TagName, tally_tags,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

const POSTS: &str = "posts";
const NEWEST_FIRST: &str = "created_at.desc";

#[derive(Clone)]
pub struct PostgrestArticleRepository {
    client: PostgrestClient,
}

impl PostgrestArticleRepository {
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, mut query: Vec<(&str, String)>) -> DomainResult<Vec<Article>> {
        query.push(("select", "*".into()));
        query.push(("order", NEWEST_FIRST.into()));
        let records: Vec<PostRecord> = self.client.select(POSTS, &query).await?;
        Ok(normalise_rows(records))
    }
}

#[derive(Debug, Deserialize)]
struct PostRecord {
    id: serde_json::Value,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    summary: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
    cover_image: Option<String>,
    author: Option<String>,
}

impl From<PostRecord> for StoredPost {
    fn from(record: PostRecord) -> Self {
        let id = match record.id {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        };
        Self {
            id,
            title: record.title,
            slug: record.slug,
            created_at: record.created_at,
            summary: record.summary,
            content: record.content,
            tags: record.tags,
            cover_image: record.cover_image,
            author: record.author,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TagsRecord {
    tags: Option<Vec<String>>,
}

/// `or=(title.ilike."*term*",summary.ilike...,content.ilike...)`
fn search_filter(term: &SearchTerm) -> String {
    let mut literal = String::new();
    for ch in term.as_str().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            literal.push('\\');
        }
        literal.push(ch);
    }
    let pattern = quote(&format!("*{literal}*"));
    format!("(title.ilike.{pattern},summary.ilike.{pattern},content.ilike.{pattern})")
}

/// `cs.{"tag"}`: array contains the tag.
fn contains_tag(tag: &TagName) -> String {
    format!("cs.{{{}}}", quote(tag.as_str()))
}

#[async_trait]
impl ArticleReadRepository for PostgrestArticleRepository {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let query = limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        self.fetch(query).await
    }

    async fn list_page(&self, window: PageWindow) -> DomainResult<Vec<Article>> {
        self.fetch(vec![
            ("limit", window.limit.to_string()),
            ("offset", window.offset.to_string()),
        ])
        .await
    }

    async fn count(&self) -> DomainResult<u64> {
        self.client.count(POSTS).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut articles = self
            .fetch(vec![
                ("slug", format!("eq.{}", slug.as_str())),
                ("limit", "1".into()),
            ])
            .await?;
        Ok(articles.pop())
    }

    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<Article>> {
        self.fetch(vec![("or", search_filter(term))]).await
    }

    async fn list_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        self.fetch(vec![("tags", contains_tag(tag))]).await
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let records: Vec<TagsRecord> = self
            .client
            .select(POSTS, &[("select", "tags".into())])
            .await?;
        Ok(tally_tags(records.into_iter().filter_map(|record| record.tags)))
    }
}
