// src/infrastructure/repositories/postgres_article.rs
use super::{escape_like, map_sqlx, normalise_rows};
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleSlug, PageWindow, SearchTerm, StoredPost, TagCount,
    TagName, tags::sort_tag_counts,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str =
    "SELECT id::text AS id, title, slug, created_at, summary, content, tags, cover_image, author FROM posts";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<Vec<Article>> {
        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(normalise_rows(rows))
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: String,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    summary: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
    cover_image: Option<String>,
    author: Option<String>,
}

impl From<PostRow> for StoredPost {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            created_at: row.created_at,
            summary: row.summary,
            content: row.content,
            tags: row.tags,
            cover_image: row.cover_image,
            author: row.author,
        }
    }
}

#[derive(Debug, FromRow)]
struct TagCountRow {
    tag: String,
    count: i64,
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let mut builder = QueryBuilder::new(POST_COLUMNS);
        builder.push(" ORDER BY created_at DESC");
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        self.fetch_all(builder).await
    }

    async fn list_page(&self, window: PageWindow) -> DomainResult<Vec<Article>> {
        let offset = i64::try_from(window.offset).unwrap_or(i64::MAX);
        let mut builder = QueryBuilder::new(POST_COLUMNS);
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(i64::from(window.limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset);
        self.fetch_all(builder).await
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut builder = QueryBuilder::new(POST_COLUMNS);
        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str());
        builder.push(" LIMIT 1");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(|row| Article::from_stored(row.into())).transpose()
    }

    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<Article>> {
        let pattern = format!("%{}%", escape_like(term.as_str()));
        let mut builder = QueryBuilder::new(POST_COLUMNS);
        builder.push(" WHERE title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR summary ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR content ILIKE ");
        builder.push_bind(pattern);
        builder.push(" ORDER BY created_at DESC");
        self.fetch_all(builder).await
    }

    async fn list_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        let mut builder = QueryBuilder::new(POST_COLUMNS);
        builder.push(" WHERE ");
        builder.push_bind(tag.as_str());
        builder.push(" = ANY(tags) ORDER BY created_at DESC");
        self.fetch_all(builder).await
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        let rows = sqlx::query_as::<_, TagCountRow>(
            "SELECT tag, COUNT(*) AS count FROM posts, unnest(tags) AS tag GROUP BY tag",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut counts: Vec<TagCount> = rows
            .into_iter()
            .map(|row| TagCount {
                tag: row.tag,
                count: u64::try_from(row.count).unwrap_or(0),
            })
            .collect();
        sort_tag_counts(&mut counts);
        Ok(counts)
    }
}
