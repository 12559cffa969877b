// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, SearchTerm};
use crate::domain::errors::{DomainResult, StoreError};
use chrono::{DateTime, Utc};

pub const DEFAULT_TAGS: [&str; 2] = ["Tech", "Innovation"];
pub const DEFAULT_AUTHOR: &str = "Lilabs Team";
const WORDS_PER_MINUTE: usize = 200;

/// Row of the `posts` table as the store hands it back.
#[derive(Debug, Clone)]
pub struct StoredPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub author: String,
}

impl Article {
    /// Normalise a stored row into the display shape.
    ///
    /// `NULL` tags fall back to [`DEFAULT_TAGS`] while an empty array is kept;
    /// a missing or blank author falls back to [`DEFAULT_AUTHOR`].
    pub fn from_stored(row: StoredPost) -> DomainResult<Self> {
        let tags = row
            .tags
            .unwrap_or_else(|| DEFAULT_TAGS.iter().map(|tag| (*tag).to_string()).collect());
        let author = row
            .author
            .filter(|author| !author.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        Ok(Self {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: row.title,
            excerpt: row.summary.unwrap_or_default(),
            content: row.content.unwrap_or_default(),
            date: row.created_at,
            tags,
            cover_image: row.cover_image.filter(|url| !url.trim().is_empty()),
            author,
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Title, excerpt or content contains the term, ignoring case.
    pub fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches(&self.title) || term.matches(&self.excerpt) || term.matches(&self.content)
    }

    pub fn reading_time_minutes(&self) -> u32 {
        reading_time_minutes(&self.content)
    }
}

/// Estimated reading time at 200 words per minute, rounded up.
pub fn reading_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Outcome of a single-article lookup by slug.
///
/// Keeps "no such slug" apart from "the store failed" so callers can answer
/// 404 for the former only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleLookup {
    Found(Box<Article>),
    NotFound,
    BackendError(StoreError),
}
