use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Identifier assigned by the store. Opaque to this service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimum number of characters (after trimming) a search needs.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Free-text search input that is long enough to be sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for input shorter than [`MIN_SEARCH_CHARS`] once trimmed.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_SEARCH_CHARS {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment, matching what the store's `ILIKE` does.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Tag used for filtering. Compared by exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

/// Zero-indexed window over the date-descending ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u32,
}

impl PageWindow {
    /// Inclusive index of the last row in the window.
    pub const fn last_index(&self) -> u64 {
        self.offset + self.limit as u64 - 1
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page starts at 1".into()));
        }
        if page_size == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self { page, page_size })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: u64::from(self.page - 1) * u64::from(self.page_size),
            limit: self.page_size,
        }
    }

    /// `ceil(total / page_size)`.
    pub fn total_pages(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
