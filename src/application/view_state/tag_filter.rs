use crate::application::{dto::ArticleDto, queries::articles::ArticleQueryService};
use async_trait::async_trait;

#[async_trait]
pub trait TagSource: Send + Sync {
    async fn articles_with_tag(&self, tag: &str) -> Vec<ArticleDto>;
}

#[async_trait]
impl TagSource for ArticleQueryService {
    async fn articles_with_tag(&self, tag: &str) -> Vec<ArticleDto> {
        self.list_by_tag(tag).await
    }
}

/// Single-select tag filter over an initially loaded list.
#[derive(Debug, Clone)]
pub struct TagFilter {
    initial: Vec<ArticleDto>,
    selected: Option<String>,
    displayed: Vec<ArticleDto>,
}

impl TagFilter {
    pub fn new(initial: Vec<ArticleDto>) -> Self {
        Self {
            displayed: initial.clone(),
            initial,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn displayed(&self) -> &[ArticleDto] {
        &self.displayed
    }

    /// `Some(tag)` replaces the list with that tag's articles; `None` goes
    /// back to the initial list without fetching.
    pub async fn select(&mut self, tag: Option<String>, source: &dyn TagSource) {
        match tag {
            None => {
                self.selected = None;
                self.displayed.clone_from(&self.initial);
            }
            Some(tag) => {
                self.displayed = source.articles_with_tag(&tag).await;
                self.selected = Some(tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn article(slug: &str, tags: &[&str]) -> ArticleDto {
        ArticleDto {
            id: slug.into(),
            title: slug.into(),
            slug: slug.into(),
            date: Utc::now(),
            excerpt: String::new(),
            content: String::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            cover_image: None,
            author: "Lilabs Team".into(),
            reading_time: 1,
        }
    }

    struct CountingSource {
        articles: Vec<ArticleDto>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TagSource for CountingSource {
        async fn articles_with_tag(&self, tag: &str) -> Vec<ArticleDto> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.articles
                .iter()
                .filter(|a| a.tags.iter().any(|t| t == tag))
                .cloned()
                .collect()
        }
    }

    #[tokio::test]
    async fn selecting_a_tag_replaces_the_list() {
        let all = vec![article("a", &["AI"]), article("b", &["Finance"])];
        let source = CountingSource {
            articles: all.clone(),
            calls: AtomicUsize::new(0),
        };
        let mut filter = TagFilter::new(all);

        filter.select(Some("AI".into()), &source).await;
        assert_eq!(filter.selected(), Some("AI"));
        assert_eq!(filter.displayed().len(), 1);
        assert_eq!(filter.displayed()[0].slug, "a");

        filter.select(Some("Finance".into()), &source).await;
        assert_eq!(filter.selected(), Some("Finance"));
        assert_eq!(filter.displayed()[0].slug, "b");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn clearing_restores_initial_set_without_fetching() {
        let all = vec![article("a", &["AI"]), article("b", &["Finance"])];
        let source = CountingSource {
            articles: all.clone(),
            calls: AtomicUsize::new(0),
        };
        let mut filter = TagFilter::new(all.clone());

        filter.select(Some("AI".into()), &source).await;
        filter.select(None, &source).await;

        assert_eq!(filter.selected(), None);
        assert_eq!(filter.displayed(), all.as_slice());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
