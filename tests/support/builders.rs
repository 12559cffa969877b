// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use lilabs_blog::domain::article::{Article, StoredPost};

pub struct PostBuilder {
    id: String,
    title: String,
    slug: String,
    created_at: DateTime<Utc>,
    summary: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
    author: Option<String>,
}

impl PostBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            id: format!("id-{slug}"),
            title: format!("Post {slug}"),
            slug: slug.into(),
            created_at: day(1),
            summary: Some(format!("Summary of {slug}")),
            content: Some("Some body text".into()),
            tags: Some(vec!["Tech".into()]),
            author: Some("Lilabs Team".into()),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| (*t).to_string()).collect());
        self
    }

    pub fn null_tags(mut self) -> Self {
        self.tags = None;
        self
    }

    pub fn on_day(mut self, day_of_march: u32) -> Self {
        self.created_at = day(day_of_march);
        self
    }

    pub fn build(self) -> StoredPost {
        StoredPost {
            id: self.id,
            title: self.title,
            slug: self.slug,
            created_at: self.created_at,
            summary: self.summary,
            content: self.content,
            tags: self.tags,
            cover_image: None,
            author: self.author,
        }
    }

    pub fn article(self) -> Article {
        Article::from_stored(self.build()).expect("valid stored post")
    }
}

/// 2025-03-`d` at noon UTC.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, d, 12, 0, 0).unwrap()
}

/// Five posts, newest first: a NULL-tag row and an empty-tag row included.
pub fn sample_posts() -> Vec<StoredPost> {
    vec![
        PostBuilder::new("async-rust")
            .title("Async Rust in practice")
            .summary("Futures, executors and pinning")
            .content("The tokio runtime drives every future to completion.")
            .tags(&["Rust", "Tech"])
            .on_day(5)
            .build(),
        PostBuilder::new("ai-ethics")
            .title("The ethics of AI")
            .summary("Who is accountable?")
            .content("Models inherit the biases of their training data.")
            .tags(&["AI", "Ethics"])
            .on_day(4)
            .build(),
        PostBuilder::new("fintech-trends")
            .title("Fintech trends")
            .summary("Payments keep moving")
            .content("Open banking and AI scoring reshape lending.")
            .tags(&["Finance", "AI"])
            .on_day(3)
            .build(),
        PostBuilder::new("untagged-legacy")
            .title("A post from before tags")
            .null_tags()
            .on_day(2)
            .build(),
        PostBuilder::new("empty-tags")
            .title("Deliberately untagged")
            .tags(&[])
            .on_day(1)
            .build(),
    ]
}

/// `n` tagged posts on consecutive days, newest first.
pub fn numbered_posts(n: u32) -> Vec<StoredPost> {
    (0..n)
        .map(|i| {
            let mut post = PostBuilder::new(&format!("post-{i:02}")).build();
            post.created_at = day(1) + chrono::Duration::days(i64::from(n - i));
            post
        })
        .collect()
}
