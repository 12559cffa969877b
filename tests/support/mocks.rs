// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use lilabs_blog::application::ApplicationResult;
use lilabs_blog::application::error::ApplicationError;
use lilabs_blog::application::ports::notifier::{ContactNotification, NotificationOutcome};
use lilabs_blog::application::ports::rate_limit::{RateLimitDecision, RateLimitPolicy};
use lilabs_blog::domain::article::{
    Article, ArticleSlug, PageWindow, SearchTerm, StoredPost, TagCount, TagName, tally_tags,
};
use lilabs_blog::domain::contact::{ContactMessageId, NewContactMessage};
use lilabs_blog::domain::errors::{DomainError, DomainResult, StoreError};
use lilabs_blog::domain::newsletter::{NewSubscription, SubscriptionOutcome};
use lilabs_blog::infrastructure::repositories::normalise_rows;

/// `posts` テーブルをメモリ上で再現するリポジトリ。呼び出し回数を記録する
pub struct InMemoryPostRepo {
    rows: Vec<StoredPost>,
    calls: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn new(mut rows: Vec<StoredPost>) -> Self {
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            rows,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn articles(&self) -> DomainResult<Vec<Article>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(normalise_rows(self.rows.iter().cloned()))
    }
}

#[async_trait::async_trait]
impl lilabs_blog::domain::article::ArticleReadRepository for InMemoryPostRepo {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<Article>> {
        let mut articles = self.articles()?;
        if let Some(limit) = limit {
            articles.truncate(limit as usize);
        }
        Ok(articles)
    }

    async fn list_page(&self, window: PageWindow) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles()?
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.articles()?.len() as u64)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.articles()?.into_iter().find(|a| a.slug == *slug))
    }

    async fn search(&self, term: &SearchTerm) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles()?
            .into_iter()
            .filter(|a| a.matches_search(term))
            .collect())
    }

    async fn list_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Article>> {
        // Like `$1 = ANY(tags)`, NULL-tag rows never match.
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(normalise_rows(
            self.rows
                .iter()
                .filter(|row| {
                    row.tags
                        .as_ref()
                        .is_some_and(|tags| tags.iter().any(|t| t == tag.as_str()))
                })
                .cloned(),
        ))
    }

    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(tally_tags(self.rows.iter().filter_map(|row| row.tags.clone())))
    }
}

/// どの操作でも同じストアエラーを返すリポジトリ
pub struct FailingPostRepo {
    pub error: StoreError,
}

impl FailingPostRepo {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }

    fn fail<T>(&self) -> DomainResult<T> {
        Err(DomainError::Store(self.error.clone()))
    }
}

#[async_trait::async_trait]
impl lilabs_blog::domain::article::ArticleReadRepository for FailingPostRepo {
    async fn list_recent(&self, _limit: Option<u32>) -> DomainResult<Vec<Article>> {
        self.fail()
    }
    async fn list_page(&self, _window: PageWindow) -> DomainResult<Vec<Article>> {
        self.fail()
    }
    async fn count(&self) -> DomainResult<u64> {
        self.fail()
    }
    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.fail()
    }
    async fn search(&self, _term: &SearchTerm) -> DomainResult<Vec<Article>> {
        self.fail()
    }
    async fn list_by_tag(&self, _tag: &TagName) -> DomainResult<Vec<Article>> {
        self.fail()
    }
    async fn tag_counts(&self) -> DomainResult<Vec<TagCount>> {
        self.fail()
    }
}

/// 挿入されたお問い合わせを記録する。`failing` を使うと常にエラーを返す
#[derive(Default)]
pub struct RecordingContactRepo {
    pub inserted: Mutex<Vec<NewContactMessage>>,
    fail_with: Option<StoreError>,
}

impl RecordingContactRepo {
    pub fn failing(error: StoreError) -> Self {
        Self {
            inserted: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    pub fn count(&self) -> usize {
        self.inserted.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl lilabs_blog::domain::contact::ContactMessageRepository for RecordingContactRepo {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<Option<ContactMessageId>> {
        if let Some(err) = &self.fail_with {
            return Err(DomainError::Store(err.clone()));
        }
        let mut inserted = self.inserted.lock().unwrap();
        inserted.push(message);
        Ok(Some(ContactMessageId::new(format!("msg-{}", inserted.len()))))
    }
}

/// メールアドレスの一意制約を再現する購読リポジトリ
#[derive(Default)]
pub struct RecordingNewsletterRepo {
    emails: Mutex<HashSet<String>>,
    pub calls: AtomicUsize,
}

impl RecordingNewsletterRepo {
    pub fn contains(&self, email: &str) -> bool {
        self.emails.lock().unwrap().contains(email)
    }
}

#[async_trait::async_trait]
impl lilabs_blog::domain::newsletter::NewsletterRepository for RecordingNewsletterRepo {
    async fn subscribe(&self, subscription: NewSubscription) -> DomainResult<SubscriptionOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let inserted = self
            .emails
            .lock()
            .unwrap()
            .insert(subscription.email.as_str().to_string());
        Ok(if inserted {
            SubscriptionOutcome::Created
        } else {
            SubscriptionOutcome::AlreadySubscribed
        })
    }
}

/// 通知内容を記録し、指定された結果を返す通知器
pub struct CapturingNotifier {
    pub sent: Mutex<Vec<ContactNotification>>,
    outcome: NotificationOutcome,
}

impl CapturingNotifier {
    pub fn new(outcome: NotificationOutcome) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcome,
        }
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for CapturingNotifier {
    fn default() -> Self {
        Self::new(NotificationOutcome::Sent)
    }
}

#[async_trait::async_trait]
impl lilabs_blog::application::ports::notifier::ContactNotifier for CapturingNotifier {
    async fn notify(&self, notification: &ContactNotification) -> NotificationOutcome {
        self.sent.lock().unwrap().push(notification.clone());
        self.outcome.clone()
    }
}

/// テストから進められる時計
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl lilabs_blog::application::ports::time::Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// 常にエラーを返すレートリミッタ(フェイルオープンの確認用)
#[derive(Default)]
pub struct BrokenRateLimiter {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl lilabs_blog::application::ports::rate_limit::RateLimitStore for BrokenRateLimiter {
    fn policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::default()
    }

    async fn record(&self, _key: &str, _now: DateTime<Utc>) -> ApplicationResult<RateLimitDecision> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ApplicationError::Infrastructure("redis connection refused".into()))
    }

    async fn is_limited(&self, _key: &str, _now: DateTime<Utc>) -> ApplicationResult<bool> {
        Err(ApplicationError::Infrastructure("redis connection refused".into()))
    }

    async fn sweep(&self, _now: DateTime<Utc>) -> ApplicationResult<usize> {
        Ok(0)
    }
}
