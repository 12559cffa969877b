//! Debounced free-text search.
//!
//! Every keystroke schedules a request after a quiet period; a newer
//! keystroke makes older scheduled requests give up before they fire. Once a
//! request is on the wire it is never cancelled: its response is simply
//! dropped if a newer request was issued in the meantime.
use crate::application::{dto::ArticleDto, queries::articles::ArticleQueryService};
use crate::domain::article::SearchTerm;
use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, query: &str) -> Vec<ArticleDto>;
}

#[async_trait]
impl SearchSource for ArticleQueryService {
    async fn search(&self, query: &str) -> Vec<ArticleDto> {
        Self::search(self, query).await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<ArticleDto>,
    pub loading: bool,
    /// Sequence number of the request whose results are shown; 0 before any.
    pub sequence: u64,
}

pub struct DebouncedSearch {
    inner: Arc<Inner>,
}

struct Inner {
    source: Arc<dyn SearchSource>,
    delay: Duration,
    keystrokes: AtomicU64,
    issued: AtomicU64,
    view: watch::Sender<SearchView>,
}

impl DebouncedSearch {
    pub fn new(source: Arc<dyn SearchSource>) -> Self {
        Self::with_delay(source, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(source: Arc<dyn SearchSource>, delay: Duration) -> Self {
        let (view, _) = watch::channel(SearchView::default());
        Self {
            inner: Arc::new(Inner {
                source,
                delay,
                keystrokes: AtomicU64::new(0),
                issued: AtomicU64::new(0),
                view,
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.inner.view.subscribe()
    }

    pub fn current(&self) -> SearchView {
        self.inner.view.borrow().clone()
    }

    /// Number of requests that actually fired.
    pub fn issued(&self) -> u64 {
        self.inner.issued.load(Ordering::SeqCst)
    }

    /// Register the new content of the search box. Must be called from
    /// within a Tokio runtime.
    pub fn input(&self, query: impl Into<String>) -> JoinHandle<()> {
        let query = query.into();
        let keystroke = self.inner.keystrokes.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.view.send_modify(|view| view.query.clone_from(&query));

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.fire_after_quiet_period(keystroke, query).await })
    }
}

impl Inner {
    async fn fire_after_quiet_period(&self, keystroke: u64, query: String) {
        tokio::time::sleep(self.delay).await;
        if self.keystrokes.load(Ordering::SeqCst) != keystroke {
            return;
        }

        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        if SearchTerm::parse(&query).is_none() {
            self.apply(sequence, Vec::new());
            return;
        }

        self.view.send_modify(|view| view.loading = true);
        let results = self.source.search(&query).await;
        self.apply(sequence, results);
    }

    fn apply(&self, sequence: u64, results: Vec<ArticleDto>) {
        let latest = self.issued.load(Ordering::SeqCst);
        if sequence != latest {
            tracing::debug!(sequence, latest, "discarding superseded search response");
            return;
        }
        self.view.send_modify(|view| {
            view.results = results;
            view.loading = false;
            view.sequence = sequence;
        });
    }
}
