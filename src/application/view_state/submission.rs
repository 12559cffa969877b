//! Status of a form submission as the visitor sees it.
use std::fmt::Display;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle};

/// How long a success or error status stays visible.
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Tracks Idle -> Loading -> Success | Error, reverting to Idle after
/// [`STATUS_RESET_AFTER`] unless a newer submission started in between.
#[derive(Clone)]
pub struct SubmissionTracker {
    inner: Arc<TrackerInner>,
}

struct TrackerInner {
    status: watch::Sender<SubmissionStatus>,
    generation: AtomicU64,
    reset_after: Duration,
}

impl Default for SubmissionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::with_reset_after(STATUS_RESET_AFTER)
    }

    pub fn with_reset_after(reset_after: Duration) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            inner: Arc::new(TrackerInner {
                status,
                generation: AtomicU64::new(0),
                reset_after,
            }),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.inner.status.subscribe()
    }

    /// Run `submit`, reflecting its progress and outcome in the status.
    pub async fn run<F, T, E>(&self, submit: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let generation = self.begin();
        let result = submit.await;
        let status = match &result {
            Ok(_) => SubmissionStatus::Success,
            Err(err) => SubmissionStatus::Error(err.to_string()),
        };
        self.settle(generation, status);
        result
    }

    /// Show an error without going through Loading, e.g. when local
    /// validation fails before anything is sent.
    pub fn reject(&self, message: impl Into<String>) -> JoinHandle<()> {
        let generation = self.begin();
        self.settle(generation, SubmissionStatus::Error(message.into()))
    }

    fn begin(&self) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.status.send_replace(SubmissionStatus::Loading);
        generation
    }

    fn settle(&self, generation: u64, status: SubmissionStatus) -> JoinHandle<()> {
        self.inner.status.send_replace(status);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.reset_after).await;
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner.status.send_replace(SubmissionStatus::Idle);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn success_reverts_to_idle_after_five_seconds() {
        let tracker = SubmissionTracker::new();

        let result: Result<(), String> = tracker.run(async { Ok(()) }).await;
        assert!(result.is_ok());
        assert_eq!(tracker.status(), SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(tracker.status(), SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(tracker.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn error_carries_the_message() {
        let tracker = SubmissionTracker::new();
        let _ = tracker
            .run(async { Err::<(), _>("invalid email format") })
            .await;
        assert_eq!(
            tracker.status(),
            SubmissionStatus::Error("invalid email format".into())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn loading_is_visible_while_submitting() {
        let tracker = SubmissionTracker::new();
        let observer = tracker.clone();

        let task = tokio::spawn(async move {
            tracker
                .run(async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok::<_, String>(())
                })
                .await
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(observer.status().is_loading());
        task.await.unwrap().unwrap();
        assert_eq!(observer.status(), SubmissionStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_reset_does_not_clobber_newer_submission() {
        let tracker = SubmissionTracker::new();
        tracker.reject("please enter a valid email address");

        tokio::time::sleep(Duration::from_secs(3)).await;
        let _: Result<(), String> = tracker.run(async { Ok(()) }).await;

        // First reset fires at t=5s and must leave the new Success alone.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(tracker.status(), SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(tracker.status(), SubmissionStatus::Idle);
    }
}
