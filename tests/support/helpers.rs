// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;

use lilabs_blog::application::ports::notifier::ContactNotifier;
use lilabs_blog::application::ports::rate_limit::{RateLimitPolicy, RateLimitStore};
use lilabs_blog::application::services::ApplicationServices;
use lilabs_blog::domain::article::ArticleReadRepository;
use lilabs_blog::infrastructure::rate_limit::InMemoryRateLimitStore;
use lilabs_blog::presentation::http::routes::build_router_with_rate_limiter;
use lilabs_blog::presentation::http::state::{HttpState, SiteSettings};

use super::builders::{day, sample_posts};
use super::mocks::{
    CapturingNotifier, InMemoryPostRepo, ManualClock, RecordingContactRepo,
    RecordingNewsletterRepo,
};

/// Collaborators behind the router, kept so tests can inspect them afterwards.
pub struct TestDeps {
    pub posts: Arc<dyn ArticleReadRepository>,
    pub contacts: Arc<RecordingContactRepo>,
    pub newsletter: Arc<RecordingNewsletterRepo>,
    pub rate_limiter: Arc<dyn RateLimitStore>,
    pub notifier: Arc<CapturingNotifier>,
    pub clock: Arc<ManualClock>,
    pub site: SiteSettings,
}

impl Default for TestDeps {
    fn default() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepo::new(sample_posts())),
            contacts: Arc::new(RecordingContactRepo::default()),
            newsletter: Arc::new(RecordingNewsletterRepo::default()),
            rate_limiter: Arc::new(InMemoryRateLimitStore::new(RateLimitPolicy::default())),
            notifier: Arc::new(CapturingNotifier::default()),
            clock: Arc::new(ManualClock::new(day(10))),
            site: SiteSettings::default(),
        }
    }
}

impl TestDeps {
    pub fn with_posts(posts: Arc<dyn ArticleReadRepository>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn services(&self) -> ApplicationServices {
        self.services_with_notifier(self.notifier.clone())
    }

    /// Same collaborators, but notifications go to `notifier` instead of the capturing one.
    pub fn services_with_notifier(&self, notifier: Arc<dyn ContactNotifier>) -> ApplicationServices {
        ApplicationServices::new(
            Arc::clone(&self.posts),
            self.contacts.clone(),
            self.newsletter.clone(),
            Arc::clone(&self.rate_limiter),
            notifier,
            self.clock.clone(),
        )
    }

    pub fn state(&self) -> HttpState {
        self.state_for(self.services())
    }

    fn state_for(&self, services: ApplicationServices) -> HttpState {
        HttpState {
            services: Arc::new(services),
            site: Arc::new(self.site.clone()),
        }
    }

    pub fn router(&self) -> Router {
        build_router_with_rate_limiter(self.state(), false)
    }

    pub fn router_with_notifier(&self, notifier: Arc<dyn ContactNotifier>) -> Router {
        build_router_with_rate_limiter(self.state_for(self.services_with_notifier(notifier)), false)
    }
}

pub fn build_test_state() -> HttpState {
    TestDeps::default().state()
}

/// Router over the sample posts, without the per-peer burst limiter.
pub fn make_test_router() -> Router {
    TestDeps::default().router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_body(resp: Response) -> (axum::http::response::Parts, Vec<u8>) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    (parts, bytes.to_vec())
}

pub async fn read_json(resp: Response) -> Value {
    let (_, bytes) = read_body(resp).await;
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert an `ErrorResponse` JSON body with the expected status and `error`
/// string, handing the full body back for further checks.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, bytes) = read_body(resp).await;
    let ct = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", json);
    json
}
