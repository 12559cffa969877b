// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{contact, newsletter, posts, search, site, tags},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Tests pass `false`: the burst limiter keys on the peer address, which
/// `oneshot` requests do not carry.
pub fn build_router_with_rate_limiter(state: HttpState, burst_limit: bool) -> Router {
    let origins: Vec<HeaderValue> = state
        .site
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/search", get(search::search))
        .route("/api/tags", get(tags::list_tags))
        .route("/api/posts-by-tag", get(posts::posts_by_tag))
        .route("/api/posts", get(posts::list_posts))
        .route("/api/posts/recent", get(posts::recent_posts))
        .route("/api/posts/{slug}", get(posts::get_post))
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/newsletter", post(newsletter::subscribe))
        .route("/api/site", get(site::site_settings))
        .route("/sitemap.xml", get(site::sitemap))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state));

    match rate_limit_layer() {
        Some(layer) if burst_limit => router.layer(layer),
        _ => router,
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
