// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::search::search,
        crate::presentation::http::controllers::tags::list_tags,
        crate::presentation::http::controllers::posts::posts_by_tag,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::recent_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::contact::submit_contact,
        crate::presentation::http::controllers::newsletter::subscribe,
        crate::presentation::http::controllers::site::site_settings,
        crate::presentation::http::controllers::site::sitemap,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::search::SearchResponse,
            crate::presentation::http::controllers::tags::TagsResponse,
            crate::presentation::http::controllers::posts::PostsByTagResponse,
            crate::presentation::http::controllers::posts::ArticleListResponse,
            crate::presentation::http::controllers::contact::ContactRequest,
            crate::presentation::http::controllers::contact::ContactResponse,
            crate::presentation::http::controllers::newsletter::NewsletterRequest,
            crate::presentation::http::controllers::newsletter::NewsletterResponse,
            crate::presentation::http::controllers::site::SiteResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::TagCountDto,
            crate::application::dto::PaginatedArticles
        )
    ),
    tags(
        (name = "Articles", description = "Reading, searching and filtering articles"),
        (name = "Forms", description = "Contact and newsletter submissions"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Lilabs Blog API",
        description = "Blog backend: articles, search, tags, contact and newsletter",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let urls = server_urls(env::var("PUBLIC_API_URLS").ok().as_deref());
        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

/// Comma-separated base URLs, trailing slashes dropped, first occurrence wins.
fn server_urls(raw: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for url in raw.unwrap_or_default().split(',') {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() && !urls.iter().any(|seen| seen == url) {
            urls.push(url.to_string());
        }
    }
    if urls.is_empty() {
        urls.push(DEFAULT_SERVER_URL.to_string());
    }
    urls
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> PathBuf {
    env::var_os("OPENAPI_SNAPSHOT_PATH").map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from)
}

/// Pretty-printed document at [`snapshot_path`], creating parent directories.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = snapshot_path();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = serde_json::to_vec_pretty(&ApiDoc::openapi())?;
    json.push(b'\n');
    fs::write(&path, json)?;
    Ok(path)
}
