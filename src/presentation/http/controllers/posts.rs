// src/presentation/http/controllers/posts.rs
use crate::application::dto::{ArticleDto, PaginatedArticles};
use crate::domain::article::{ArticleLookup, PageRequest};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostsByTagParams {
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostsByTagResponse {
    pub articles: Vec<ArticleDto>,
    pub count: usize,
    pub tag: String,
}

/// Unparseable values fall back to the defaults.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    fn to_request(&self) -> Option<PageRequest> {
        let page = parse_number(self.page.as_deref()).unwrap_or(1).max(1);
        let page_size = parse_number(self.page_size.as_deref())
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE))
            .clamp(1, i64::from(MAX_PAGE_SIZE));
        PageRequest::new(
            u32::try_from(page).unwrap_or(u32::MAX),
            u32::try_from(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .ok()
    }
}

fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleDto>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/posts-by-tag",
    params(PostsByTagParams),
    responses(
        (status = 200, description = "Articles carrying exactly this tag.", body = PostsByTagResponse),
        (status = 400, description = "Missing tag.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn posts_by_tag(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostsByTagParams>,
) -> HttpResult<Json<PostsByTagResponse>> {
    let Some(tag) = params.tag.filter(|tag| !tag.trim().is_empty()) else {
        return Err(HttpError::new(StatusCode::BAD_REQUEST, "tag parameter is required")
            .with_field("articles", json!([]))
            .with_field("count", json!(0)));
    };

    let articles = state
        .services
        .article_queries
        .try_list_by_tag(&tag)
        .await
        .map_err(|err| {
            tracing::error!(%tag, error = %err, "failed to fetch posts by tag");
            HttpError::from_error(err)
                .with_message("failed to fetch posts")
                .with_field("articles", json!([]))
                .with_field("count", json!(0))
        })?;

    Ok(Json(PostsByTagResponse {
        count: articles.len(),
        articles,
        tag,
    }))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PageParams),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = PaginatedArticles)
    ),
    tag = "Articles"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedArticles>> {
    let request = params
        .to_request()
        .ok_or_else(|| HttpError::new(StatusCode::BAD_REQUEST, "invalid page request"))?;
    Ok(Json(state.services.article_queries.paginate(request).await))
}

#[utoipa::path(
    get,
    path = "/api/posts/recent",
    params(RecentParams),
    responses(
        (status = 200, description = "Newest articles, optionally capped.", body = ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn recent_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RecentParams>,
) -> Json<ArticleListResponse> {
    let articles = state.services.article_queries.list_recent(params.limit).await;
    Json(ArticleListResponse {
        count: articles.len(),
        articles,
    })
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    match state.services.article_queries.get_by_slug(&slug).await {
        ArticleLookup::Found(article) => Ok(Json((*article).into())),
        ArticleLookup::NotFound => Err(HttpError::new(StatusCode::NOT_FOUND, "article not found")),
        ArticleLookup::BackendError(err) => {
            Err(HttpError::from_store(StatusCode::SERVICE_UNAVAILABLE, err).with_message("article temporarily unavailable"))
        }
    }
}
