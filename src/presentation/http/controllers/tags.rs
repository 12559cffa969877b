use crate::application::dto::TagCountDto;
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<TagCountDto>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "Distinct tags with usage counts, most used first.", body = TagsResponse),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagsResponse>> {
    let tags = state
        .services
        .article_queries
        .try_tag_counts()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to fetch tags");
            HttpError::from_error(err)
                .with_message("failed to fetch tags")
                .with_field("tags", json!([]))
                .with_field("count", json!(0))
        })?;

    Ok(Json(TagsResponse {
        count: tags.len(),
        tags,
    }))
}
