use crate::application::dto::ArticleDto;
use crate::domain::article::SearchTerm;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text; fewer than two characters returns no results.
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<ArticleDto>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Articles whose title, excerpt or content contain the query.", body = SearchResponse)
    ),
    tag = "Articles"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let Some(query) = params.q.filter(|q| SearchTerm::parse(q).is_some()) else {
        return Json(SearchResponse {
            results: Vec::new(),
            count: 0,
            query: None,
        });
    };

    let results = state.services.article_queries.search(&query).await;
    Json(SearchResponse {
        count: results.len(),
        results,
        query: Some(query),
    })
}
