use super::contact::malformed_body;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResponse {
    pub success: bool,
    pub message: String,
    pub already_subscribed: bool,
}

#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "Subscribed, or already subscribed.", body = NewsletterResponse),
        (status = 400, description = "Malformed e-mail.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Subscription could not be stored.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> HttpResult<Json<NewsletterResponse>> {
    let Json(payload) = payload.map_err(|rejection| malformed_body(&rejection))?;

    let receipt = state
        .services
        .newsletter_commands
        .subscribe(&payload.email)
        .await
        .into_http()?;

    let message = if receipt.already_subscribed {
        "you are already subscribed"
    } else {
        "thanks for subscribing"
    };
    Ok(Json(NewsletterResponse {
        success: true,
        message: message.into(),
        already_subscribed: receipt.already_subscribed,
    }))
}
