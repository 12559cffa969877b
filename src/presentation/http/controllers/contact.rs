use crate::domain::contact::ContactSubmission;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestClient;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Missing fields deserialize as empty and are reported by validation.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

pub(super) fn malformed_body(rejection: &JsonRejection) -> HttpError {
    HttpError::new(StatusCode::BAD_REQUEST, "malformed request body").with_details(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message stored.", body = ContactResponse),
        (status = 400, description = "Missing field or malformed e-mail.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many messages from this client.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Message could not be stored.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    RequestClient(client): RequestClient,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> HttpResult<Json<ContactResponse>> {
    let Json(payload) = payload.map_err(|rejection| malformed_body(&rejection))?;

    let receipt = state
        .services
        .contact_commands
        .submit(payload.into(), client)
        .await
        .into_http()?;

    Ok(Json(ContactResponse {
        success: true,
        message: "message sent".into(),
        id: receipt.id,
    }))
}
