use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::sitemap::{render_sitemap, sitemap_entries};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub site_url: String,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_measurement_id: Option<String>,
    /// Whether contact messages also trigger an e-mail.
    pub email_notifications: bool,
}

#[utoipa::path(
    get,
    path = "/api/site",
    responses(
        (status = 200, description = "Public site settings.", body = SiteResponse)
    ),
    tag = "System"
)]
pub async fn site_settings(Extension(state): Extension<HttpState>) -> Json<SiteResponse> {
    let site = &state.site;
    Json(SiteResponse {
        site_url: site.site_url.clone(),
        contact_email: site.contact_email.clone(),
        analytics_measurement_id: site.analytics_measurement_id.clone(),
        email_notifications: site.email_notifications,
    })
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap of static pages and every article.", content_type = "application/xml", body = String)
    ),
    tag = "System"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let articles = state.services.article_queries.list_recent(None).await;
    let entries = sitemap_entries(&state.site.site_url, chrono::Utc::now(), &articles);
    let xml = render_sitemap(&entries).map_err(|err| {
        tracing::error!(error = %err, "failed to render sitemap");
        HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, "failed to render sitemap")
    })?;

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}
