// src/presentation/http/extractors.rs
use crate::application::dto::ClientInfo;
use crate::domain::contact::{ClientIp, UNKNOWN_CLIENT};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use headers::{HeaderMapExt, UserAgent};
use std::convert::Infallible;

/// Best-effort identity of the caller from proxy headers.
#[derive(Debug, Clone)]
pub struct RequestClient(pub ClientInfo);

impl<S: Send + Sync> FromRequestParts<S> for RequestClient {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(client_info(&parts.headers)))
    }
}

/// `x-forwarded-for` (first hop) then `x-real-ip`, else `"unknown"`.
pub fn client_ip(headers: &HeaderMap) -> ClientIp {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    forwarded.or_else(real_ip).map_or_else(ClientIp::unknown, ClientIp::new)
}

pub fn client_info(headers: &HeaderMap) -> ClientInfo {
    let user_agent = headers
        .typed_get::<UserAgent>()
        .map(|agent| agent.as_str().to_string())
        .filter(|agent| !agent.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());
    ClientInfo::new(client_ip(headers), user_agent)
}
