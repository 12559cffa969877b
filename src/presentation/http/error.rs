use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, StoreError, StoreErrorKind};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use utoipa::ToSchema;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Offending input field for validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    body: ErrorResponse,
    /// Empty payload fields echoed next to the error, e.g. `tags: []`.
    extra: Map<String, Value>,
    retry_after: Option<Duration>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::RateLimited { retry_after } => {
                let mut error = Self::new(
                    StatusCode::TOO_MANY_REQUESTS,
                    "too many requests, please try again later",
                );
                error.retry_after = Some(retry_after);
                error
            }
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error").with_details(msg)
            }
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::InvalidField { field, message } => {
                let mut error = Self::new(StatusCode::BAD_REQUEST, message);
                error.body.field = Some(field.to_string());
                error
            }
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Unconfigured(reason) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "the data store is not configured")
                    .with_details(reason)
                    .with_code("store_unconfigured")
            }
            DomainError::Store(store_err) => Self::from_store(StatusCode::INTERNAL_SERVER_ERROR, store_err),
        }
    }

    /// Store failure with a message naming its class, the store's own text as
    /// `details` and its code (or the class) as `code`.
    pub fn from_store(status: StatusCode, err: StoreError) -> Self {
        let summary = match err.kind {
            StoreErrorKind::SchemaMissing => "storage schema is not provisioned",
            StoreErrorKind::PermissionDenied => "insufficient permission on the store",
            StoreErrorKind::Unavailable => "the data store is unavailable",
            StoreErrorKind::Other => "the data store rejected the request",
        };
        let code = err.code_or_kind().to_string();
        Self::new(status, summary)
            .with_details(err.message)
            .with_code(code)
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: message.into(),
                details: None,
                code: None,
                field: None,
            },
            extra: Map::new(),
            retry_after: None,
        }
    }

    /// Replace the headline while keeping details and code.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let previous = std::mem::replace(&mut self.body.error, message.into());
        if self.body.details.is_none() {
            self.body.details = Some(previous);
        }
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.body.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut payload = match serde_json::to_value(&self.body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (key, value) in self.extra {
            payload.entry(key).or_insert(value);
        }

        let mut response = (self.status, Json(Value::Object(payload))).into_response();
        if let Some(retry_after) = self.retry_after {
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(RETRY_AFTER, value);
            }
        }
        response
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
