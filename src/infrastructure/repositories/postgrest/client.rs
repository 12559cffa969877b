//! Thin client for a PostgREST endpoint (the REST face of a hosted Postgres).
use crate::domain::errors::{DomainError, DomainResult, StoreError, StoreErrorKind};
use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

/// Error payload PostgREST sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl PostgrestClient {
    /// `project_url` is the project root, e.g. `https://xyz.supabase.co`.
    pub fn new(project_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), project_url, api_key)
    }

    pub fn with_client(http: reqwest::Client, project_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http,
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{table}", self.rest_url))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> DomainResult<Vec<T>> {
        let response = self
            .request(Method::GET, table)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| StoreError::new(StoreErrorKind::Other, err.to_string()).into())
    }

    /// Exact row count through `HEAD` and `Prefer: count=exact`.
    pub async fn count(&self, table: &str) -> DomainResult<u64> {
        let response = self
            .request(Method::HEAD, table)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range)
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::Other, "missing or malformed Content-Range").into()
            })
    }

    /// Insert one row and return the columns named by `returning`.
    pub async fn insert_returning<B, T>(&self, table: &str, row: &B, returning: &str) -> DomainResult<Vec<T>>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, table)
            .query(&[("select", returning)])
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| StoreError::new(StoreErrorKind::Other, err.to_string()).into())
    }

    pub async fn insert<B>(&self, table: &str, row: &B) -> DomainResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response).await.map(|_| ())
    }
}

fn transport_error(err: reqwest::Error) -> DomainError {
    StoreError::unavailable(err.to_string()).into()
}

async fn ensure_success(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_response(status, &body))
}

pub(super) fn error_from_response(status: StatusCode, body: &str) -> DomainError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let mut message = parsed
        .message
        .unwrap_or_else(|| format!("store answered {status}"));
    if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
        message = format!("{message} ({details})");
    }
    if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
        message = format!("{message}; hint: {hint}");
    }

    if parsed.code.as_deref() == Some("23505") {
        return DomainError::Conflict(message);
    }

    let mut error = match parsed.code {
        Some(code) => StoreError::from_code(code, message),
        None => StoreError::new(StoreErrorKind::Other, message),
    };
    if error.kind == StoreErrorKind::Other {
        error.kind = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreErrorKind::PermissionDenied,
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                StoreErrorKind::Unavailable
            }
            _ => StoreErrorKind::Other,
        };
    }
    error.into()
}

/// Total from `Content-Range: 0-11/57` or `*/0`. `None` when the total is `*`.
pub(super) fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

/// Wrap a value in double quotes for PostgREST filter syntax, escaping `"` and `\`.
pub(super) fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_total() {
        assert_eq!(parse_content_range("0-11/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-11/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn quoting_escapes_quotes_and_backslashes() {
        assert_eq!(quote("AI"), "\"AI\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn missing_table_error_is_schema_missing() {
        let body = r#"{"code":"PGRST205","message":"Could not find the table 'public.contact_messages'","details":null,"hint":null}"#;
        match error_from_response(StatusCode::NOT_FOUND, body) {
            DomainError::Store(err) => {
                assert_eq!(err.kind, StoreErrorKind::SchemaMissing);
                assert_eq!(err.code.as_deref(), Some("PGRST205"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn row_level_security_is_permission_denied() {
        let body = r#"{"code":"42501","message":"new row violates row-level security policy"}"#;
        match error_from_response(StatusCode::UNAUTHORIZED, body) {
            DomainError::Store(err) => assert_eq!(err.kind, StoreErrorKind::PermissionDenied),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bare_forbidden_is_permission_denied() {
        match error_from_response(StatusCode::FORBIDDEN, "") {
            DomainError::Store(err) => {
                assert_eq!(err.kind, StoreErrorKind::PermissionDenied);
                assert!(err.code.is_none());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn duplicate_key_is_conflict() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#;
        assert!(matches!(
            error_from_response(StatusCode::CONFLICT, body),
            DomainError::Conflict(_)
        ));
    }

    #[test]
    fn gateway_errors_are_unavailable() {
        match error_from_response(StatusCode::SERVICE_UNAVAILABLE, "upstream down") {
            DomainError::Store(err) => assert_eq!(err.kind, StoreErrorKind::Unavailable),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
