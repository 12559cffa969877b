// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store not configured: {0}")]
    Unconfigured(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The table or column the query targets does not exist.
    SchemaMissing,
    PermissionDenied,
    Unavailable,
    Other,
}

impl StoreErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SchemaMissing => "schema_missing",
            Self::PermissionDenied => "permission_denied",
            Self::Unavailable => "store_unavailable",
            Self::Other => "store_error",
        }
    }
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by the backing store, classified by the code it returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
    pub code: Option<String>,
}

const SCHEMA_MISSING_CODES: &[&str] = &["42P01", "42703", "PGRST200", "PGRST204", "PGRST205"];
const PERMISSION_DENIED_CODES: &[&str] = &["42501", "PGRST301", "PGRST302"];

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    /// Build an error from a store-provided code, deriving the kind from it.
    pub fn from_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            kind: classify_code(&code),
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Stable machine-readable code: the store's own code when it sent one.
    pub fn code_or_kind(&self) -> &str {
        self.code.as_deref().unwrap_or(self.kind.as_str())
    }
}

pub fn classify_code(code: &str) -> StoreErrorKind {
    if SCHEMA_MISSING_CODES.contains(&code) {
        StoreErrorKind::SchemaMissing
    } else if PERMISSION_DENIED_CODES.contains(&code) {
        StoreErrorKind::PermissionDenied
    } else {
        StoreErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_table_is_schema_missing() {
        let err = StoreError::from_code("42P01", "relation \"contact_messages\" does not exist");
        assert_eq!(err.kind, StoreErrorKind::SchemaMissing);
        assert_eq!(err.code_or_kind(), "42P01");
    }

    #[test]
    fn postgrest_missing_table_is_schema_missing() {
        assert_eq!(classify_code("PGRST205"), StoreErrorKind::SchemaMissing);
    }

    #[test]
    fn insufficient_privilege_is_permission_denied() {
        let err = StoreError::from_code("42501", "new row violates row-level security policy");
        assert_eq!(err.kind, StoreErrorKind::PermissionDenied);
    }

    #[test]
    fn unknown_code_falls_back_to_other() {
        assert_eq!(classify_code("XX000"), StoreErrorKind::Other);
        let err = StoreError::unavailable("connection refused");
        assert_eq!(err.code_or_kind(), "store_unavailable");
    }
}
