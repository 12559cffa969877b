use crate::domain::errors::{DomainError, StoreError, StoreErrorKind};

const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.code() {
                Some(code) if code == UNIQUE_VIOLATION => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                Some(code) => StoreError::from_code(code.as_ref(), message).into(),
                None => StoreError::new(StoreErrorKind::Other, message).into(),
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::unavailable(err.to_string()).into(),
        _ => StoreError::new(StoreErrorKind::Other, err.to_string()).into(),
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2);
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
        assert_eq!(escape_like("rust"), "rust");
    }

    #[test]
    fn pool_timeout_is_unavailable() {
        match map_sqlx(sqlx::Error::PoolTimedOut) {
            DomainError::Store(err) => assert_eq!(err.kind, StoreErrorKind::Unavailable),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn row_not_found_is_other() {
        match map_sqlx(sqlx::Error::RowNotFound) {
            DomainError::Store(err) => assert_eq!(err.kind, StoreErrorKind::Other),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
