// src/domain/contact/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const UNKNOWN_CLIENT: &str = "unknown";

/// Address shaped like `local@domain.tld`: one `@`, no whitespace, and a dot
/// inside the domain part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_well_formed(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidField {
                field: "email",
                message: "invalid email format".into(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_well_formed(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx < domain.len() - 1)
}

/// Best-effort client address as reported by the proxy headers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIp(String);

impl ClientIp {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::unknown()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_CLIENT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    New,
}

impl ContactStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageId(String);

impl ContactMessageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
