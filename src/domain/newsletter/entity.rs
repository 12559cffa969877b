use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

/// Newsletter address. Only checked for an `@`, like the signup form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterEmail(String);

impl NewsletterEmail {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.contains('@') {
            return Err(DomainError::InvalidField {
                field: "email",
                message: "please enter a valid email address".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsletterEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub email: NewsletterEmail,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Created,
    AlreadySubscribed,
}
