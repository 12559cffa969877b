// src/domain/contact/entity.rs
use crate::domain::contact::value_objects::{ClientIp, ContactStatus, EmailAddress};
use crate::domain::errors::{DomainError, DomainResult};

/// Raw form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub subject: String,
    pub message: String,
    pub ip_address: ClientIp,
    pub user_agent: String,
    pub status: ContactStatus,
}

impl NewContactMessage {
    /// Validate a submission. Fails on the first blank field, then on the
    /// email shape; no I/O happens here.
    pub fn from_submission(
        submission: ContactSubmission,
        ip_address: ClientIp,
        user_agent: impl Into<String>,
    ) -> DomainResult<Self> {
        let ContactSubmission {
            name,
            email,
            subject,
            message,
        } = submission;

        for (field, value) in [
            ("name", &name),
            ("email", &email),
            ("subject", &subject),
            ("message", &message),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidField {
                    field,
                    message: "all fields are required".into(),
                });
            }
        }

        let email = EmailAddress::parse(email.trim())?;
        let user_agent = user_agent.into();

        Ok(Self {
            name,
            email,
            subject,
            message,
            ip_address,
            user_agent,
            status: ContactStatus::New,
        })
    }
}
