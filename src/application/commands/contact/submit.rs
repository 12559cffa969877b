// src/application/commands/contact/submit.rs
use super::ContactCommandService;
use crate::{
    application::{
        dto::{ClientInfo, ContactReceipt},
        error::{ApplicationError, ApplicationResult},
        ports::{
            notifier::{ContactNotification, NotificationOutcome},
            rate_limit::RateLimitDecision,
        },
    },
    domain::contact::{ContactSubmission, NewContactMessage},
};

impl ContactCommandService {
    /// Validate, rate-limit, persist, then notify.
    ///
    /// Success means the message was stored; the notification outcome is
    /// reported but never turns a stored message into a failure.
    pub async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> ApplicationResult<ContactReceipt> {
        let ClientInfo { ip, user_agent } = client;
        let message = NewContactMessage::from_submission(submission, ip, user_agent)?;

        self.enforce_rate_limit(message.ip_address.as_str()).await?;

        let notification = ContactNotification {
            from_name: message.name.clone(),
            from_email: message.email.to_string(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            sent_at: self.clock.now(),
        };

        let id = self
            .contacts
            .insert(message)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "failed to store contact message"))?;

        let outcome = self.notifier.notify(&notification).await;
        match &outcome {
            NotificationOutcome::Sent => tracing::info!("contact notification sent"),
            NotificationOutcome::Skipped => {
                tracing::info!("e-mail notification not configured, message stored only");
            }
            NotificationOutcome::Failed(reason) => {
                tracing::warn!(%reason, "contact notification failed, message stored anyway");
            }
        }

        Ok(ContactReceipt {
            id: id.map(|id| id.into_inner()),
            notification: outcome,
        })
    }

    async fn enforce_rate_limit(&self, key: &str) -> ApplicationResult<()> {
        match self.rate_limiter.record(key, self.clock.now()).await {
            Ok(RateLimitDecision::Allowed { .. }) => Ok(()),
            Ok(RateLimitDecision::Limited { retry_after }) => {
                tracing::warn!(client = key, "contact submission rate limited");
                Err(ApplicationError::rate_limited(retry_after))
            }
            // Limiter errors let the request through.
            Err(err) => {
                tracing::warn!(client = key, error = %err, "rate limiter unavailable, allowing request");
                Ok(())
            }
        }
    }
}
