use crate::application::ports::notifier::{ContactNotification, ContactNotifier, NotificationOutcome};
use async_trait::async_trait;
use serde::Serialize;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Sends the contact notification through the EmailJS REST API.
#[derive(Clone)]
pub struct EmailJsNotifier {
    http: reqwest::Client,
    endpoint: String,
    settings: EmailJsSettings,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    sent_at: String,
}

impl EmailJsNotifier {
    pub fn new(settings: EmailJsSettings) -> Self {
        Self::with_endpoint(reqwest::Client::new(), EMAILJS_SEND_URL, settings)
    }

    pub fn with_endpoint(http: reqwest::Client, endpoint: impl Into<String>, settings: EmailJsSettings) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            settings,
        }
    }

    fn payload<'a>(&'a self, notification: &'a ContactNotification) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: TemplateParams {
                from_name: &notification.from_name,
                from_email: &notification.from_email,
                subject: &notification.subject,
                message: &notification.message,
                sent_at: notification.sent_at.to_rfc3339(),
            },
        }
    }
}

#[async_trait]
impl ContactNotifier for EmailJsNotifier {
    async fn notify(&self, notification: &ContactNotification) -> NotificationOutcome {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.payload(notification))
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => NotificationOutcome::Sent,
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(%status, %body, "EmailJS rejected the notification");
                NotificationOutcome::Failed(format!("EmailJS answered {status}"))
            }
            Err(err) => {
                tracing::warn!(error = %err, "EmailJS request failed");
                NotificationOutcome::Failed(err.to_string())
            }
        }
    }
}
