// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub site: Arc<SiteSettings>,
}

/// Public, non-secret settings the site front-end needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_url: String,
    pub contact_email: String,
    pub analytics_measurement_id: Option<String>,
    pub email_notifications: bool,
    pub allowed_origins: Vec<String>,
}

impl SiteSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            site_url: config.site_url().to_string(),
            contact_email: config.contact_email().to_string(),
            analytics_measurement_id: config.analytics_measurement_id().map(ToString::to_string),
            email_notifications: config.emailjs().is_some(),
            allowed_origins: config.allowed_origins().to_vec(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: "https://lilabs-blog.vercel.app".into(),
            contact_email: "contact@lilabs.fr".into(),
            analytics_measurement_id: None,
            email_notifications: false,
            allowed_origins: vec!["http://localhost:3000".into()],
        }
    }
}
