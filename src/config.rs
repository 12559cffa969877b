// src/config.rs
use crate::application::ports::rate_limit::RateLimitPolicy;
use crate::infrastructure::notifier::EmailJsSettings;
use std::{env, net::SocketAddr, str::FromStr, time::Duration};
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SITE_URL: &str = "https://lilabs-blog.vercel.app";
const DEFAULT_CONTACT_EMAIL: &str = "contact@lilabs.fr";
const DEFAULT_SWEEP_SECS: u64 = 300;

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where posts, contact messages and subscriptions live.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres { database_url: String },
    Postgrest { url: String, anon_key: String },
    Unconfigured,
}

impl StoreConfig {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Postgrest { .. } => "postgrest",
            Self::Unconfigured => "unconfigured",
        }
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgrest { url, .. } => f.debug_struct("Postgrest").field("url", url).finish_non_exhaustive(),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    store: StoreConfig,
    emailjs: Option<EmailJsSettings>,
    analytics_measurement_id: Option<String>,
    site_url: String,
    contact_email: String,
    allowed_origins: Vec<String>,
    redis_url: Option<String>,
    contact_rate_limit: RateLimitPolicy,
    rate_limit_sweep_every: Duration,
}

impl AppConfig {
    /// Build configuration from environment variables. Blank values count
    /// as absent; missing store or notifier credentials never fail.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let listen_addr = parse_or(
            "LISTEN_ADDR",
            get("LISTEN_ADDR"),
            SocketAddr::from_str(DEFAULT_LISTEN_ADDR).map_err(|err| ConfigError::Invalid {
                key: "LISTEN_ADDR",
                reason: err.to_string(),
            })?,
        )?;

        let store = match (get("DATABASE_URL"), get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            (Some(database_url), _, _) => StoreConfig::Postgres { database_url },
            (None, Some(url), Some(anon_key)) => StoreConfig::Postgrest { url, anon_key },
            _ => StoreConfig::Unconfigured,
        };

        let emailjs = match (
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
            get("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailJsSettings {
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        let max_requests = positive(
            "CONTACT_RATE_LIMIT_MAX",
            parse_or(
                "CONTACT_RATE_LIMIT_MAX",
                get("CONTACT_RATE_LIMIT_MAX"),
                RateLimitPolicy::CONTACT_MAX_REQUESTS,
            )?,
        )?;
        let window_secs = positive(
            "CONTACT_RATE_LIMIT_WINDOW_SECS",
            parse_or(
                "CONTACT_RATE_LIMIT_WINDOW_SECS",
                get("CONTACT_RATE_LIMIT_WINDOW_SECS"),
                RateLimitPolicy::CONTACT_WINDOW.as_secs(),
            )?,
        )?;
        let sweep_secs = positive(
            "RATE_LIMIT_SWEEP_SECS",
            parse_or("RATE_LIMIT_SWEEP_SECS", get("RATE_LIMIT_SWEEP_SECS"), DEFAULT_SWEEP_SECS)?,
        )?;

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            store,
            emailjs,
            analytics_measurement_id: get("GA_MEASUREMENT_ID"),
            site_url: get("SITE_URL")
                .map_or_else(|| DEFAULT_SITE_URL.to_string(), |url| url.trim_end_matches('/').to_string()),
            contact_email: get("CONTACT_EMAIL").unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            allowed_origins,
            redis_url: get("REDIS_URL"),
            contact_rate_limit: RateLimitPolicy::new(Duration::from_secs(window_secs), max_requests),
            rate_limit_sweep_every: Duration::from_secs(sweep_secs),
        })
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub const fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub const fn emailjs(&self) -> Option<&EmailJsSettings> {
        self.emailjs.as_ref()
    }

    pub fn analytics_measurement_id(&self) -> Option<&str> {
        self.analytics_measurement_id.as_deref()
    }

    /// Base URL without a trailing slash.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub const fn contact_rate_limit(&self) -> RateLimitPolicy {
        self.contact_rate_limit
    }

    pub const fn rate_limit_sweep_every(&self) -> Duration {
        self.rate_limit_sweep_every
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value.parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{value:?}: {err}"),
        })
    })
}

fn positive<T>(key: &'static str, value: T) -> Result<T, ConfigError>
where
    T: PartialEq + Default,
{
    if value == T::default() {
        Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".into(),
        })
    } else {
        Ok(value)
    }
}
