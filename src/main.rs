use anyhow::{Context, Result};
use lilabs_blog::application::{
    ports::{ClockPort, ContactNotifierPort, RateLimitStorePort},
    services::ApplicationServices,
};
use lilabs_blog::config::{AppConfig, StoreConfig};
use lilabs_blog::domain::{
    article::ArticleReadRepository, contact::ContactMessageRepository,
    newsletter::NewsletterRepository,
};
use lilabs_blog::infrastructure::{
    database,
    notifier::{DisabledNotifier, EmailJsNotifier},
    rate_limit::{InMemoryRateLimitStore, RedisRateLimitStore, spawn_sweeper},
    repositories::{
        PostgresArticleReadRepository, PostgresContactMessageRepository,
        PostgresNewsletterRepository, UnconfiguredStore,
        postgrest::{
            PostgrestArticleRepository, PostgrestClient, PostgrestContactMessageRepository,
            PostgrestNewsletterRepository,
        },
    },
    time::SystemClock,
};
use lilabs_blog::presentation::http::{
    routes::build_router,
    state::{HttpState, SiteSettings},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Stores {
    articles: Arc<dyn ArticleReadRepository>,
    contacts: Arc<dyn ContactMessageRepository>,
    newsletter: Arc<dyn NewsletterRepository>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let stores = build_stores(config.store())?;
    let rate_limiter = build_rate_limiter(&config)?;

    let notifier: Arc<ContactNotifierPort> = match config.emailjs() {
        Some(settings) => Arc::new(EmailJsNotifier::new(settings.clone())),
        None => {
            tracing::info!("EmailJS not configured, contact notifications disabled");
            Arc::new(DisabledNotifier)
        }
    };
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        stores.articles,
        stores.contacts,
        stores.newsletter,
        Arc::clone(&rate_limiter),
        notifier,
        clock,
    ));

    let sweeper = spawn_sweeper(services.rate_limiter(), config.rate_limit_sweep_every());

    let state = HttpState {
        services: Arc::clone(&services),
        site: Arc::new(SiteSettings::from_config(&config)),
    };

    let app = build_router(state);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(store = config.store().label(), "listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    Ok(())
}

fn build_stores(store: &StoreConfig) -> Result<Stores> {
    let stores = match store {
        StoreConfig::Postgres { database_url } => {
            let pool = database::init_pool(database_url).context("invalid DATABASE_URL")?;
            Stores {
                articles: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                contacts: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
                newsletter: Arc::new(PostgresNewsletterRepository::new(pool)),
            }
        }
        StoreConfig::Postgrest { url, anon_key } => {
            let client = PostgrestClient::new(url, anon_key.clone());
            Stores {
                articles: Arc::new(PostgrestArticleRepository::new(client.clone())),
                contacts: Arc::new(PostgrestContactMessageRepository::new(client.clone())),
                newsletter: Arc::new(PostgrestNewsletterRepository::new(client)),
            }
        }
        StoreConfig::Unconfigured => {
            tracing::warn!("no store credentials configured, reads will be empty and submissions will fail");
            Stores {
                articles: Arc::new(UnconfiguredStore),
                contacts: Arc::new(UnconfiguredStore),
                newsletter: Arc::new(UnconfiguredStore),
            }
        }
    };
    Ok(stores)
}

fn build_rate_limiter(config: &AppConfig) -> Result<Arc<RateLimitStorePort>> {
    let policy = config.contact_rate_limit();
    let store: Arc<RateLimitStorePort> = match config.redis_url() {
        Some(url) => Arc::new(RedisRateLimitStore::from_url(url, policy)?),
        None => Arc::new(InMemoryRateLimitStore::new(policy)),
    };
    Ok(store)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
