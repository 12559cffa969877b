use sqlx::{PgPool, postgres::PgPoolOptions};

/// Lazy pool: nothing connects until the first query, so an unreachable
/// database degrades requests instead of failing start-up.
pub fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .connect_lazy(database_url)
}
