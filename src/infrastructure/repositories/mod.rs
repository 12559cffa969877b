// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_contact;
mod postgres_newsletter;
pub mod postgrest;
mod rows;
mod unconfigured;

pub use error::{escape_like, map_sqlx};
pub use postgres_article::PostgresArticleReadRepository;
pub use postgres_contact::PostgresContactMessageRepository;
pub use postgres_newsletter::PostgresNewsletterRepository;
pub use rows::normalise_rows;
pub use unconfigured::UnconfiguredStore;
