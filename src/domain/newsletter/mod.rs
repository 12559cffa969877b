pub mod entity;
pub mod repository;

pub use entity::{NewSubscription, NewsletterEmail, SubscriptionOutcome};
pub use repository::NewsletterRepository;
