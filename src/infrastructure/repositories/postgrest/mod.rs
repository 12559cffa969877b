//! Adapters for a hosted store reached over PostgREST (Supabase and friends).
mod articles;
mod client;
mod contact;
mod newsletter;

pub use articles::PostgrestArticleRepository;
pub use client::PostgrestClient;
pub use contact::PostgrestContactMessageRepository;
pub use newsletter::PostgrestNewsletterRepository;
