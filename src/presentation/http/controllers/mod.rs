// src/presentation/http/controllers/mod.rs
pub mod contact;
pub mod newsletter;
pub mod posts;
pub mod search;
pub mod site;
pub mod tags;
