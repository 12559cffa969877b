mod get_by_slug;
mod list;
mod search;
mod service;
mod tags;

pub use service::ArticleQueryService;
