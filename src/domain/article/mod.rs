pub mod entity;
pub mod repository;
pub mod tags;
pub mod value_objects;

pub use entity::{Article, ArticleLookup, DEFAULT_AUTHOR, DEFAULT_TAGS, StoredPost};
pub use repository::ArticleReadRepository;
pub use tags::{TagCount, tally_tags};
pub use value_objects::{
    ArticleId, ArticleSlug, MIN_SEARCH_CHARS, PageRequest, PageWindow, SearchTerm, TagName,
};
