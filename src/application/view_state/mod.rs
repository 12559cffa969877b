//! State the site's interactive widgets observe: debounced search, the tag
//! filter and form submission status.
pub mod search;
pub mod submission;
pub mod tag_filter;

pub use search::{DebouncedSearch, SEARCH_DEBOUNCE, SearchSource, SearchView};
pub use submission::{STATUS_RESET_AFTER, SubmissionStatus, SubmissionTracker};
pub use tag_filter::{TagFilter, TagSource};
