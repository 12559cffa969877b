pub mod articles;
pub mod contact;
pub mod pagination;

pub use articles::{ArticleDto, TagCountDto};
pub use contact::{ClientInfo, ContactReceipt, SubscriptionReceipt};
pub use pagination::{PageLabel, PaginatedArticles, page_labels};
