pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContactSubmission, NewContactMessage};
pub use repository::ContactMessageRepository;
pub use value_objects::{ClientIp, ContactMessageId, ContactStatus, EmailAddress, UNKNOWN_CLIENT};
