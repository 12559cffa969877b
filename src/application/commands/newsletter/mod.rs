mod service;

pub use service::NewsletterCommandService;
