// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{contact::ContactCommandService, newsletter::NewsletterCommandService},
        ports::{ClockPort, ContactNotifierPort, RateLimitStorePort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::ArticleReadRepository, contact::ContactMessageRepository,
        newsletter::NewsletterRepository,
    },
};

/// Everything the HTTP layer needs, wired once at startup.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    rate_limiter: Arc<RateLimitStorePort>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        newsletter_repo: Arc<dyn NewsletterRepository>,
        rate_limiter: Arc<RateLimitStorePort>,
        notifier: Arc<ContactNotifierPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(article_read_repo));

        let contact_commands = Arc::new(ContactCommandService::new(
            contact_repo,
            Arc::clone(&rate_limiter),
            notifier,
            Arc::clone(&clock),
        ));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(newsletter_repo, clock));

        Self {
            article_queries,
            contact_commands,
            newsletter_commands,
            rate_limiter,
        }
    }

    /// Shared with the background sweeper.
    pub fn rate_limiter(&self) -> Arc<RateLimitStorePort> {
        Arc::clone(&self.rate_limiter)
    }
}
