// src/application/commands/contact/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{notifier::ContactNotifier, rate_limit::RateLimitStore, time::Clock},
    domain::contact::ContactMessageRepository,
};

pub struct ContactCommandService {
    pub(super) contacts: Arc<dyn ContactMessageRepository>,
    pub(super) rate_limiter: Arc<dyn RateLimitStore>,
    pub(super) notifier: Arc<dyn ContactNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(
        contacts: Arc<dyn ContactMessageRepository>,
        rate_limiter: Arc<dyn RateLimitStore>,
        notifier: Arc<dyn ContactNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contacts,
            rate_limiter,
            notifier,
            clock,
        }
    }
}
