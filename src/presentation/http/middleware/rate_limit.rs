// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type BurstLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Coarse per-IP burst guard in front of every route: 10 requests per
/// second with bursts of 20. Needs the server to expose `ConnectInfo`.
pub fn rate_limit_layer() -> Option<BurstLayer> {
    static RATE_LIMITER: OnceLock<Option<BurstLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_millisecond(100);
            builder.burst_size(20);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::warn!("invalid burst limiter configuration, running without it");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
