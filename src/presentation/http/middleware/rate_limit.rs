// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type LoginLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for credential checks: a burst of five attempts, then
/// one more every six seconds. Clients are keyed on forwarding headers or
/// the peer address.
pub fn login_rate_limit_layer() -> Option<LoginLimiter> {
    static LIMITER: OnceLock<Option<LoginLimiter>> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(6);
            builder.burst_size(5);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::warn!("login rate limiter configuration rejected; limiter disabled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
