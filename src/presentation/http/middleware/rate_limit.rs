// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type CommentLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

// One comment every 6 seconds per client IP, with a burst of 5.
const REPLENISH_EVERY_SECS: u64 = 6;
const BURST: u32 = 5;

/// Per-IP limiter for comment submission. The client address comes from
/// `X-Forwarded-For`/`X-Real-IP`/`Forwarded` or the peer socket.
pub fn comment_rate_limit_layer() -> CommentLimiter {
    static RATE_LIMITER: OnceLock<CommentLimiter> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_EVERY_SECS);
            builder.burst_size(BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
