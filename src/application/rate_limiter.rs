/******************************************************************************
   Author: ALGORHYTHM Team
   Date: 14/10/26
******************************************************************************/

//! Client-side request throttling
//!
//! Several widgets poll the backend concurrently; the limiter keeps the
//! combined request rate within the configured quota using `governor`'s
//! token bucket.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Shared token bucket for outgoing requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl RateLimiter {
    /// Creates a limiter replenishing `max_requests` cells every `period_seconds`
    ///
    /// Zero values fall back to one request per second with a burst of ten.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let period = Duration::from_secs(config.period_seconds.max(1));
        let replenish = (period / max_requests).max(Duration::from_millis(1));

        let burst_size = NonZeroU32::new(config.burst_size)
            .or(NonZeroU32::new(10))
            .unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the quota allows one more request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// `true` if a request may be sent right now; consumes a cell when it does
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
