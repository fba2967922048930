//! Client-side request quota.
//!
//! Freshdesk enforces a per-account requests-per-minute quota. The client
//! keeps itself under that ceiling with a GCRA token bucket from the
//! `governor` crate: tokens refill at `max_requests_per_minute` per minute,
//! and an extra slack of [`DEFAULT_SLACK`] tokens lets short bursts through
//! without waiting.
//!
//! The limiter is generic over its clock so tests can drive it with
//! [`governor::clock::FakeRelativeClock`] instead of sleeping.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock, ReasonablyRealtime};
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorLimiter};

/// Burst allowance added on top of the per-minute rate.
pub const DEFAULT_SLACK: u32 = 100;

type DirectLimiter<C> =
    GovernorLimiter<NotKeyed, InMemoryState, C, NoOpMiddleware<<C as Clock>::Instant>>;

/// Token-bucket limiter shared by every request a client sends.
///
/// Cloning is cheap; clones draw from the same bucket.
#[derive(Clone)]
pub struct RateLimiter<C: Clock = DefaultClock> {
    limiter: Arc<DirectLimiter<C>>,
    clock: C,
    capacity: u32,
}

impl RateLimiter<DefaultClock> {
    /// Creates a limiter on the system clock with the default slack.
    pub fn new(max_requests_per_minute: NonZeroU32) -> Self {
        Self::with_clock(max_requests_per_minute, DEFAULT_SLACK, DefaultClock::default())
    }
}

impl<C: Clock + Clone> RateLimiter<C> {
    /// Creates a limiter with an explicit slack and clock.
    ///
    /// The bucket holds `max_requests_per_minute + slack` tokens and
    /// regains one token every `60s / max_requests_per_minute`.
    pub fn with_clock(max_requests_per_minute: NonZeroU32, slack: u32, clock: C) -> Self {
        let burst = max_requests_per_minute.saturating_add(slack);
        let quota = Quota::per_minute(max_requests_per_minute).allow_burst(burst);

        tracing::debug!(
            per_minute = max_requests_per_minute.get(),
            burst = burst.get(),
            "Rate limiter configured"
        );

        Self {
            limiter: Arc::new(GovernorLimiter::direct_with_clock(quota, clock.clone())),
            clock,
            capacity: burst.get(),
        }
    }

    /// Number of calls that may pass back-to-back from a full bucket.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Takes a token if one is available.
    ///
    /// On refusal returns how long until the next token, measured on the
    /// limiter's clock. A refused call consumes nothing.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.limiter
            .check()
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()))
    }
}

impl<C: ReasonablyRealtime + Clone> RateLimiter<C> {
    /// Waits until a token is available, then takes it.
    ///
    /// This is the only point where a request can be held back by the client.
    pub async fn acquire(&self) {
        if let Err(wait) = self.try_acquire() {
            tracing::debug!(
                wait_ms = wait.as_millis() as u64,
                "Client-side quota exhausted, waiting for a token"
            );
            self.limiter.until_ready().await;
        }
    }
}
