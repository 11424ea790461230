// src/services/rate_limiter.rs
// DOCUMENTATION: Per-user throttle on code requests
// PURPOSE: Bound how many numbers one account can probe, on top of the
// per-number resend cooldown

use crate::errors::VerificationError;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use uuid::Uuid;

pub struct PinRequestLimiter {
    limiter: DefaultKeyedRateLimiter<Uuid>,
}

impl PinRequestLimiter {
    /// Allow `requests` code requests per user per minute
    pub fn per_minute(requests: u32) -> Self {
        let burst = NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(burst)),
        }
    }

    /// Consume one request for `user_id`
    pub fn check(&self, user_id: Uuid) -> Result<(), VerificationError> {
        self.limiter.check_key(&user_id).map_err(|_| {
            log::warn!("Code request rate limit hit for user {}", user_id);
            VerificationError::RateLimitExceeded
        })
    }

    /// Drop state for users whose quota has fully replenished
    pub fn shrink(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    pub fn tracked_users(&self) -> usize {
        self.limiter.len()
    }
}
