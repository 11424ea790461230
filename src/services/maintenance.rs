// src/services/maintenance.rs
// DOCUMENTATION: Periodic housekeeping
// PURPOSE: Purge expired verifications and idle rate limiter state in the background

use crate::services::{PinRequestLimiter, VerificationService};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Start background purge task
/// DOCUMENTATION: Runs every `interval_seconds` for the lifetime of the process
pub fn start_purge_task(
    pool: PgPool,
    limiter: Arc<PinRequestLimiter>,
    lifetime_secs: i64,
    interval_seconds: u64,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds.max(1)));

        loop {
            interval.tick().await;

            match VerificationService::purge_inactive(&pool, lifetime_secs).await {
                Ok(0) => {}
                Ok(purged) => log::info!("Purge task removed {} inactive verifications", purged),
                Err(e) => log::warn!("Purge task failed: {}", e),
            }

            limiter.shrink();
            log::debug!("Rate limiter tracking {} users", limiter.tracked_users());
        }
    });
}
