// src/services/verification_service.rs
// DOCUMENTATION: Business logic for issuing verification codes
// PURPOSE: Enforce the resend cooldown and duplicate checks before sending a PIN

use crate::config::Config;
use crate::db::{ContactRepository, VerificationRepository};
use crate::errors::VerificationError;
use crate::models::{VerificationRequest, VerificationResponse};
use crate::services::phone::international_format;
use crate::services::pin;
use crate::services::sms_client::{render_sms_text, SmsClient};
use crate::services::PinRequestLimiter;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VerificationService;

impl VerificationService {
    /// Issue and send a new code for a phone number
    /// DOCUMENTATION: Refuses while a previous code is still awaiting
    /// confirmation or when the number already belongs to someone
    pub async fn request_code(
        pool: &PgPool,
        config: &Config,
        sms: &SmsClient,
        limiter: &PinRequestLimiter,
        user_id: Uuid,
        req: VerificationRequest,
    ) -> Result<VerificationResponse, VerificationError> {
        let req = req.normalized();
        req.validate()?;

        limiter.check(user_id)?;

        let now = Utc::now();
        let lifetime = config.pin_lifetime_secs;

        let purged = VerificationRepository::delete_inactive(pool, pin::expiry_cutoff(now, lifetime)).await?;
        if purged > 0 {
            log::debug!("Purged {} inactive verifications", purged);
        }

        let pending =
            VerificationRepository::latest_for_number(pool, &req.country_number, &req.phone_number)
                .await?;
        if let Some(pending) = pending {
            if pin::is_awaiting(pending.created_at, now, lifetime) {
                let seconds = pin::seconds_until_resend(pending.created_at, now, lifetime);
                return Err(VerificationError::CodeAlreadySent(seconds));
            }
        }

        if ContactRepository::exists_for_number(pool, &req.country_number, &req.phone_number).await? {
            return Err(VerificationError::AlreadyVerified);
        }

        let code = pin::generate_pin(config.pin_length);
        let verification = VerificationRepository::create(
            pool,
            &req.country_number,
            &req.phone_number,
            &code,
            now,
        )
        .await?;

        let destination = international_format(&req.country_number, &req.phone_number);
        let text = render_sms_text(&config.sms_text, &code);

        if let Err(e) = sms.send(&destination, &text).await {
            log::error!("SMS delivery to {} failed: {:#}", destination, e);
            VerificationRepository::delete_by_id(pool, verification.id).await?;
            return Err(VerificationError::SmsDeliveryFailed);
        }

        log::info!("Verification code sent to {} for user {}", destination, user_id);

        Ok(VerificationResponse {
            country_number: verification.country_number,
            phone_number: verification.phone_number,
            message: "Verification code sent.".to_string(),
        })
    }

    /// Delete every expired verification; returns the number removed
    pub async fn purge_inactive(pool: &PgPool, lifetime_secs: i64) -> Result<u64, VerificationError> {
        let cutoff = pin::expiry_cutoff(Utc::now(), lifetime_secs);
        VerificationRepository::delete_inactive(pool, cutoff).await
    }
}
