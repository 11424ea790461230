// src/services/contact_service.rs
// DOCUMENTATION: Business logic for confirmed contacts
// PURPOSE: Turn an awaiting verification into a Contact owned by the caller

use crate::config::Config;
use crate::db::{ContactRepository, VerificationRepository};
use crate::errors::VerificationError;
use crate::models::{ContactRequest, ContactResponse};
use crate::services::pin;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ContactService;

impl ContactService {
    /// Confirm a phone number for `user_id` with the code it received
    /// DOCUMENTATION: Consuming the code, dropping the user's previous
    /// contacts and inserting the new one commit together
    pub async fn confirm(
        pool: &PgPool,
        config: &Config,
        user_id: Uuid,
        req: ContactRequest,
    ) -> Result<ContactResponse, VerificationError> {
        let req = req.normalized();
        req.validate()?;

        if ContactRepository::exists_for_number(pool, &req.country_number, &req.phone_number).await? {
            return Err(VerificationError::AlreadyVerified);
        }

        let cutoff = pin::expiry_cutoff(Utc::now(), config.pin_lifetime_secs);

        let matches = VerificationRepository::exists_awaiting(
            pool,
            &req.country_number,
            &req.phone_number,
            &req.code,
            cutoff,
        )
        .await?;
        if !matches {
            log::info!(
                "Rejected code for +{} {} from user {}",
                req.country_number,
                req.phone_number,
                user_id
            );
            return Err(VerificationError::InvalidCode);
        }

        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            VerificationError::DatabaseError(e.to_string())
        })?;

        let consumed = VerificationRepository::delete_awaiting(
            &mut *tx,
            &req.country_number,
            &req.phone_number,
            &req.code,
            cutoff,
        )
        .await?;
        if consumed == 0 {
            // Another request consumed the code between the check and here
            return Err(VerificationError::InvalidCode);
        }

        if !config.allow_multiple_contacts {
            let replaced = ContactRepository::delete_for_user(&mut *tx, user_id).await?;
            if replaced > 0 {
                log::info!("Replacing {} existing contact(s) of user {}", replaced, user_id);
            }
        }

        let contact =
            ContactRepository::create(&mut *tx, user_id, &req.country_number, &req.phone_number)
                .await?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit contact confirmation: {}", e);
            VerificationError::DatabaseError(e.to_string())
        })?;

        log::info!("Contact {} confirmed for user {}", contact.id, user_id);
        Ok(contact.to_response())
    }

    /// Contacts of a user, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<ContactResponse>, VerificationError> {
        let contacts = ContactRepository::list_for_user(pool, user_id).await?;
        Ok(contacts.iter().map(|c| c.to_response()).collect())
    }

    /// Remove one of the user's own contacts
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), VerificationError> {
        let deleted = ContactRepository::delete_one_for_user(pool, id, user_id).await?;
        if deleted == 0 {
            return Err(VerificationError::NotFound(id.to_string()));
        }
        log::info!("Contact {} removed by user {}", id, user_id);
        Ok(())
    }
}
