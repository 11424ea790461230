// src/db/verification_repository.rs
// DOCUMENTATION: Pending verification database operations
// PURPOSE: Issue, look up, and purge one-time codes

use crate::errors::VerificationError;
use crate::models::ContactVerification;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

pub struct VerificationRepository;

impl VerificationRepository {
    /// Store a freshly generated code
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        country_number: &str,
        phone_number: &str,
        code: &str,
        created_at: DateTime<Utc>,
    ) -> Result<ContactVerification, VerificationError> {
        sqlx::query_as::<_, ContactVerification>(
            r#"
            INSERT INTO contact_verifications (id, country_number, phone_number, code, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(country_number)
        .bind(phone_number)
        .bind(code)
        .bind(created_at)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            log::error!("Failed to create verification: {}", e);
            VerificationError::DatabaseError(format!("Create verification failed: {}", e))
        })
    }

    /// Most recent verification for a number, awaiting or not
    pub async fn latest_for_number<'e, E: PgExecutor<'e>>(
        executor: E,
        country_number: &str,
        phone_number: &str,
    ) -> Result<Option<ContactVerification>, VerificationError> {
        sqlx::query_as::<_, ContactVerification>(
            r#"
            SELECT * FROM contact_verifications
            WHERE country_number = $1 AND phone_number = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(country_number)
        .bind(phone_number)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch verification: {}", e);
            VerificationError::DatabaseError(format!("Fetch verification failed: {}", e))
        })
    }

    /// Whether an unexpired code matches the number
    pub async fn exists_awaiting<'e, E: PgExecutor<'e>>(
        executor: E,
        country_number: &str,
        phone_number: &str,
        code: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<bool, VerificationError> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM contact_verifications
                WHERE country_number = $1 AND phone_number = $2
                  AND code = $3 AND created_at > $4
            )
            "#,
        )
        .bind(country_number)
        .bind(phone_number)
        .bind(code)
        .bind(cutoff)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            log::error!("Failed to check verification code: {}", e);
            VerificationError::DatabaseError(format!("Check verification failed: {}", e))
        })?;

        Ok(exists)
    }

    /// Consume the unexpired codes matching the number
    pub async fn delete_awaiting<'e, E: PgExecutor<'e>>(
        executor: E,
        country_number: &str,
        phone_number: &str,
        code: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, VerificationError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contact_verifications
            WHERE country_number = $1 AND phone_number = $2
              AND code = $3 AND created_at > $4
            "#,
        )
        .bind(country_number)
        .bind(phone_number)
        .bind(code)
        .bind(cutoff)
        .execute(executor)
        .await
        .map_err(|e| {
            log::error!("Failed to consume verification: {}", e);
            VerificationError::DatabaseError(format!("Consume verification failed: {}", e))
        })?;

        Ok(result.rows_affected())
    }

    pub async fn delete_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: Uuid,
    ) -> Result<u64, VerificationError> {
        let result = sqlx::query("DELETE FROM contact_verifications WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                log::error!("Failed to delete verification {}: {}", id, e);
                VerificationError::DatabaseError(format!("Delete verification failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    /// Purge every verification created at or before `cutoff`
    pub async fn delete_inactive<'e, E: PgExecutor<'e>>(
        executor: E,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, VerificationError> {
        let result = sqlx::query("DELETE FROM contact_verifications WHERE created_at <= $1")
            .bind(cutoff)
            .execute(executor)
            .await
            .map_err(|e| {
                log::error!("Failed to purge inactive verifications: {}", e);
                VerificationError::DatabaseError(format!("Purge verifications failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    /// Returns (awaiting, inactive) counts relative to `cutoff`
    pub async fn count_by_state(
        pool: &PgPool,
        cutoff: DateTime<Utc>,
    ) -> Result<(i64, i64), VerificationError> {
        sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE created_at > $1),
                COUNT(*) FILTER (WHERE created_at <= $1)
            FROM contact_verifications
            "#,
        )
        .bind(cutoff)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to count verifications: {}", e);
            VerificationError::DatabaseError(format!("Count verifications failed: {}", e))
        })
    }
}
