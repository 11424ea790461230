// src/db/contact_repository.rs
// DOCUMENTATION: Confirmed contact database operations
// PURPOSE: Handle CRUD operations for user contacts

use crate::errors::VerificationError;
use crate::models::Contact;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

pub struct ContactRepository;

impl ContactRepository {
    /// Insert a confirmed contact
    /// DOCUMENTATION: A concurrent confirmation of the same number loses on
    /// the unique constraint and is reported as AlreadyVerified
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
        country_number: &str,
        phone_number: &str,
    ) -> Result<Contact, VerificationError> {
        sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (id, user_id, country_number, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(country_number)
        .bind(phone_number)
        .fetch_one(executor)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                log::info!("Contact +{} {} already claimed", country_number, phone_number);
                VerificationError::AlreadyVerified
            }
            e => {
                log::error!("Failed to create contact: {}", e);
                VerificationError::DatabaseError(format!("Create contact failed: {}", e))
            }
        })
    }

    pub async fn exists_for_number<'e, E: PgExecutor<'e>>(
        executor: E,
        country_number: &str,
        phone_number: &str,
    ) -> Result<bool, VerificationError> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM contacts
                WHERE country_number = $1 AND phone_number = $2
            )
            "#,
        )
        .bind(country_number)
        .bind(phone_number)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            log::error!("Failed to check contact: {}", e);
            VerificationError::DatabaseError(format!("Check contact failed: {}", e))
        })?;

        Ok(exists)
    }

    /// Remove every contact owned by a user
    pub async fn delete_for_user<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
    ) -> Result<u64, VerificationError> {
        let result = sqlx::query("DELETE FROM contacts WHERE user_id = $1")
            .bind(user_id)
            .execute(executor)
            .await
            .map_err(|e| {
                log::error!("Failed to delete contacts for user {}: {}", user_id, e);
                VerificationError::DatabaseError(format!("Delete contacts failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    /// Remove one contact if it belongs to the user
    pub async fn delete_one_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, VerificationError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete contact {}: {}", id, e);
                VerificationError::DatabaseError(format!("Delete contact failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }

    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<Contact>, VerificationError> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT * FROM contacts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch contacts for user {}: {}", user_id, e);
            VerificationError::DatabaseError(format!("Fetch contacts failed: {}", e))
        })
    }

    pub async fn count(pool: &PgPool) -> Result<i64, VerificationError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await
            .map_err(|e| VerificationError::DatabaseError(e.to_string()))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_number_maps_to_already_verified(pool: PgPool) {
        ContactRepository::create(&pool, Uuid::new_v4(), "82", "1012345678")
            .await
            .unwrap();

        let err = ContactRepository::create(&pool, Uuid::new_v4(), "82", "1012345678")
            .await
            .unwrap_err();
        assert!(matches!(err, VerificationError::AlreadyVerified));
        assert_eq!(ContactRepository::count(&pool).await.unwrap(), 1);
    }
}
