// src/models/contact.rs
// DOCUMENTATION: Confirmed contact records and request DTOs
// PURPOSE: Maps the contacts table and the confirmation payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::verification::{
    string_or_number, validate_code_length, validate_country_number_length,
    validate_phone_number_length,
};
use crate::services::phone::{minify_phone_number, normalize_country_number};

/// A phone number confirmed as belonging to a user
/// DOCUMENTATION: Maps directly to the contacts table
/// (country_number, phone_number) is unique across all users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub country_number: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /contacts
/// DOCUMENTATION: `code` is write-only; ContactResponse never carries it
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        length(min = 1, message = "Enter a country number."),
        custom = "validate_country_number_length"
    )]
    pub country_number: String,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        length(min = 1, message = "Enter a phone number."),
        custom = "validate_phone_number_length"
    )]
    pub phone_number: String,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        length(min = 1, message = "Enter the verification code."),
        custom = "validate_code_length"
    )]
    pub code: String,
}

impl ContactRequest {
    pub fn normalized(self) -> Self {
        Self {
            country_number: normalize_country_number(&self.country_number),
            phone_number: minify_phone_number(self.phone_number.trim()),
            code: self.code.trim().to_string(),
        }
    }
}

/// Contact response DTO exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub country_number: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Convert database Contact into API response
    pub fn to_response(&self) -> ContactResponse {
        ContactResponse {
            id: self.id,
            country_number: self.country_number.clone(),
            phone_number: self.phone_number.clone(),
            created_at: self.created_at,
        }
    }
}
