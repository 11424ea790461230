// src/models/verification.rs
// DOCUMENTATION: Pending verification records and request DTOs
// PURPOSE: Maps the contact_verifications table and the code request payload

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::services::phone::{minify_phone_number, normalize_country_number};

/// Longest national number accepted (column width)
pub const PHONE_NUMBER_MAX_LEN: usize = 20;

/// Longest calling code accepted (column width)
pub const COUNTRY_NUMBER_MAX_LEN: usize = 5;

/// Longest PIN accepted (column width)
pub const CODE_MAX_LEN: usize = 10;

/// A one-time code sent to a phone number and not yet confirmed
/// DOCUMENTATION: Maps directly to the contact_verifications table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactVerification {
    pub id: Uuid,
    pub country_number: String,
    pub phone_number: String,

    /// The PIN; never serialized back to clients
    #[serde(skip_serializing)]
    pub code: String,

    pub created_at: DateTime<Utc>,
}

/// Request DTO for POST /contact-verifications
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerificationRequest {
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
}

impl VerificationRequest {
    /// Trim and minify the number before validation and lookups
    pub fn normalized(self) -> Self {
        Self {
            country_number: normalize_country_number(&self.country_number),
            phone_number: minify_phone_number(self.phone_number.trim()),
        }
    }
}

/// Response DTO for a successfully sent code
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub country_number: String,
    pub phone_number: String,
    pub message: String,
}

/// Accept a JSON string or number as text; null reads as blank
/// (`{"country_number": 82}` is the same request as `"82"`)
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

pub(crate) fn validate_phone_number_length(value: &str) -> Result<(), ValidationError> {
    max_length(value, PHONE_NUMBER_MAX_LEN, "Ensure the phone number has at most 20 characters.")
}

pub(crate) fn validate_country_number_length(value: &str) -> Result<(), ValidationError> {
    max_length(value, COUNTRY_NUMBER_MAX_LEN, "Ensure the country number has at most 5 characters.")
}

pub(crate) fn validate_code_length(value: &str) -> Result<(), ValidationError> {
    max_length(value, CODE_MAX_LEN, "Ensure the verification code has at most 10 characters.")
}

fn max_length(value: &str, max: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        let mut error = ValidationError::new("max_length");
        error.message = Some(Cow::Borrowed(message));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(country: &str, phone: &str) -> VerificationRequest {
        VerificationRequest {
            country_number: country.to_string(),
            phone_number: phone.to_string(),
        }
    }

    #[test]
    fn test_normalized_minifies_phone() {
        let req = request(" +82 ", " 01012345678 ").normalized();
        assert_eq!(req.country_number, "82");
        assert_eq!(req.phone_number, "1012345678");
    }

    #[test]
    fn test_blank_phone_is_rejected_with_message() {
        let errors = request("82", "").normalized().validate().unwrap_err();
        let field = errors.field_errors();
        let message = field["phone_number"][0].message.as_ref().unwrap();
        assert_eq!(message, "Enter a phone number.");
    }

    #[test]
    fn test_lone_zero_minifies_to_blank() {
        let req = request("82", "0").normalized();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_phone_is_rejected() {
        let req = request("82", "123456789012345678901").normalized();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
    }

    #[test]
    fn test_numeric_fields_deserialize_as_text() {
        let req: VerificationRequest =
            serde_json::from_str(r#"{"country_number": 82, "phone_number": 1012345678}"#).unwrap();
        assert_eq!(req.country_number, "82");
        assert_eq!(req.phone_number, "1012345678");
    }

    #[test]
    fn test_null_field_deserializes_as_blank() {
        let req: VerificationRequest =
            serde_json::from_str(r#"{"country_number": "82", "phone_number": null}"#).unwrap();
        assert!(req.phone_number.is_empty());
        assert!(req.normalized().validate().is_err());
    }

    #[test]
    fn test_object_field_is_rejected() {
        let result: Result<VerificationRequest, _> =
            serde_json::from_str(r#"{"country_number": {"cc": 82}, "phone_number": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_code_is_not_serialized() {
        let verification = ContactVerification {
            id: Uuid::new_v4(),
            country_number: "82".to_string(),
            phone_number: "1012345678".to_string(),
            code: "1234".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&verification).unwrap();
        assert!(json.get("code").is_none());
        assert_eq!(json["phone_number"], "1012345678");
    }
}
