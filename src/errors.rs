// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and JSON error body
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("{0}")]
    ValidationError(String),

    #[error("A verification code has already been sent. You can request a new one in {0} seconds.")]
    CodeAlreadySent(i64),

    #[error("This number is already verified.")]
    AlreadyVerified,

    #[error("The verification code or phone number is incorrect.")]
    InvalidCode,

    #[error("Failed to send the verification code.")]
    SmsDeliveryFailed,

    #[error("Contact not found with id: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl VerificationError {
    fn error_code(&self) -> &'static str {
        match self {
            VerificationError::ValidationError(_) => "VALIDATION_ERROR",
            VerificationError::CodeAlreadySent(_) => "CODE_ALREADY_SENT",
            VerificationError::AlreadyVerified => "ALREADY_VERIFIED",
            VerificationError::InvalidCode => "INVALID_CODE",
            VerificationError::SmsDeliveryFailed => "SMS_DELIVERY_FAILED",
            VerificationError::NotFound(_) => "NOT_FOUND",
            VerificationError::DatabaseError(_) => "DATABASE_ERROR",
            VerificationError::Unauthorized => "UNAUTHORIZED",
            VerificationError::Forbidden => "FORBIDDEN",
            VerificationError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        }
    }
}

/// Convert VerificationError to HTTP response
/// DOCUMENTATION: Business rule failures are 400s, like field validation
impl ResponseError for VerificationError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            VerificationError::ValidationError(_)
            | VerificationError::CodeAlreadySent(_)
            | VerificationError::AlreadyVerified
            | VerificationError::InvalidCode
            | VerificationError::SmsDeliveryFailed => StatusCode::BAD_REQUEST,
            VerificationError::NotFound(_) => StatusCode::NOT_FOUND,
            VerificationError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VerificationError::Unauthorized => StatusCode::UNAUTHORIZED,
            VerificationError::Forbidden => StatusCode::FORBIDDEN,
            VerificationError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

/// Collapse field validation failures into one message
/// DOCUMENTATION: Fields are reported in name order, first failure per field
impl From<ValidationErrors> for VerificationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        let messages: Vec<String> = fields
            .iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}.", field),
                })
            })
            .collect();

        VerificationError::ValidationError(messages.join(" "))
    }
}
