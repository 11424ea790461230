// src/handlers/auth.rs
// DOCUMENTATION: Request authentication helpers
// PURPOSE: Identify the calling user and guard admin endpoints

use crate::config::Config;
use crate::errors::VerificationError;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Header set by the upstream gateway after it authenticated the user
pub const USER_ID_HEADER: &str = "X-User-Id";

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// The authenticated caller
/// DOCUMENTATION: Extracted from X-User-Id; requests without a valid UUID get 401
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = VerificationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(user_from_request(req))
    }
}

fn user_from_request(req: &HttpRequest) -> Result<AuthenticatedUser, VerificationError> {
    let raw = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(VerificationError::Unauthorized)?;

    let id = Uuid::parse_str(raw.trim()).map_err(|_| {
        log::warn!("Request with malformed {} header", USER_ID_HEADER);
        VerificationError::Unauthorized
    })?;

    Ok(AuthenticatedUser { id })
}

/// Checks X-Admin-Token header against configured admin token
pub fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), VerificationError> {
    let token = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            VerificationError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(VerificationError::Forbidden);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_user_header_parsed() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .to_http_request();
        assert_eq!(user_from_request(&req).unwrap().id, id);
    }

    #[test]
    fn test_malformed_user_header_rejected() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        assert!(matches!(
            user_from_request(&req),
            Err(VerificationError::Unauthorized)
        ));
    }

    #[test]
    fn test_admin_token() {
        let config = Config::for_tests();

        let missing = TestRequest::default().to_http_request();
        assert!(matches!(
            verify_admin_token(&missing, &config),
            Err(VerificationError::Unauthorized)
        ));

        let wrong = TestRequest::default()
            .insert_header((ADMIN_TOKEN_HEADER, "nope"))
            .to_http_request();
        assert!(matches!(
            verify_admin_token(&wrong, &config),
            Err(VerificationError::Forbidden)
        ));

        let right = TestRequest::default()
            .insert_header((ADMIN_TOKEN_HEADER, "test-admin"))
            .to_http_request();
        assert!(verify_admin_token(&right, &config).is_ok());
    }
}
