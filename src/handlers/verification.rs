// src/handlers/verification.rs
// DOCUMENTATION: HTTP handler for requesting a verification code

use crate::config::Config;
use crate::errors::VerificationError;
use crate::handlers::auth::AuthenticatedUser;
use crate::models::VerificationRequest;
use crate::services::{PinRequestLimiter, SmsClient, VerificationService};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /contact-verifications
/// Send a one-time code to a phone number
pub async fn request_code(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    sms: web::Data<SmsClient>,
    limiter: web::Data<PinRequestLimiter>,
    user: AuthenticatedUser,
    req: web::Json<VerificationRequest>,
) -> Result<impl Responder, VerificationError> {
    let response = VerificationService::request_code(
        pool.get_ref(),
        config.get_ref(),
        sms.get_ref(),
        limiter.get_ref(),
        user.id,
        req.into_inner(),
    )
    .await?;

    Ok(HttpResponse::Created().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact-verifications", web::post().to(request_code));
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{error_message, test_app};
    use crate::handlers::auth::USER_ID_HEADER;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_requires_user() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contact-verifications")
            .set_json(json!({"country_number": "82", "phone_number": "01012345678"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_blank_phone_number() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contact-verifications")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .set_json(json!({"country_number": "82", "phone_number": ""}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "Enter a phone number.");
    }

    #[actix_web::test]
    async fn test_numeric_country_number_is_accepted() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contact-verifications")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .set_json(json!({"country_number": 82, "phone_number": ""}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "Enter a phone number.");
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contact-verifications")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"country_number\": ")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn test_missing_country_number() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contact-verifications")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .set_json(json!({"phone_number": "01012345678"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "Enter a country number.");
    }
}
