// src/handlers/contacts.rs
// DOCUMENTATION: HTTP handlers for confirmed contacts
// PURPOSE: Confirm, list, and remove the caller's contacts

use crate::config::Config;
use crate::errors::VerificationError;
use crate::handlers::auth::AuthenticatedUser;
use crate::models::ContactRequest;
use crate::services::ContactService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

/// POST /contacts
/// Confirm a phone number with the code sent to it
pub async fn confirm_contact(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    user: AuthenticatedUser,
    req: web::Json<ContactRequest>,
) -> Result<impl Responder, VerificationError> {
    let contact =
        ContactService::confirm(pool.get_ref(), config.get_ref(), user.id, req.into_inner())
            .await?;
    Ok(HttpResponse::Created().json(contact))
}

/// GET /contacts
pub async fn list_contacts(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, VerificationError> {
    let contacts = ContactService::list(pool.get_ref(), user.id).await?;
    Ok(HttpResponse::Ok().json(contacts))
}

/// DELETE /contacts/{id}
pub async fn delete_contact(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<impl Responder, VerificationError> {
    ContactService::delete(pool.get_ref(), user.id, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for contact routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contacts")
            .route("", web::post().to(confirm_contact))
            .route("", web::get().to(list_contacts))
            .route("/{id}", web::delete().to(delete_contact)),
    );
}

#[cfg(test)]
mod tests {
    use crate::handlers::auth::USER_ID_HEADER;
    use crate::handlers::test_support::{error_message, test_app};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_blank_code() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contacts")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .set_json(json!({
                "country_number": "82",
                "phone_number": "01012345678",
                "code": ""
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(resp).await, "Enter the verification code.");
    }

    #[actix_web::test]
    async fn test_object_field_is_a_validation_error() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::post()
            .uri("/contacts")
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .set_json(json!({
                "country_number": 82,
                "phone_number": ["010"],
                "code": "1234"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(resp).await.starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn test_list_requires_user() {
        let app = test::init_service(test_app()).await;
        let req = test::TestRequest::get().uri("/contacts").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
