// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for maintenance operations
// PURPOSE: Expose verification statistics and manual purge via REST endpoints

use crate::config::Config;
use crate::db::{ContactRepository, VerificationRepository};
use crate::errors::VerificationError;
use crate::handlers::auth::verify_admin_token;
use crate::services::{pin, VerificationService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;

/// Response for stats endpoint
#[derive(Debug, Serialize)]
pub struct VerificationStatsResponse {
    /// Confirmed contacts across all users
    pub contacts: i64,
    /// Codes still inside their lifetime
    pub awaiting_verifications: i64,
    /// Expired codes not yet purged
    pub inactive_verifications: i64,
}

/// GET /admin/stats
/// Requires admin authentication via X-Admin-Token header
pub async fn stats(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, VerificationError> {
    verify_admin_token(&req, &config)?;

    let cutoff = pin::expiry_cutoff(Utc::now(), config.pin_lifetime_secs);
    let contacts = ContactRepository::count(pool.get_ref()).await?;
    let (awaiting, inactive) = VerificationRepository::count_by_state(pool.get_ref(), cutoff).await?;

    Ok(HttpResponse::Ok().json(VerificationStatsResponse {
        contacts,
        awaiting_verifications: awaiting,
        inactive_verifications: inactive,
    }))
}

/// POST /admin/verifications/purge
/// Remove expired verifications immediately
pub async fn purge_verifications(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, VerificationError> {
    verify_admin_token(&req, &config)?;

    let purged = VerificationService::purge_inactive(pool.get_ref(), config.pin_lifetime_secs).await?;
    log::info!("Admin purge removed {} inactive verifications", purged);

    Ok(HttpResponse::Ok().json(serde_json::json!({ "purged": purged })))
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/stats", web::get().to(stats))
            .route("/verifications/purge", web::post().to(purge_verifications)),
    );
}
