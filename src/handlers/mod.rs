// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin;
pub mod auth;
pub mod contacts;
pub mod countries;
pub mod health;
pub mod verification;

pub use admin::config as admin_config;
pub use contacts::config as contacts_config;
pub use countries::config as countries_config;
pub use health::config as health_config;
pub use verification::config as verification_config;

use crate::errors::VerificationError;
use actix_web::web;

/// JSON extractor settings shared by all routes
/// DOCUMENTATION: Malformed or mistyped bodies become 400 VALIDATION_ERROR
/// responses in the usual error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        VerificationError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}
