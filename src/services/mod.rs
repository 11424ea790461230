// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod contact_service;
pub mod maintenance;
pub mod phone;
pub mod pin;
pub mod rate_limiter;
pub mod sms_client;
pub mod verification_service;

pub use contact_service::*;
pub use maintenance::*;
pub use rate_limiter::*;
pub use sms_client::SmsClient;
pub use verification_service::*;
