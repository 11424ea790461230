// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export repository components

pub mod contact_repository;
pub mod verification_repository;

pub use contact_repository::*;
pub use verification_repository::*;
