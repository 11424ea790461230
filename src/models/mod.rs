// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod contact;
pub mod country;
pub mod verification;

pub use contact::*;
pub use country::*;
pub use verification::*;
