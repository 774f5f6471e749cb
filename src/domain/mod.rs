//! Domain layer: entities and repository contracts.
//!
//! # Modules
//!
//! - [`entities`] - Credential record
//! - [`repositories`] - Credential store interface

pub mod entities;
pub mod repositories;
