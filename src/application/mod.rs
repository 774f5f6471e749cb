//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential pair checks

pub mod services;
