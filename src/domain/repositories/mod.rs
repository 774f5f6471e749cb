//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for testing.

pub mod credential_repository;

pub use credential_repository::CredentialRepository;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
