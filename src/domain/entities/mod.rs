//! Core domain entities.

pub mod credential;

pub use credential::Credential;
