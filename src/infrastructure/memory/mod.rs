//! In-memory implementations of domain repositories.

mod in_memory_credential_repository;

pub use in_memory_credential_repository::{DEFAULT_CREDENTIALS, InMemoryCredentialRepository};
