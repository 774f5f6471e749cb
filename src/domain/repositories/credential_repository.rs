//! Repository trait for credential lookup.

use crate::domain::entities::Credential;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the set of valid credentials.
///
/// The store is read-only: there are no operations that create, update or
/// remove records, so implementations can be shared across requests without
/// locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryCredentialRepository`] - fixed in-process list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Finds the first record whose username and password both equal the
    /// given values exactly.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(credential))` for the first matching record
    /// - `Ok(None)` when no record matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store cannot be read.
    async fn find_match(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Credential>, AppError>;

    /// Returns the number of records in the store.
    async fn count(&self) -> Result<usize, AppError>;
}
