//! In-process credential store backed by a fixed list.

use crate::domain::entities::Credential;
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Credentials accepted when no other list is supplied, in scan order.
pub const DEFAULT_CREDENTIALS: [(&str, &str); 2] = [("admin", "1234"), ("test", "abcd")];

/// Read-only credential store held in memory for the lifetime of the process.
///
/// Records are fixed at construction. Cloning shares the same list.
#[derive(Debug, Clone)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<[Credential]>,
}

impl InMemoryCredentialRepository {
    /// Creates a store over the given records, preserving their order.
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        let credentials: Arc<[Credential]> = credentials.into_iter().collect();
        debug!(count = credentials.len(), "Credential store initialized");
        Self { credentials }
    }

    /// Creates a store holding [`DEFAULT_CREDENTIALS`].
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_CREDENTIALS
                .iter()
                .map(|(username, password)| Credential::new(*username, *password)),
        )
    }
}

impl Default for InMemoryCredentialRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_match(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Credential>, AppError> {
        Ok(self
            .credentials
            .iter()
            .find(|credential| credential.matches(username, password))
            .cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.credentials.len())
    }
}
