//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::AuthService;
use crate::domain::repositories::CredentialRepository;

/// State shared by all handlers.
///
/// Cloned per request; the service behind the `Arc` is never mutated.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn CredentialRepository>>,
}

impl AppState {
    /// Builds state around a credential store.
    pub fn new(repository: Arc<dyn CredentialRepository>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(repository)),
        }
    }
}
