//! Authentication service for credential checks.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::Credential;
use crate::domain::repositories::CredentialRepository;
use crate::error::AppError;

/// Service checking a username/password pair against a credential store.
///
/// The repository is injected at construction and only ever read, so one
/// instance can serve any number of concurrent requests.
pub struct AuthService<R: CredentialRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CredentialRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Checks a credential pair.
    ///
    /// A missing username or password never matches and skips the store
    /// lookup entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if either field is missing or
    /// no stored record matches both fields exactly.
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Credential, AppError> {
        let (Some(username), Some(password)) = (username, password) else {
            warn!(
                username_present = username.is_some(),
                password_present = password.is_some(),
                "Login rejected: missing credentials"
            );
            return Err(AppError::InvalidCredentials);
        };

        match self.repository.find_match(username, password).await? {
            Some(credential) => {
                info!(username = %credential.username, "Login successful");
                Ok(credential)
            }
            None => {
                warn!(username = %username, "Login rejected: invalid credentials");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCredentialRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_find_match()
            .withf(|username, password| username == "admin" && password == "1234")
            .times(1)
            .returning(|username, password| Ok(Some(Credential::new(username, password))));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login(Some("admin"), Some("1234")).await;

        assert_eq!(result.unwrap(), Credential::new("admin", "1234"));
    }

    #[tokio::test]
    async fn test_login_no_match() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_find_match()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login(Some("admin"), Some("wrong")).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_missing_fields_skip_lookup() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo.expect_find_match().times(0);

        let service = AuthService::new(Arc::new(mock_repo));

        let missing_password = service.login(Some("admin"), None).await;
        let missing_username = service.login(None, Some("1234")).await;
        let missing_both = service.login(None, None).await;

        assert!(matches!(
            missing_password.unwrap_err(),
            AppError::InvalidCredentials
        ));
        assert!(matches!(
            missing_username.unwrap_err(),
            AppError::InvalidCredentials
        ));
        assert!(matches!(
            missing_both.unwrap_err(),
            AppError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_login_empty_strings_are_looked_up() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_find_match()
            .withf(|username, password| username.is_empty() && password.is_empty())
            .times(1)
            .returning(|_, _| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login(Some(""), Some("")).await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_store_error_propagates() {
        let mut mock_repo = MockCredentialRepository::new();

        mock_repo
            .expect_find_match()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Store unavailable", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login(Some("admin"), Some("1234")).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
