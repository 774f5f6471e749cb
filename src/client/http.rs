//! HTTP client for the login endpoint.

use tracing::debug;

use crate::api::dto::login::{LoginRequest, LoginResult};

/// API base URL baked in at build time from `LOGIN_API_URL`.
pub const DEFAULT_API_URL: &str = match option_env!("LOGIN_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Errors raised while talking to the login endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for `POST {base_url}/login`.
///
/// One request per call: no retry and no timeout. Any HTTP status with a
/// `{ success, message }` body is a completed round trip, so a 401 comes
/// back as `Ok` with `success: false`.
#[derive(Debug, Clone)]
pub struct LoginClient {
    http: reqwest::Client,
    base_url: String,
}

impl LoginClient {
    /// Creates a client for the API at `base_url`. A trailing slash is
    /// ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts a credential pair and returns the decoded result.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response arrives (connection
    /// refused, reset, DNS failure).
    ///
    /// Returns [`ClientError::Decode`] if the response body is not a login
    /// result.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, ClientError> {
        let url = format!("{}/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest::new(username, password))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let result = response
            .json::<LoginResult>()
            .await
            .map_err(ClientError::Decode)?;

        debug!(%status, success = result.success, "Login response received");

        Ok(result)
    }
}

impl Default for LoginClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
