//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Message returned when a credential pair matches.
pub const LOGIN_SUCCESSFUL_MESSAGE: &str = "Login successful!";

/// Message returned for any credential pair that does not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Request body for `POST /login`.
///
/// Both fields are optional at the wire level. A field that is missing,
/// `null`, or not a JSON string deserializes to `None` and never matches a
/// stored credential.
///
/// # Example
///
/// ```json
/// {
///   "username": "admin",
///   "password": "1234"
/// }
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub username: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Response body for `POST /login`, for both outcomes.
///
/// # Example
///
/// ```json
/// {
///   "success": false,
///   "message": "Invalid credentials"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
}

impl LoginResult {
    pub fn success() -> Self {
        Self {
            success: true,
            message: LOGIN_SUCCESSFUL_MESSAGE.to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
        }
    }
}
