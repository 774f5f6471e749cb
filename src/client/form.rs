//! Login form state.

use std::fmt;
use tracing::debug;

use super::http::LoginClient;

/// Text shown when the login request fails to complete.
pub const FALLBACK_MESSAGE: &str = "Error";

/// State of the login form: the two input values and the displayed result.
///
/// `result` starts empty and is replaced on every submit.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    result: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently displayed.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Sends the current field values and replaces the displayed message.
    ///
    /// The server's `message` is shown verbatim whatever the `success` flag
    /// says. A transport failure or an unreadable response shows
    /// [`FALLBACK_MESSAGE`].
    pub async fn submit(&mut self, client: &LoginClient) -> &str {
        self.result = match client.login(&self.username, &self.password).await {
            Ok(result) => result.message,
            Err(e) => {
                debug!(error = %e, "Login request failed");
                FALLBACK_MESSAGE.to_string()
            }
        };

        &self.result
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .field("result", &self.result)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = LoginForm::new();

        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.result(), "");
    }

    #[test]
    fn test_debug_masks_password() {
        let form = LoginForm {
            username: "admin".to_string(),
            password: "1234".to_string(),
            result: String::new(),
        };

        let output = format!("{:?}", form);

        assert!(output.contains("admin"));
        assert!(!output.contains("1234"));
    }
}
