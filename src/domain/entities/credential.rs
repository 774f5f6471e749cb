//! Domain entity representing a valid username/password pair.

/// A username/password pair accepted by the login endpoint.
///
/// Records are defined when the credential store is built and are never
/// mutated afterwards. Comparison is exact: case-sensitive, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Creates a new credential record.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let credential = Credential::new("admin", "1234");
    /// assert!(credential.matches("admin", "1234"));
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns `true` when both fields equal the given values exactly.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let credential = Credential::new("admin", "1234");

        assert_eq!(credential.username, "admin");
        assert_eq!(credential.password, "1234");
    }

    #[test]
    fn test_matches_exact_pair() {
        let credential = Credential::new("admin", "1234");

        assert!(credential.matches("admin", "1234"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let credential = Credential::new("admin", "1234");

        assert!(!credential.matches("Admin", "1234"));
        assert!(!credential.matches("ADMIN", "1234"));
    }

    #[test]
    fn test_matches_does_not_trim() {
        let credential = Credential::new("admin", "1234");

        assert!(!credential.matches(" admin", "1234"));
        assert!(!credential.matches("admin", "1234 "));
    }

    #[test]
    fn test_matches_requires_both_fields() {
        let credential = Credential::new("admin", "1234");

        assert!(!credential.matches("admin", "abcd"));
        assert!(!credential.matches("test", "1234"));
        assert!(!credential.matches("", ""));
    }
}
