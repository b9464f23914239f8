//! API credentials for SendGrid's v2 API.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the API user.
pub const API_USER_ENV: &str = "SENDGRID_API_USER";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SENDGRID_API_KEY";

/// The API user and key sent with every request.
///
/// The key is technically the account password. It is held as a
/// [`SecretString`] so it does not leak through `Debug` output.
///
/// # Example
///
/// ```
/// use sendgrid_subusers::Credentials;
///
/// let credentials = Credentials::new("my_username", "my_password");
/// assert_eq!(credentials.api_user(), "my_username");
/// assert!(!format!("{:?}", credentials).contains("my_password"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    api_user: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from an API user and key.
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Read credentials from `SENDGRID_API_USER` and `SENDGRID_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either variable is unset or not unicode.
    pub fn from_env() -> Result<Self> {
        let api_user = std::env::var(API_USER_ENV)
            .map_err(|e| Error::Config(format!("{}: {}", API_USER_ENV, e)))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|e| Error::Config(format!("{}: {}", API_KEY_ENV, e)))?;
        Ok(Self::new(api_user, api_key))
    }

    /// Get the API user.
    pub fn api_user(&self) -> &str {
        &self.api_user
    }

    /// Authentication pairs prepended to every query string.
    pub(crate) fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("api_user", self.api_user.as_str()),
            ("api_key", self.api_key.expose_secret()),
        ]
    }

    /// Annotation appended to 401 error messages.
    ///
    /// This deliberately exposes the key so a misconfigured caller can see
    /// what was sent.
    pub(crate) fn diagnostic(&self) -> String {
        format!(
            " (Attempted user '{}' with key '{}')",
            self.api_user,
            self.api_key.expose_secret()
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_key() {
        let debug_str = format!("{:?}", Credentials::new("acme", "super-secret-key"));

        assert!(!debug_str.contains("super-secret-key"));
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("acme"));
    }

    #[test]
    fn test_query_pairs_order() {
        let credentials = Credentials::new("acme", "key");
        assert_eq!(
            credentials.query_pairs(),
            [("api_user", "acme"), ("api_key", "key")]
        );
    }

    #[test]
    fn test_diagnostic_names_both_credentials() {
        let credentials = Credentials::new("acme", "key");
        assert_eq!(
            credentials.diagnostic(),
            " (Attempted user 'acme' with key 'key')"
        );
    }
}
