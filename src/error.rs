//! Error types for the SendGrid subuser API client.
//!
//! SendGrid's v2 API reports failures inside the JSON body rather than
//! through HTTP status codes, in one of two envelopes:
//!
//! - `{"error": {"code": 401, "message": "..."}}` for rejected retrievals
//! - `{"message": "error", "errors": ["..."]}` for failed actions
//!
//! Both are surfaced as [`Error::Api`].

use serde_json::Value;
use thiserror::Error;

use crate::auth::Credentials;

/// A specialized `Result` type for SendGrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all SendGrid API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection refused, DNS, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was empty or not valid JSON
    #[error("Transport error: {0}")]
    Transport(String),

    /// API returned an error envelope
    #[error("API error: {message}")]
    Api {
        /// Numeric error code, present only for the `error` object envelope
        code: Option<i64>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Subuser lookup found no exact match
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A subuser action was invoked before a client was attached
    #[error("Subuser '{0}' is not attached to a client")]
    NotAttached(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the request never produced a usable JSON body.
    ///
    /// # Example
    ///
    /// ```
    /// use sendgrid_subusers::Error;
    ///
    /// let err = Error::Transport("empty body".into());
    /// assert!(err.is_transport_error());
    /// ```
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Transport(_))
    }

    /// Returns `true` if SendGrid reported the failure.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns `true` if a subuser lookup came back empty.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns `true` if the failure was detected locally, before any
    /// request was sent.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::NotAttached(_) | Error::Config(_) | Error::UrlParse(_)
        )
    }

    /// Build an error from the `{"error": {"code", "message"}}` envelope.
    ///
    /// A 401 is annotated with the credentials that were attempted.
    pub(crate) fn from_error_object(body: Value, credentials: &Credentials) -> Self {
        let error = body.get("error");

        let raw_code = error.and_then(|e| e.get("code"));
        let code = raw_code.and_then(code_as_i64);

        let mut message = error
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        if code == Some(401) {
            message.push_str(&credentials.diagnostic());
        }

        let shown = match raw_code {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        message.push_str(&format!(" [Code: {}]", shown));

        Error::Api {
            code,
            message,
            body,
        }
    }

    /// Build an error from a `{"message": <not success>, "errors": [...]}`
    /// envelope. Only the first entry of `errors` is reported.
    pub(crate) fn from_failed_action(body: Value) -> Self {
        let message = body
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|errors| errors.first())
            .map(|first| match first.as_str() {
                Some(s) => s.to_string(),
                None => first.to_string(),
            })
            .unwrap_or_else(|| "Unknown API error".to_string());

        Error::Api {
            code: None,
            message,
            body,
        }
    }
}

// Codes arrive either as numbers or as numeric strings.
fn code_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("acme", "hunter22")
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::Transport("empty".into()).is_transport_error());
        assert!(Error::NotFound("bob".into()).is_not_found());
        assert!(Error::InvalidInput("short".into()).is_client_error());
        assert!(Error::NotAttached("bob".into()).is_client_error());
        assert!(!Error::NotFound("bob".into()).is_client_error());
    }

    #[test]
    fn test_from_error_object() {
        let body = serde_json::json!({
            "error": {
                "code": 400,
                "message": "Bad request"
            }
        });

        match Error::from_error_object(body, &credentials()) {
            Error::Api { code, message, .. } => {
                assert_eq!(code, Some(400));
                assert_eq!(message, "Bad request [Code: 400]");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_error_object_unauthorized_names_credentials() {
        let body = serde_json::json!({
            "error": { "code": 401, "message": "Permission denied, wrong credentials" }
        });

        let err = Error::from_error_object(body, &credentials());
        let message = match err {
            Error::Api { message, .. } => message,
            other => panic!("Expected Api error, got {:?}", other),
        };
        assert!(message.starts_with("Permission denied, wrong credentials"));
        assert!(message.contains("acme"));
        assert!(message.contains("hunter22"));
        assert!(message.ends_with(" [Code: 401]"));
    }

    #[test]
    fn test_from_error_object_string_code() {
        let body = serde_json::json!({ "error": { "code": "401", "message": "denied" } });

        match Error::from_error_object(body, &credentials()) {
            Error::Api { code, .. } => assert_eq!(code, Some(401)),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_failed_action_uses_first_error() {
        let body = serde_json::json!({
            "message": "error",
            "errors": ["Username already exists", "Second problem"]
        });

        match Error::from_failed_action(body) {
            Error::Api { code, message, .. } => {
                assert_eq!(code, None);
                assert_eq!(message, "Username already exists");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_failed_action_without_errors() {
        let body = serde_json::json!({ "message": "error" });

        match Error::from_failed_action(body) {
            Error::Api { message, .. } => assert_eq!(message, "Unknown API error"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
