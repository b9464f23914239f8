//! Client configuration options.

use std::time::Duration;

/// Root URL of the SendGrid v2 API.
pub const DEFAULT_BASE_URL: &str = "https://sendgrid.com/apiv2/";

/// Configuration for the SendGrid client.
///
/// # Example
///
/// ```
/// use sendgrid_subusers::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0")
///     .with_debug(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL that action names are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Whether newly created subusers keep access to the SendGrid website
    pub default_website_access: bool,
    /// Whether to emit diagnostic messages
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "sendgrid-subusers/{} (Rust)",
                env!("CARGO_PKG_VERSION")
            ),
            default_website_access: false,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different API root.
    ///
    /// A trailing `/` is added if missing, so that actions resolve
    /// beneath the given path rather than replacing its last segment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Keep (or revoke) website access for subusers created through
    /// [`SendGridClient::add_subuser`](crate::SendGridClient::add_subuser).
    pub fn with_default_website_access(mut self, enabled: bool) -> Self {
        self.default_website_access = enabled;
        self
    }

    /// Enable or disable diagnostic output.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}
