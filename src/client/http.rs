//! HTTP client implementation for the SendGrid v2 API.

use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{actions, Subuser};
use crate::auth::Credentials;
use crate::models::{lenient_value, SubuserProfile};
use crate::{Error, Params, Result};

use super::config::ClientConfig;

/// The main client for interacting with the SendGrid subuser API.
///
/// The client owns the account credentials and a pooled HTTP transport.
/// It creates and looks up subusers; everything else a subuser can do
/// goes through [`Subuser`], which routes its calls back through the
/// client it is attached to.
///
/// # Concurrency
///
/// Every operation issues at most one HTTP round-trip and awaits it before
/// returning. Cloning the client is cheap and clones share one
/// `reqwest::Client`, whose connection pool is safe to use from several
/// tasks at once. The client keeps no per-request state of its own.
///
/// # Example
///
/// ```no_run
/// use sendgrid_subusers::{SendGridClient, Subuser};
///
/// # async fn example() -> sendgrid_subusers::Result<()> {
/// let client = SendGridClient::new("my_username", "my_password")?;
///
/// let mut user = Subuser::new(
///     "wanted_username",
///     "password",
///     "email@example.com",
///     Some("email.domain.example.com"),
/// );
/// client.add_subuser(&mut user).await?;
/// user.assign_ips(&["1.2.3.4"]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SendGridClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: Url,
}

impl SendGridClient {
    /// Create a client with default configuration.
    ///
    /// New subusers will have website access revoked and debug output
    /// is off.
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_user, api_key), ClientConfig::default())
    }

    /// Create a client, choosing whether created subusers keep website
    /// access and whether diagnostic output is emitted.
    pub fn with_options(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        default_website_access: bool,
        debug: bool,
    ) -> Result<Self> {
        let config = ClientConfig::default()
            .with_default_website_access(default_website_access)
            .with_debug(debug);
        Self::with_config(Credentials::new(api_user, api_key), config)
    }

    /// Create a client with credentials read from the environment.
    ///
    /// See [`Credentials::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Create a client with explicit credentials and configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Base URL cannot hold API actions: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
                base_url,
            }),
        })
    }

    /// Get the credentials this client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Send a read-only API call.
    ///
    /// Issues a GET to `action` with the credentials and `params` in the
    /// query string and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] if the request could not be completed
    /// - [`Error::Transport`] if the body is empty or not JSON
    /// - [`Error::Api`] if the body carries an `error` object
    pub async fn retrieve(&self, action: &str, params: &Params) -> Result<Value> {
        self.inner.request(action, params, None).await
    }

    /// Send an API call that changes something.
    ///
    /// When `post_params` is given the call becomes a POST carrying them as
    /// a form body; `params` stay in the query string either way.
    ///
    /// # Errors
    ///
    /// As [`retrieve`](Self::retrieve), and additionally [`Error::Api`]
    /// when the body's `message` is anything but `"success"`.
    pub async fn execute(
        &self,
        action: &str,
        params: &Params,
        post_params: Option<&Params>,
    ) -> Result<Value> {
        if let Some(post) = post_params {
            self.debug(format!("Adding POST parameters: {:?}", post));
        }

        let body = self.inner.request(action, params, post_params).await?;

        if body.get("message").and_then(Value::as_str) != Some("success") {
            return Err(Error::from_failed_action(body));
        }

        Ok(body)
    }

    /// Create `subuser` on the account and attach this client to it.
    ///
    /// SendGrid grants website access to new subusers. Unless the client
    /// was configured with `default_website_access`, that access is
    /// revoked with a second call right after creation.
    pub async fn add_subuser(&self, subuser: &mut Subuser) -> Result<()> {
        self.debug(format!("Adding subuser '{}'", subuser.username()));
        self.execute(actions::CUSTOMER_ADD, &subuser.extract(), None)
            .await?;
        subuser.attach_api(self);

        if !self.inner.config.default_website_access {
            subuser.enable_website_access(false).await?;
        }

        Ok(())
    }

    /// Look up a subuser by exact username.
    ///
    /// SendGrid searches by substring, so the response may list several
    /// subusers; only an entry whose `username` equals `username` exactly
    /// is accepted. The returned subuser is already attached to this client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry matches exactly, or if the
    /// matching entry carries no profile fields.
    pub async fn get_subuser(&self, username: &str) -> Result<Subuser> {
        self.debug(format!("Getting subuser '{}'", username));
        let params = Params::new()
            .with("task", "get")
            .with("username", username);
        let data = self.retrieve(actions::CUSTOMER_PROFILE, &params).await?;

        let matched = data
            .as_array()
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|entry| {
                        entry.get("username").and_then(lenient_value).as_deref() == Some(username)
                    })
            })
            .ok_or_else(|| Error::NotFound(format!("No subuser '{}' found.", username)))?;

        let unexpected =
            || Error::NotFound(format!("Unexpected result when retrieving '{}'.", username));

        let has_profile = matched
            .as_object()
            .is_some_and(|fields| fields.keys().any(|key| key != "username"));
        if !has_profile {
            return Err(unexpected());
        }

        let profile: SubuserProfile =
            serde_json::from_value(matched.clone()).map_err(|_| unexpected())?;
        Ok(Subuser::from_profile(username, profile, self.clone()))
    }

    /// Emit a diagnostic message if debug output is enabled.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.inner.config.debug {
            tracing::info!(target: "sendgrid_subusers", "{}", msg.as_ref());
        }
    }
}

impl ClientInner {
    /// Resolve `action` beneath the base URL and append the query string.
    ///
    /// Credentials always come first, followed by `params` in order.
    pub(crate) fn build_url(&self, action: &str, params: &Params) -> Result<Url> {
        validate_action(action)?;
        let mut url = self.base_url.join(action)?;
        {
            let mut query = url.query_pairs_mut();
            query.extend_pairs(self.credentials.query_pairs());
            query.extend_pairs(params.to_pairs());
        }
        Ok(url)
    }

    /// Perform the request and apply the checks shared by every call.
    async fn request(
        &self,
        action: &str,
        params: &Params,
        post_params: Option<&Params>,
    ) -> Result<Value> {
        let url = self.build_url(action, params)?;

        if self.config.debug {
            tracing::info!(target: "sendgrid_subusers", "Querying URL: {}", redact(&url));
        }

        let request = match post_params {
            Some(post) => self.http.post(url).form(&post.to_pairs()),
            None => self.http.get(url),
        };

        let response = request.send().await?;
        tracing::trace!(action, status = response.status().as_u16(), "response received");

        let bytes = response.bytes().await?;
        let body = decode_body(&bytes)?;

        if body.get("error").is_some_and(|e| !e.is_null()) {
            return Err(Error::from_error_object(body, &self.credentials));
        }

        Ok(body)
    }
}

/// An action must be a single relative path segment, so that it always
/// resolves directly beneath the base URL and never to another host.
fn validate_action(action: &str) -> Result<()> {
    let forbidden = |c: char| matches!(c, '/' | '\\' | ':' | '?' | '#' | '%');
    if action.is_empty() || action == "." || action == ".." || action.contains(forbidden) {
        return Err(Error::InvalidInput(format!("Invalid API action: {:?}", action)));
    }
    Ok(())
}

fn decode_body(bytes: &[u8]) -> Result<Value> {
    if bytes.is_empty() {
        return Err(Error::Transport(
            "Error retrieving data. Empty response body".to_string(),
        ));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) => Err(Error::Transport(
            "Error retrieving data. Response body was null".to_string(),
        )),
        Ok(value) => Ok(value),
        Err(e) => Err(Error::Transport(format!(
            "Error retrieving data. No Internet connection? [{}]",
            e
        ))),
    }
}

/// Query keys whose values never reach the logs.
const REDACTED_KEYS: [&str; 3] = ["api_key", "password", "confirm_password"];

/// Copy of `url` with secret values masked, for logging.
fn redact(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if REDACTED_KEYS.contains(&k.as_ref()) {
                "[REDACTED]".into()
            } else {
                v
            };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

impl std::fmt::Debug for SendGridClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridClient")
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
