//! Subuser profile and per-subuser actions.

use serde_json::Value;

use crate::api::actions;
use crate::client::SendGridClient;
use crate::models::{SubuserProfile, PROFILE_PLACEHOLDER};
use crate::{Error, Params, Result};

/// Minimum number of characters SendGrid accepts for a password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A SendGrid subuser.
///
/// A `Subuser` is a plain profile record plus an optional handle to the
/// [`SendGridClient`] it belongs to. Constructing one does not create
/// anything remotely; pass it to [`SendGridClient::add_subuser`] for that,
/// or obtain an existing one with [`SendGridClient::get_subuser`].
///
/// Every action method needs an attached client and fails with
/// [`Error::NotAttached`] otherwise.
///
/// # Example
///
/// ```no_run
/// use sendgrid_subusers::{Params, SendGridClient};
///
/// # async fn example(client: SendGridClient) -> sendgrid_subusers::Result<()> {
/// let user = client.get_subuser("another_sub_username").await?;
///
/// let apps = user.get_apps().await?;
/// let settings = user.get_app_settings("eventnotify").await?;
///
/// user.enable_app(
///     "eventnotify",
///     true,
///     Some(&Params::new()
///         .with("bounce", true)
///         .with("url", "http://example.com/url-to-event-receiver")),
/// ).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Subuser {
    username: String,
    password: Option<String>,
    email: String,
    mail_domain: Option<String>,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    country: String,
    phone: String,
    website: String,
    client: Option<SendGridClient>,
}

impl Subuser {
    /// Create an unattached subuser. Optional profile fields default to `"-"`.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        mail_domain: Option<&str>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            email: email.into(),
            mail_domain: mail_domain.map(str::to_string),
            first_name: PROFILE_PLACEHOLDER.to_string(),
            last_name: PROFILE_PLACEHOLDER.to_string(),
            address: PROFILE_PLACEHOLDER.to_string(),
            city: PROFILE_PLACEHOLDER.to_string(),
            state: PROFILE_PLACEHOLDER.to_string(),
            zip: PROFILE_PLACEHOLDER.to_string(),
            country: PROFILE_PLACEHOLDER.to_string(),
            phone: PROFILE_PLACEHOLDER.to_string(),
            website: PROFILE_PLACEHOLDER.to_string(),
            client: None,
        }
    }

    /// Build an attached subuser from a lookup result. The lookup does not
    /// return a password.
    pub(crate) fn from_profile(
        username: &str,
        profile: SubuserProfile,
        client: SendGridClient,
    ) -> Self {
        let or_placeholder =
            |field: Option<String>| field.unwrap_or_else(|| PROFILE_PLACEHOLDER.to_string());

        Self {
            username: username.to_string(),
            password: None,
            email: profile.email.unwrap_or_default(),
            mail_domain: profile.mail_domain,
            first_name: or_placeholder(profile.first_name),
            last_name: or_placeholder(profile.last_name),
            address: or_placeholder(profile.address),
            city: or_placeholder(profile.city),
            state: or_placeholder(profile.state),
            zip: or_placeholder(profile.zip),
            country: or_placeholder(profile.country),
            phone: or_placeholder(profile.phone),
            website: or_placeholder(profile.website),
            client: Some(client),
        }
    }

    /// Set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Set the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the state or region.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Set the postal code.
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Only known for subusers constructed locally; lookups do not return it.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Mail domain, if one was given.
    pub fn mail_domain(&self) -> Option<&str> {
        self.mail_domain.as_deref()
    }

    /// First name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// City.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// State or region.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Postal code.
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// Country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Website.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Get the attached client, if any.
    pub fn client(&self) -> Option<&SendGridClient> {
        self.client.as_ref()
    }

    /// Returns `true` once a client has been attached.
    pub fn is_attached(&self) -> bool {
        self.client.is_some()
    }

    /// Attach a client. Calling this again replaces the previous one.
    pub fn attach_api(&mut self, client: &SendGridClient) {
        self.client = Some(client.clone());
    }

    /// Project the profile into the payload used to create the subuser.
    ///
    /// Fields appear in a fixed order, followed by `confirm_password`
    /// duplicating `password`. A missing password or mail domain is left out.
    pub fn extract(&self) -> Params {
        let mut params = Params::new().with("username", &self.username);
        if let Some(password) = &self.password {
            params.insert("password", password);
        }
        params.insert("email", &self.email);
        if let Some(mail_domain) = &self.mail_domain {
            params.insert("mail_domain", mail_domain);
        }

        let mut params = params
            .with("first_name", &self.first_name)
            .with("last_name", &self.last_name)
            .with("address", &self.address)
            .with("city", &self.city)
            .with("state", &self.state)
            .with("zip", &self.zip)
            .with("country", &self.country)
            .with("phone", &self.phone)
            .with("website", &self.website);

        if let Some(password) = &self.password {
            params.insert("confirm_password", password);
        }
        params
    }

    /// Assign sending IPs, or clear them all when `ips` is empty.
    pub async fn assign_ips<S: AsRef<str>>(&self, ips: &[S]) -> Result<()> {
        let client = self.require_client()?;
        let mut params = Params::new().with("task", "append");

        if ips.is_empty() {
            client.debug(format!("Clearing all IPs from '{}'", self.username));
            params.insert("set", "none");
        } else {
            let ips: Vec<String> = ips.iter().map(|ip| ip.as_ref().to_string()).collect();
            client.debug(format!("Assigning IPs to '{}': {:?}", self.username, ips));
            params.insert("set", "specify");
            params.insert("ip", ips);
        }

        self.execute(actions::CUSTOMER_SEND_IP, params, None).await?;
        Ok(())
    }

    /// Configure an app with `settings`, sent as the POST body.
    ///
    /// Settings differ per app; [`get_app_settings`](Self::get_app_settings)
    /// shows which ones an app takes.
    pub async fn configure_app(&self, app: &str, settings: &Params) -> Result<()> {
        let client = self.require_client()?;
        client.debug(format!("Configuring app '{}' for '{}'", app, self.username));

        let params = Params::new().with("task", "setup").with("name", app);
        self.execute(actions::CUSTOMER_APPS, params, Some(settings))
            .await?;
        Ok(())
    }

    /// List the apps available to the subuser.
    pub async fn get_apps(&self) -> Result<Value> {
        self.retrieve(actions::CUSTOMER_APPS, Params::new().with("task", "getavailable"))
            .await
    }

    /// Get the current settings of an app.
    pub async fn get_app_settings(&self, app: &str) -> Result<Value> {
        let client = self.require_client()?;
        client.debug(format!("Getting app '{}' settings for '{}'", app, self.username));

        let params = Params::new().with("task", "getsettings").with("name", app);
        self.retrieve(actions::CUSTOMER_APPS, params).await
    }

    /// Get the URL event notifications are posted to.
    pub async fn get_event_notification_url(&self) -> Result<Value> {
        self.retrieve(actions::CUSTOMER_EVENT_POST_URL, Params::new().with("task", "get"))
            .await
    }

    /// Attach the monitor record `name`, which must already exist.
    pub async fn add_monitoring(&self, name: &str) -> Result<()> {
        let client = self.require_client()?;
        client.debug(format!("Adding monitor '{}' to '{}'", name, self.username));

        let params = Params::new().with("task", "append").with("name", name);
        self.execute(actions::CUSTOMER_MONITOR, params, None).await?;
        Ok(())
    }

    /// Activate or deactivate an app.
    ///
    /// When activating with non-empty `settings`, the app is configured
    /// right after.
    pub async fn enable_app(
        &self,
        app: &str,
        enable: bool,
        settings: Option<&Params>,
    ) -> Result<()> {
        let client = self.require_client()?;
        let task = if enable { "activate" } else { "deactivate" };
        client.debug(format!(
            "Setting app '{}' to '{}' for '{}'",
            app, task, self.username
        ));

        let params = Params::new().with("task", task).with("name", app);
        self.execute(actions::CUSTOMER_APPS, params, None).await?;

        match settings {
            Some(settings) if enable && !settings.is_empty() => {
                self.configure_app(app, settings).await
            }
            _ => Ok(()),
        }
    }

    /// Grant or revoke access to the SendGrid website.
    pub async fn enable_website_access(&self, enable: bool) -> Result<()> {
        let action = if enable {
            actions::CUSTOMER_WEBSITE_ENABLE
        } else {
            actions::CUSTOMER_WEBSITE_DISABLE
        };
        self.execute(action, Params::new(), None).await?;
        Ok(())
    }

    /// Enable or disable the subuser account itself.
    pub async fn enable_subuser(&self, enable: bool) -> Result<()> {
        let action = if enable {
            actions::CUSTOMER_ENABLE
        } else {
            actions::CUSTOMER_DISABLE
        };
        self.execute(action, Params::new(), None).await?;
        Ok(())
    }

    /// Change the email address. The local copy changes only on success.
    pub async fn update_email(&mut self, email: &str) -> Result<()> {
        let params = Params::new().with("task", "setEmail").with("email", email);
        self.execute(actions::CUSTOMER_PROFILE, params, None).await?;
        self.email = email.to_string();
        Ok(())
    }

    /// Change the password.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without contacting SendGrid if the
    /// password is shorter than [`MIN_PASSWORD_LEN`] characters.
    pub async fn update_password(&self, password: &str) -> Result<()> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let params = Params::new()
            .with("password", password)
            .with("confirm_password", password);
        self.execute(actions::CUSTOMER_PASSWORD, params, None).await?;
        Ok(())
    }

    /// Change the username. The local copy changes only on success.
    pub async fn update_username(&mut self, username: &str) -> Result<()> {
        let params = Params::new()
            .with("task", "setUsername")
            .with("username", username);
        self.execute(actions::CUSTOMER_PROFILE, params, None).await?;
        self.username = username.to_string();
        Ok(())
    }

    /// Delete the subuser.
    pub async fn delete(&self) -> Result<()> {
        let client = self.require_client()?;
        client.debug(format!("Deleting subuser '{}'", self.username));
        self.execute(actions::CUSTOMER_DELETE, Params::new(), None).await?;
        Ok(())
    }

    fn require_client(&self) -> Result<&SendGridClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::NotAttached(self.username.clone()))
    }

    /// `{user: username}` overlaid with `params`.
    fn scoped(&self, params: Params) -> Params {
        Params::new().with("user", &self.username).merge(&params)
    }

    async fn retrieve(&self, action: &str, params: Params) -> Result<Value> {
        let client = self.require_client()?;
        client.retrieve(action, &self.scoped(params)).await
    }

    async fn execute(
        &self,
        action: &str,
        params: Params,
        post_params: Option<&Params>,
    ) -> Result<Value> {
        let client = self.require_client()?;
        client
            .execute(action, &self.scoped(params), post_params)
            .await
    }
}

impl std::fmt::Debug for Subuser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subuser")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email)
            .field("mail_domain", &self.mail_domain)
            .field("attached", &self.client.is_some())
            .finish()
    }
}
