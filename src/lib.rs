//! # sendgrid-subusers
//!
//! An async Rust client for the subuser management endpoints of SendGrid's
//! v2 API.
//!
//! Two types do all the work:
//!
//! - [`SendGridClient`] holds the account credentials and the HTTP
//!   transport. It creates subusers and looks them up.
//! - [`Subuser`] holds a subuser's profile. Once attached to a client it
//!   can assign IPs, manage apps, change its email, username or password,
//!   toggle website access and delete itself.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sendgrid_subusers::{Params, SendGridClient, Subuser};
//!
//! #[tokio::main]
//! async fn main() -> sendgrid_subusers::Result<()> {
//!     let client = SendGridClient::new("my_username", "my_password")?;
//!
//!     // Describe the subuser, then create it
//!     let mut user = Subuser::new(
//!         "wanted_username",
//!         "password",
//!         "email@example.com",
//!         Some("email.domain.example.com"),
//!     );
//!     client.add_subuser(&mut user).await?;
//!
//!     user.assign_ips(&["1.2.3.4"]).await?;
//!
//!     // Enable and configure an app in one go
//!     let settings = Params::new()
//!         .with("bounce", true)
//!         .with("spamreport", true)
//!         .with("url", "http://example.com/url-to-event-receiver");
//!     user.enable_app("eventnotify", true, Some(&settings)).await?;
//!
//!     // Or work with an existing subuser
//!     let other = client.get_subuser("another_sub_username").await?;
//!     println!("{}", other.get_apps().await?);
//!     other.delete().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`Result`]. SendGrid reports failures inside the
//! JSON body, and both of its envelopes become [`Error::Api`]. Nothing is
//! retried.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use api::Subuser;
pub use auth::Credentials;
pub use client::{ClientConfig, ParamValue, Params, SendGridClient};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sendgrid_subusers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{actions, Subuser};
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, ParamValue, Params, SendGridClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::SubuserProfile;
}
