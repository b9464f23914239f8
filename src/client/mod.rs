//! HTTP client for the SendGrid v2 API.
//!
//! This module provides the main entry point [`SendGridClient`].
//!
//! # Example
//!
//! ```no_run
//! use sendgrid_subusers::{Params, SendGridClient};
//!
//! # async fn example() -> sendgrid_subusers::Result<()> {
//! let client = SendGridClient::new("my_username", "my_password")?;
//!
//! // Any action can be called directly
//! let profile = client
//!     .retrieve(
//!         "customer.profile.json",
//!         &Params::new().with("task", "get").with("username", "alice"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod params;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::SendGridClient;
pub use params::{ParamValue, Params};
