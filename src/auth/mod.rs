//! Authentication for the SendGrid v2 API.
//!
//! The v2 API has no tokens or signed requests. Every call carries the
//! account's `api_user` and `api_key` as plain query parameters.
//!
//! ```
//! use sendgrid_subusers::Credentials;
//!
//! let credentials = Credentials::new("my_username", "my_password");
//! ```
//!
//! Credentials can also be read from the environment:
//!
//! ```no_run
//! use sendgrid_subusers::Credentials;
//!
//! # fn example() -> sendgrid_subusers::Result<()> {
//! let credentials = Credentials::from_env()?;
//! # Ok(())
//! # }
//! ```

mod credentials;

pub use credentials::{Credentials, API_KEY_ENV, API_USER_ENV};
