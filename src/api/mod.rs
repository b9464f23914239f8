//! Subuser operations.
//!
//! A [`Subuser`] carries its profile and routes every action through the
//! [`SendGridClient`](crate::SendGridClient) it is attached to.

pub mod actions;
mod subuser;

pub use subuser::{Subuser, MIN_PASSWORD_LEN};
