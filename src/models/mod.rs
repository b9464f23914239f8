//! Data models for the SendGrid subuser API.
//!
//! Most endpoints return free-form JSON that is handed back to the caller
//! as `serde_json::Value`. The subuser lookup is the exception: its entries
//! are parsed into [`SubuserProfile`] to build a [`Subuser`](crate::Subuser).

pub mod subuser;

pub use subuser::{SubuserProfile, PROFILE_PLACEHOLDER};
pub(crate) use subuser::lenient_value;
