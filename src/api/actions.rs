//! Action names of the SendGrid v2 customer (subuser) endpoints.
//!
//! Each action is resolved beneath the client's base URL.

/// Create a subuser.
pub const CUSTOMER_ADD: &str = "customer.add.json";
/// Look up a subuser, or change its email address or username.
pub const CUSTOMER_PROFILE: &str = "customer.profile.json";
/// Change a subuser's password.
pub const CUSTOMER_PASSWORD: &str = "customer.password.json";
/// Delete a subuser.
pub const CUSTOMER_DELETE: &str = "customer.delete.json";
/// Re-enable a disabled subuser account.
pub const CUSTOMER_ENABLE: &str = "customer.enable.json";
/// Disable a subuser account.
pub const CUSTOMER_DISABLE: &str = "customer.disable.json";
/// Grant access to the SendGrid website.
pub const CUSTOMER_WEBSITE_ENABLE: &str = "customer.website_enable.json";
/// Revoke access to the SendGrid website.
pub const CUSTOMER_WEBSITE_DISABLE: &str = "customer.website_disable.json";
/// Assign or clear sending IPs.
pub const CUSTOMER_SEND_IP: &str = "customer.sendip.json";
/// List, configure, activate and deactivate apps.
pub const CUSTOMER_APPS: &str = "customer.apps.json";
/// Read the event notification URL.
pub const CUSTOMER_EVENT_POST_URL: &str = "customer.eventposturl.json";
/// Attach a monitor record.
pub const CUSTOMER_MONITOR: &str = "customer.monitor.json";
