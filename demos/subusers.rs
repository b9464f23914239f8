//! Subuser management walkthrough.
//!
//! Creates a subuser, assigns it an IP, enables and configures the event
//! notification app, then looks up another subuser, inspects its apps and
//! deletes it.
//!
//! Run with: cargo run --example subusers
//!
//! Set `SENDGRID_DEBUG=1` to see every request the client makes.

use sendgrid_subusers::{ClientConfig, Credentials, Params, SendGridClient, Subuser};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> sendgrid_subusers::Result<()> {
    // Initialize logging, showing info-level output unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Reads SENDGRID_API_USER and SENDGRID_API_KEY
    let credentials = Credentials::from_env()?;
    let debug = std::env::var("SENDGRID_DEBUG").is_ok();
    let config = ClientConfig::default().with_debug(debug);
    let client = SendGridClient::with_config(credentials, config)?;

    // Describe the subuser without creating it yet
    let mut user = Subuser::new(
        "wanted_username",
        "password",
        "email@example.com",
        Some("email.domain.example.com"),
    )
    .with_first_name("Wanted")
    .with_last_name("User");

    client.add_subuser(&mut user).await?;
    println!("Created subuser '{}'", user.username());

    user.assign_ips(&["1.2.3.4"]).await?;

    let settings = Params::new()
        .with("processed", false)
        .with("dropped", true)
        .with("deferred", false)
        .with("delivered", false)
        .with("bounce", true)
        .with("click", false)
        .with("open", false)
        .with("unsubscribe", false)
        .with("spamreport", true)
        .with("url", "http://example.com/url-to-event-receiver");
    user.enable_app("eventnotify", true, Some(&settings)).await?;

    // Instead of creating a user, retrieve an existing one
    let other = client.get_subuser("another_sub_username").await?;
    println!("Found subuser '{}' <{}>", other.username(), other.email());

    let apps = other.get_apps().await?;
    println!("Available apps: {}", apps);

    let settings = other.get_app_settings("eventnotify").await?;
    println!("eventnotify settings: {}", settings);

    other.delete().await?;
    println!("Deleted subuser '{}'", other.username());

    Ok(())
}
