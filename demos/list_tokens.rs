//! Token listing example.
//!
//! Authenticates with a token (or a username and password), lists the
//! caller's tokens, and walks every account's SMS gateways.
//!
//! Run with: SMS_TOKEN=... cargo run --example list_tokens

use rdcom_rs::client::DEFAULT_BASE_URL;
use rdcom_rs::{ClientConfig, RdcomClient};

#[tokio::main]
async fn main() -> rdcom_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let endpoint = std::env::var("SMS_ENDPOINT").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let mut builder = ClientConfig::builder().with_base_url(&endpoint).with_debug(true);
    if let Ok(token) = std::env::var("SMS_TOKEN") {
        builder = builder.with_auth_token(token);
    } else if let (Ok(username), Ok(password)) =
        (std::env::var("SMS_USERNAME"), std::env::var("SMS_PASSWORD"))
    {
        builder = builder.with_user_credentials(username, password);
    }

    println!("Connecting to {}...", endpoint);
    let client = RdcomClient::new(builder.build()?)?;

    let tokens = client.tokens().list().await?;
    println!("\nFound {} token(s):", tokens.len());
    for token in &tokens {
        match token.expiry_date {
            Some(expiry) => println!("  - {} (expires on {})", token.token, expiry.to_rfc3339()),
            None => println!("  - {} (no expiration)", token.token),
        }
    }

    for account in client.accounts().list().await? {
        let gateways = client.sms_gateways().list(&account.code).await?;
        println!("\n{} ({}): {} SMS gateway(s)", account.name, account.code, gateways.len());
        for gateway in &gateways {
            println!(
                "  - #{} {}{}",
                gateway.id,
                gateway.gateway_type,
                if gateway.is_default { " (default)" } else { "" }
            );
        }
    }

    client.close();
    println!("\nDone!");
    Ok(())
}
