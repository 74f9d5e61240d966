use std::io;

use bulksms::{BulkSmsClient, GatewayConfig, MessageText, Recipients, SendRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bulksms=debug")),
        )
        .init();

    // BULKSMS_URL, BULKSMS_USERNAME and BULKSMS_PASSWORD (or a bulksms.toml file).
    let config = GatewayConfig::load()?;

    let numbers = std::env::var("BULKSMS_DEMO_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BULKSMS_DEMO_NUMBERS environment variable is required",
        )
    })?;
    let message = std::env::var("BULKSMS_DEMO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the bulksms demo.".to_owned());

    let client = BulkSmsClient::from_config(&config)?;
    let outcome = client
        .send_sms(SendRequest::new(
            Recipients::new(numbers),
            MessageText::new(message),
        ))
        .await?;

    println!(
        "status_code: {}, description: {:?}, success: {}",
        outcome.status_code.as_i32(),
        outcome.description,
        outcome.is_success()
    );

    Ok(())
}
