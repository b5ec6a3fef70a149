mod adapters;
mod params;
mod relay;

use adapters::{HttpRelaySender, MemoryDocument};
use anyhow::Context as _;
use relay::trigger::RelayTrigger;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relaytrigger=info".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = params::Params::new()?;
    info!(?params, "Application parameters loaded");

    let endpoint =
        url::Url::parse(&params.relay_endpoint).context("Parsing RELAY_ENDPOINT URL")?;
    let sender = Arc::new(HttpRelaySender::new(
        endpoint,
        Duration::from_secs(params.http_timeout),
        Duration::from_secs(params.http_connect_timeout),
        params.insecure_mode,
    )?);
    let document = Arc::new(MemoryDocument::new());
    let trigger = RelayTrigger::new(sender, document.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [command, display_name] if command == "configuration" => {
            trigger
                .notify_configuration_button_clicked(display_name)
                .await;
        }
        [command] if command == "rewards" => {
            trigger.notify_rewards_collected().await;
        }
        _ => {
            anyhow::bail!("Usage: relaytrigger configuration <display-name> | relaytrigger rewards")
        }
    }

    let content = document.content();
    if !content.is_empty() {
        println!("{content}");
    }

    Ok(())
}
