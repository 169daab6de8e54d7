use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod discord;
mod errors;
mod models;
mod secrets;
mod utils;

use crate::cli::Cli;
use crate::models::BuildContext;
use crate::secrets::EnvSecrets;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is a local-run convenience; Jenkins injects real variables.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("discord_notify=info".parse()?),
        )
        .init();

    let request = Cli::parse().into_request();
    let context = BuildContext::from_env();

    let status = discord::send_notification(&request, &context, &EnvSecrets).await?;
    info!("notification delivered (HTTP {})", status);
    Ok(())
}
