//! Campus Records Portal Admin Client
//!
//! A terminal front end over the portal's REST backend: students, employees,
//! and blogs with nested comments. Collections are fetched whole and reloaded
//! wholesale after every successful mutation.

mod client;
mod config;
mod errors;
mod models;
mod notify;
mod pages;
mod session;
mod store;
mod ui;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portal admin client");
    tracing::info!("API root: {}", config.api_url);

    let http = reqwest::Client::new();
    let shell = ui::Shell::new(http, config.api_url);
    shell.run().await?;

    Ok(())
}
