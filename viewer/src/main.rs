//! repoviz viewer
//!
//! Terminal front end for the repoviz API. Type a GitHub username to load
//! the profile dashboard and repository map; `:help` lists the commands.
//! Searches run in the background and only the latest one is shown.

mod client;
mod command;
mod config;
mod dashboard;
mod error;
mod map;
mod models;
mod runner;
mod search;
mod session;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use client::RepovizClient;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for the views)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(api_url = %config.api_url, "Starting repoviz viewer");

    let client = RepovizClient::new(&config.api_url)?;

    runner::run(
        client,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
