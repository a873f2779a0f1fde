//! Apex Inventory - interactive sell/restock console

use anyhow::{Context, Result};
use apex_inventory::{cli::Session, config::AppConfig, seed};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // stdout carries the session protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env();
    let inventory = seed::default_inventory().context("building startup inventory")?;
    tracing::debug!(products = inventory.len(), service = %config.service_name, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), inventory, config).run()?;
    Ok(())
}
