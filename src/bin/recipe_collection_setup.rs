// ABOUTME: Database setup utility for the Recipe Collection API
// ABOUTME: Verifies connectivity, creates the recipes table and reports the stored recipe count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database setup binary
//!
//! ```bash
//! cargo run --bin recipe-collection-setup
//! cargo run --bin recipe-collection-setup -- --check-only
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use recipe_collection::{
    config::{DatabaseConfig, DatabaseUrl},
    database,
    logging,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "recipe-collection-setup")]
#[command(about = "Prepare the Recipe Collection database")]
struct Args {
    /// Report the database state without creating anything
    #[arg(long)]
    check_only: bool,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded: {e}");
    }
    logging::init_from_env()?;

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }

    let store = database::connect_lazy(&config)?;
    info!("Checking {}", store.backend_info());

    if let Err(e) = store.ping().await {
        error!("Database unreachable: {e}");
        bail!("Database unreachable");
    }
    info!("Database connection OK");

    let exists = store.table_exists().await?;
    if exists {
        info!("Recipes table present");
    } else if args.check_only {
        warn!("Recipes table missing, run without --check-only to create it");
        store.close().await;
        return Ok(());
    } else {
        store.migrate().await?;
        info!("Recipes table created");
    }

    let count = store.count().await?;
    info!("Recipes stored: {count}");

    store.close().await;
    Ok(())
}
