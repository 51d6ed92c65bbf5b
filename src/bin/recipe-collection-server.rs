// ABOUTME: Server binary for the Recipe Collection API
// ABOUTME: Loads configuration, prepares the recipe store and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Collection API Server Binary
//!
//! Starts the HTTP API. An unreachable store is logged but does not stop the
//! server; requests then fail one by one until the store comes back.

use anyhow::Result;
use clap::Parser;
use recipe_collection::{
    config::{DatabaseUrl, ServerConfig},
    database,
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "recipe-collection-server")]
#[command(about = "Recipe Collection API - JSON REST service for cooking recipes")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let store = database::connect_lazy(&config.database)?;
    info!("Database configured: {}", store.backend_info());

    match store.ping().await {
        Ok(()) => info!("Database connection verified"),
        Err(e) => warn!("Database unavailable at startup, requests will fail until it recovers: {e}"),
    }

    if config.database.auto_migrate {
        if let Err(e) = store.migrate().await {
            warn!("Failed to prepare recipes table: {e}");
        }
    }

    let resources = Arc::new(ServerResources::new(store, config));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
