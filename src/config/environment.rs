// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, .env loading and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use super::database::DatabaseConfig;
use crate::constants::{defaults, env_config};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::{info, warn};

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Store configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but malformed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be served
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("HOST must not be empty");
        }
        if self.database.max_connections == 0 {
            bail!("Database pool needs at least one connection");
        }
        if self.database.url.is_memory() && self.database.max_connections > 1 {
            warn!("In-memory database is private to each connection, pool limited to one");
        }
        Ok(())
    }

    /// Socket address the HTTP server binds to
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a valid address
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.http_port);
        Ok(addr.parse()?)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Collection API Configuration:\n\
             - Bind: {}:{}\n\
             - Database: {}\n\
             - Pool: max {} connections, acquire timeout {}s\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.database.url,
            self.database.max_connections,
            self.database.acquire_timeout_secs,
            self.database.auto_migrate,
            self.cors.allowed_origins,
        )
    }
}
