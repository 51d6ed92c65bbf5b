// ABOUTME: System-wide constants and environment-backed defaults for the recipe API
// ABOUTME: Contains service names, route paths, env variable lookups and response messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Service identity used in logs and startup output
pub mod service_names {
    /// Name of the HTTP service
    pub const RECIPE_COLLECTION_API: &str = "recipe-collection-api";

    /// Service version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Route paths exposed by the HTTP server
pub mod paths {
    /// Service banner
    pub const ROOT: &str = "/";
    /// Liveness check
    pub const HEALTH: &str = "/api/health";
    /// Readiness check (store reachable)
    pub const READY: &str = "/api/ready";
    /// Recipe collection
    pub const RECIPES: &str = "/api/recipes";
    /// Single recipe
    pub const RECIPE_BY_ID: &str = "/api/recipes/:id";
}

/// Default values for configuration
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default store location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default `PostgreSQL` port when only `DB_HOST` is given
    pub const DB_PORT: u16 = 5432;
    /// Default `PostgreSQL` database name
    pub const DB_NAME: &str = "api";
    /// Default `PostgreSQL` role
    pub const DB_USER: &str = "postgres";
    /// Default upper bound of pooled store connections
    pub const DB_MAX_CONNECTIONS: u32 = 10;
    /// Default pool acquire timeout in seconds
    pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;
    /// Allow every origin unless configured otherwise
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Environment-based configuration lookups
pub mod env_config {
    use super::defaults;
    use std::env;

    /// Get HTTP port from environment (`PORT`, then `HTTP_PORT`) or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("PORT")
            .or_else(|_| env::var("HTTP_PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::HTTP_PORT)
    }

    /// Get bind address from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_owned())
    }

    /// Get store URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.to_owned())
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }
}

/// Response messages of the HTTP API
pub mod messages {
    /// Banner returned by `GET /`
    pub const API_RUNNING: &str = "Recipe Collection API is running";
    /// Health status value
    pub const HEALTH_OK: &str = "OK";
    /// Health message
    pub const SERVER_RUNNING: &str = "Server is running";
    /// Successful create
    pub const RECIPE_CREATED: &str = "Recipe created successfully";
    /// Successful update
    pub const RECIPE_UPDATED: &str = "Recipe updated successfully";
    /// Successful delete
    pub const RECIPE_DELETED: &str = "Recipe deleted successfully";
}
