// ABOUTME: Main library entry point for the Recipe Collection API
// ABOUTME: Exposes the recipe store, service layer, HTTP routes and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Collection API
//!
//! A small JSON REST service for storing and managing cooking recipes.
//!
//! ## Architecture
//!
//! - **Database**: the [`RecipeStore`](database::RecipeStore) trait and its `SQLite` implementation
//! - **Services**: validation and normalization of recipe input
//! - **Routes**: thin axum handlers wrapping results in the response envelope
//! - **Server**: router assembly, middleware and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_collection::config::ServerConfig;
//! use recipe_collection::database::{RecipeStore, SqliteRecipeStore};
//! use recipe_collection::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = SqliteRecipeStore::connect_lazy(&config.database)?;
//!     store.migrate().await?;
//!
//!     let resources = Arc::new(ServerResources::new(Arc::new(store), config));
//!     recipe_collection::server::run(resources).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Recipe persistence
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Recipe domain types
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Recipe business logic
pub mod services;
