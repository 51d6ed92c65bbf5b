// ABOUTME: Configuration management module for server and store settings
// ABOUTME: Groups environment parsing and database URL handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration comes from environment variables (optionally seeded from
//! a `.env` file). There is no configuration file.

/// Store location and pool settings
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, ServerConfig};
