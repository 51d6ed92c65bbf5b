// ABOUTME: Route module organization for the recipe API HTTP endpoints
// ABOUTME: Groups health and recipe routes plus the shared response envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe API
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Recipe CRUD routes
pub mod recipes;
/// Success envelopes
pub mod response;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
pub use response::{DataResponse, ListResponse};
