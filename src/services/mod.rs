// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Holds recipe validation and normalization shared by create and update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract the request, call a service and
//! shape the response. Business rules live here.

/// Recipe validation, normalization and store orchestration
pub mod recipes;

pub use recipes::{DeletedRecipe, RecipeService};
