// ABOUTME: Shared resource container handed to every route as axum state
// ABOUTME: Bundles the recipe store, the recipe service and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::RecipeStore;
use crate::services::RecipeService;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Built once at startup and shared behind an `Arc`; cloning it only bumps
/// reference counts.
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence backend
    pub store: Arc<dyn RecipeStore>,
    /// Validation and orchestration on top of the store
    pub recipes: RecipeService,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the service layer on top of a store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>, config: ServerConfig) -> Self {
        Self {
            recipes: RecipeService::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }
}
