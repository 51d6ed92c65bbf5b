// ABOUTME: Persistence layer abstraction for recipe records
// ABOUTME: Defines the RecipeStore trait and picks the SQLite or PostgreSQL backend from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The store owns the single `recipes` table. Every operation is one SQL
//! statement, except [`RecipeStore::update`] which reads the current row
//! before writing the merged one. That read-modify-write is not atomic against
//! concurrent writers: two overlapping updates of the same recipe can lose one
//! of them.

/// `PostgreSQL` implementation of the recipe store
#[cfg(feature = "postgresql")]
pub mod postgres;
/// `SQLite` implementation of the recipe store
pub mod recipes;

#[cfg(feature = "postgresql")]
pub use postgres::PostgresRecipeStore;
pub use recipes::SqliteRecipeStore;

use crate::config::DatabaseConfig;
use crate::errors::AppResult;
use crate::models::{NewRecipe, Recipe, RecipeChanges};
use async_trait::async_trait;
use std::sync::Arc;

/// Durable storage of recipe records
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert a recipe, assigning its id and creation timestamp
    ///
    /// # Errors
    ///
    /// Returns a storage error on constraint violation or connectivity loss
    async fn create(&self, recipe: &NewRecipe) -> AppResult<Recipe>;

    /// All recipes, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    async fn get_all(&self) -> AppResult<Vec<Recipe>>;

    /// One recipe, `None` if the id is unknown
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Recipe>>;

    /// Merge the supplied changes into the stored recipe
    ///
    /// # Errors
    ///
    /// Returns not-found if the id is unknown, or a storage error
    async fn update(&self, id: i64, changes: &RecipeChanges) -> AppResult<Recipe>;

    /// Remove a recipe and return its id
    ///
    /// # Errors
    ///
    /// Returns not-found if the id is unknown, or a storage error
    async fn delete(&self, id: i64) -> AppResult<i64>;

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    async fn count(&self) -> AppResult<i64>;

    /// Check that the store answers
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store is unreachable
    async fn ping(&self) -> AppResult<()>;

    /// Whether the recipes table exists
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    async fn table_exists(&self) -> AppResult<bool>;

    /// Create the recipes table if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns a storage error if the schema cannot be created
    async fn migrate(&self) -> AppResult<()>;

    /// Short description of the backend for logs
    fn backend_info(&self) -> String;

    /// Release pooled connections
    async fn close(&self) {}
}

/// Build the store matching the configured URL, without connecting yet
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed, or if it names `PostgreSQL`
/// and the `postgresql` feature is not enabled
pub fn connect_lazy(config: &DatabaseConfig) -> AppResult<Arc<dyn RecipeStore>> {
    if config.url.is_postgresql() {
        #[cfg(feature = "postgresql")]
        return Ok(Arc::new(PostgresRecipeStore::connect_lazy(config)?));

        #[cfg(not(feature = "postgresql"))]
        {
            let err_msg = "PostgreSQL support not enabled. Enable the 'postgresql' feature flag.";
            tracing::error!("{}", err_msg);
            return Err(crate::errors::AppError::database(err_msg));
        }
    }
    Ok(Arc::new(SqliteRecipeStore::connect_lazy(config)?))
}
