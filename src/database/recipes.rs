// ABOUTME: SQLite-backed recipe store built on an sqlx connection pool
// ABOUTME: Handles table bootstrap, CRUD statements and row decoding for recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeStore;
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::models::{NewRecipe, Recipe, RecipeChanges};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};
use std::str::FromStr;
use tracing::{debug, warn};

/// Recipe store backed by a pooled `SQLite` database
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
    url: String,
}

impl SqliteRecipeStore {
    /// Build a store whose connections are opened on first use
    ///
    /// Nothing touches the database here, so an unreachable store does not
    /// prevent startup; each operation fails on its own instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a `SQLite` one or cannot be parsed
    pub fn connect_lazy(config: &DatabaseConfig) -> AppResult<Self> {
        if config.url.is_postgresql() {
            return Err(AppError::database(format!(
                "{} is not a SQLite database URL",
                config.url
            )));
        }
        let url = config.url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| AppError::database(format!("Invalid database URL {url}: {e}")))?
            .create_if_missing(true);

        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!("Failed to create database directory {}: {e}", parent.display());
                }
            }
        }

        let pool_options = if config.url.is_memory() {
            // Every in-memory connection is a separate database: keep exactly one alive
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        Ok(Self { pool, url })
    }

    /// Fresh in-memory store with the table already created
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created
    pub async fn in_memory() -> AppResult<Self> {
        let store = Self::connect_lazy(&DatabaseConfig::in_memory())?;
        store.migrate().await?;
        Ok(store)
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn create(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        let ingredients_json = encode_ingredients(recipe.ingredients.as_deref())?;

        let row = sqlx::query(
            r"
            INSERT INTO recipes (
                title, description, ingredients, instructions, prep_time, cook_time, servings
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, ingredients, instructions,
                      prep_time, cook_time, servings, created_at
            ",
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&ingredients_json)
        .bind(&recipe.instructions)
        .bind(recipe.prep_time.map(i64::from))
        .bind(recipe.cook_time.map(i64::from))
        .bind(recipe.servings.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        row_to_recipe(&row)
    }

    async fn get_all(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, title, description, ingredients, instructions,
                   prep_time, cook_time, servings, created_at
            FROM recipes
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, title, description, ingredients, instructions,
                   prep_time, cook_time, servings, created_at
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe {id}: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    async fn update(&self, id: i64, changes: &RecipeChanges) -> AppResult<Recipe> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::recipe_not_found(id))?;

        let merged = changes.clone().merge_into(existing.into());
        let ingredients_json = encode_ingredients(merged.ingredients.as_deref())?;

        let row = sqlx::query(
            r"
            UPDATE recipes SET
                title = $1, description = $2, ingredients = $3, instructions = $4,
                prep_time = $5, cook_time = $6, servings = $7
            WHERE id = $8
            RETURNING id, title, description, ingredients, instructions,
                      prep_time, cook_time, servings, created_at
            ",
        )
        .bind(&merged.title)
        .bind(&merged.description)
        .bind(&ingredients_json)
        .bind(&merged.instructions)
        .bind(merged.prep_time.map(i64::from))
        .bind(merged.cook_time.map(i64::from))
        .bind(merged.servings.map(i64::from))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe {id}: {e}")))?;

        // Row vanished between read and write
        row.map_or_else(|| Err(AppError::recipe_not_found(id)), |r| row_to_recipe(&r))
    }

    async fn delete(&self, id: i64) -> AppResult<i64> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe {id}: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::recipe_not_found(id));
        }
        Ok(id)
    }

    async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(row.try_get("count")?)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database unreachable: {e}")))?;
        Ok(())
    }

    async fn table_exists(&self) -> AppResult<bool> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = 'recipes'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to inspect schema: {e}")))?;

        let count: i64 = row.try_get("count")?;
        Ok(count > 0)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(trim(title)) > 0),
                description TEXT,
                ingredients TEXT,
                instructions TEXT,
                prep_time INTEGER CHECK (prep_time IS NULL OR prep_time >= 0),
                cook_time INTEGER CHECK (cook_time IS NULL OR cook_time >= 0),
                servings INTEGER CHECK (servings IS NULL OR servings > 0),
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes (created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        debug!("Recipes table ready");
        Ok(())
    }

    fn backend_info(&self) -> String {
        format!("SQLite ({})", self.url)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Ingredients are stored as a JSON array, NULL when absent
fn encode_ingredients(ingredients: Option<&[String]>) -> AppResult<Option<String>> {
    Ok(ingredients.map(serde_json::to_string).transpose()?)
}

/// Convert a stored count column
fn column_to_count(row: &SqliteRow, column: &str) -> AppResult<Option<u32>> {
    let value: Option<i64> = row.try_get(column)?;
    value
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| AppError::internal(format!("Invalid {column} in database: {v}")))
        })
        .transpose()
}

/// Convert a database row to a Recipe struct
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let ingredients_json: Option<String> = row.try_get("ingredients")?;
    let created_at_str: String = row.try_get("created_at")?;

    let ingredients = ingredients_json
        .map(|json| serde_json::from_str::<Vec<String>>(&json))
        .transpose()?
        .filter(|items| !items.is_empty());

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        ingredients,
        instructions: row.try_get("instructions")?,
        prep_time: column_to_count(row, "prep_time")?,
        cook_time: column_to_count(row, "cook_time")?,
        servings: column_to_count(row, "servings")?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
