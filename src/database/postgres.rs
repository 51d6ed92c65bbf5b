// ABOUTME: PostgreSQL-backed recipe store, compiled with the postgresql feature
// ABOUTME: Mirrors the SQLite store with native BIGSERIAL ids and TIMESTAMPTZ creation times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecipeStore;
use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{NewRecipe, Recipe, RecipeChanges};
use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgRow},
    PgPool, Row,
};
use std::str::FromStr;
use tracing::debug;

/// Recipe store backed by a pooled `PostgreSQL` database
#[derive(Clone)]
pub struct PostgresRecipeStore {
    pool: PgPool,
    display_url: String,
}

impl PostgresRecipeStore {
    /// Build a store whose connections are opened on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed
    pub fn connect_lazy(config: &DatabaseConfig) -> AppResult<Self> {
        let display_url = config.url.redacted();
        let options = PgConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::database(format!("Invalid database URL {display_url}: {e}")))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        Ok(Self { pool, display_url })
    }
}

#[async_trait]
impl RecipeStore for PostgresRecipeStore {
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
            r"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = 'recipes'
            ) AS present
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to inspect schema: {e}")))?;

        Ok(row.try_get("present")?)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL CHECK (length(trim(title)) > 0),
                description TEXT,
                ingredients TEXT,
                instructions TEXT,
                prep_time BIGINT CHECK (prep_time IS NULL OR prep_time >= 0),
                cook_time BIGINT CHECK (cook_time IS NULL OR cook_time >= 0),
                servings BIGINT CHECK (servings IS NULL OR servings > 0),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
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
        format!("PostgreSQL ({})", self.display_url)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn encode_ingredients(ingredients: Option<&[String]>) -> AppResult<Option<String>> {
    Ok(ingredients.map(serde_json::to_string).transpose()?)
}

fn column_to_count(row: &PgRow, column: &str) -> AppResult<Option<u32>> {
    let value: Option<i64> = row.try_get(column)?;
    value
        .map(|v| {
            u32::try_from(v)
                .map_err(|_| AppError::internal(format!("Invalid {column} in database: {v}")))
        })
        .transpose()
}

fn row_to_recipe(row: &PgRow) -> AppResult<Recipe> {
    let ingredients_json: Option<String> = row.try_get("ingredients")?;
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
        created_at: row.try_get("created_at")?,
    })
}
