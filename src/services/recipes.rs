// ABOUTME: Recipe business logic extracted from route handlers
// ABOUTME: Validates and normalizes request bodies, then delegates persistence to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe validation, normalization and orchestration
//!
//! The same rules apply to create and update:
//!
//! - titles are trimmed and must not be blank
//! - text fields are trimmed, blank text means "absent"
//! - numeric zero means "absent", negative numbers are rejected
//! - ingredients may be a list or one text block split on commas and
//!   newlines; an empty result means "absent"
//!
//! On update only a value that survives normalization replaces the stored
//! one. A field left out, sent as `null`, or normalizing to absent (blank
//! text, no ingredients, zero) keeps its stored value. The title can never be
//! cleared.

use crate::database::RecipeStore;
use crate::errors::{AppError, AppResult};
use crate::models::{FieldUpdate, IngredientsInput, NewRecipe, Recipe, RecipeChanges, RecipeInput};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

const TITLE_REQUIRED: &str = "Title is required and cannot be empty";

/// Confirmation returned after a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecipe {
    /// Id of the removed recipe
    pub id: i64,
    /// Always `true`
    pub deleted: bool,
}

/// Split and clean ingredient input
///
/// Returns `None` when nothing survives, never an empty list.
#[must_use]
pub fn normalize_ingredients(input: IngredientsInput) -> Option<Vec<String>> {
    let items: Vec<String> = match input {
        IngredientsInput::Text(text) => text
            .split([',', '\n'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        IngredientsInput::List(list) => list
            .into_iter()
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect(),
    };

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Trim free text, blank text becomes `None`
#[must_use]
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Validate a title that the caller supplied
///
/// # Errors
///
/// Returns a validation error if the title is null or blank
pub fn normalize_title(title: Option<&str>) -> AppResult<String> {
    title
        .and_then(normalize_text)
        .ok_or_else(|| AppError::validation(TITLE_REQUIRED))
}

/// Validate a count of minutes or servings
///
/// Zero means "not specified".
///
/// # Errors
///
/// Returns a validation error for negative values or values too large to store
pub fn normalize_count(field: &str, value: i64) -> AppResult<Option<u32>> {
    if value < 0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    if value == 0 {
        return Ok(None);
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| AppError::validation(format!("{field} is too large")))
}

/// Normalize a text field, blank values mean absent
fn text_update(update: FieldUpdate<String>) -> FieldUpdate<String> {
    match update {
        FieldUpdate::Value(text) => normalize_text(&text).into(),
        FieldUpdate::Null => FieldUpdate::Null,
        FieldUpdate::Omitted => FieldUpdate::Omitted,
    }
}

/// Normalize an ingredients field, an empty result means absent
fn ingredients_update(update: FieldUpdate<IngredientsInput>) -> FieldUpdate<Vec<String>> {
    match update {
        FieldUpdate::Value(input) => normalize_ingredients(input).into(),
        FieldUpdate::Null => FieldUpdate::Null,
        FieldUpdate::Omitted => FieldUpdate::Omitted,
    }
}

/// Normalize a numeric field, zero means absent
fn count_update(field: &str, update: FieldUpdate<i64>) -> AppResult<FieldUpdate<u32>> {
    match update {
        FieldUpdate::Value(value) => Ok(normalize_count(field, value)?.into()),
        FieldUpdate::Null => Ok(FieldUpdate::Null),
        FieldUpdate::Omitted => Ok(FieldUpdate::Omitted),
    }
}

/// Only a present value replaces the stored one on update
fn keep_unless_value<T>(update: FieldUpdate<T>) -> FieldUpdate<T> {
    match update {
        FieldUpdate::Value(value) => FieldUpdate::Value(value),
        FieldUpdate::Null | FieldUpdate::Omitted => FieldUpdate::Omitted,
    }
}

/// Turn a create request into insertable content
///
/// # Errors
///
/// Returns a validation error if the title is missing or blank, or a numeric
/// field is out of range
pub fn validate_new_recipe(input: RecipeInput) -> AppResult<NewRecipe> {
    let title = normalize_title(input.title.into_option().as_deref())?;
    let prep_time = count_update("prep_time", input.prep_time)?.into_option();
    let cook_time = count_update("cook_time", input.cook_time)?.into_option();
    let servings = count_update("servings", input.servings)?.into_option();

    Ok(NewRecipe {
        title,
        description: text_update(input.description).into_option(),
        ingredients: ingredients_update(input.ingredients).into_option(),
        instructions: text_update(input.instructions).into_option(),
        prep_time,
        cook_time,
        servings,
    })
}

/// Turn an update request into a set of changes
///
/// # Errors
///
/// Returns a validation error if a title is present but null or blank, or a
/// numeric field is out of range
pub fn validate_changes(input: RecipeInput) -> AppResult<RecipeChanges> {
    let title = match input.title {
        FieldUpdate::Omitted => None,
        FieldUpdate::Null => return Err(AppError::validation(TITLE_REQUIRED)),
        FieldUpdate::Value(title) => Some(normalize_title(Some(title.as_str()))?),
    };

    Ok(RecipeChanges {
        title,
        description: keep_unless_value(text_update(input.description)),
        ingredients: keep_unless_value(ingredients_update(input.ingredients)),
        instructions: keep_unless_value(text_update(input.instructions)),
        prep_time: keep_unless_value(count_update("prep_time", input.prep_time)?),
        cook_time: keep_unless_value(count_update("cook_time", input.cook_time)?),
        servings: keep_unless_value(count_update("servings", input.servings)?),
    })
}

/// Recipe operations exposed to the HTTP layer
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    /// Create a service backed by the given store
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// List every recipe, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be queried
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let recipes = self.store.get_all().await?;
        debug!(count = recipes.len(), "Listed recipes");
        Ok(recipes)
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// Returns not-found if no recipe has this id, or a storage error
    pub async fn get(&self, id: i64) -> AppResult<Recipe> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    /// Validate and store a new recipe
    ///
    /// # Errors
    ///
    /// Returns a validation error before touching the store, or a storage error
    pub async fn create(&self, input: RecipeInput) -> AppResult<Recipe> {
        let new_recipe = validate_new_recipe(input)?;
        let recipe = self.store.create(&new_recipe).await?;
        info!(recipe.id = recipe.id, recipe.title = %recipe.title, "Recipe created");
        Ok(recipe)
    }

    /// Validate and apply a partial update
    ///
    /// # Errors
    ///
    /// Returns a validation error before touching the store, not-found if the
    /// recipe does not exist, or a storage error
    pub async fn update(&self, id: i64, input: RecipeInput) -> AppResult<Recipe> {
        let changes = validate_changes(input)?;
        if changes.is_empty() {
            debug!(recipe.id = id, "Update without changes, returning stored recipe");
            return self.get(id).await;
        }
        let recipe = self.store.update(id, &changes).await?;
        info!(recipe.id = recipe.id, "Recipe updated");
        Ok(recipe)
    }

    /// Delete a recipe
    ///
    /// # Errors
    ///
    /// Returns not-found if the recipe does not exist, or a storage error
    pub async fn delete(&self, id: i64) -> AppResult<DeletedRecipe> {
        let id = self.store.delete(id).await?;
        info!(recipe.id = id, "Recipe deleted");
        Ok(DeletedRecipe { id, deleted: true })
    }
}
