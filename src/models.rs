// ABOUTME: Recipe domain types shared by the store, the service layer and the HTTP routes
// ABOUTME: Includes the tri-state field update type and the raw recipe request body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Models
//!
//! - [`Recipe`] is a stored record as returned to clients.
//! - [`RecipeInput`] is the raw request body of create and update calls.
//! - [`NewRecipe`] and [`RecipeChanges`] are the validated, normalized forms
//!   handed to the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier, never reused
    pub id: i64,
    /// Trimmed, non-empty title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Ordered ingredient lines, never empty when present
    pub ingredients: Option<Vec<String>>,
    /// Optional cooking instructions
    pub instructions: Option<String>,
    /// Preparation time in minutes
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    pub cook_time: Option<u32>,
    /// Number of servings
    pub servings: Option<u32>,
    /// Set by the store at creation
    pub created_at: DateTime<Utc>,
}

/// Validated recipe content ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewRecipe {
    /// Trimmed, non-empty title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Normalized ingredient lines
    pub ingredients: Option<Vec<String>>,
    /// Optional cooking instructions
    pub instructions: Option<String>,
    /// Preparation time in minutes
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    pub cook_time: Option<u32>,
    /// Number of servings
    pub servings: Option<u32>,
}

impl NewRecipe {
    /// Recipe with only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl From<Recipe> for NewRecipe {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
        }
    }
}

/// Caller intent for a single field of an update
///
/// JSON distinguishes a missing key from an explicit `null`; this type keeps
/// that distinction. Use with `#[serde(default)]` so missing keys become
/// [`FieldUpdate::Omitted`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Key absent from the request: leave the stored value alone
    #[default]
    Omitted,
    /// Key present with `null`: clear the stored value
    Null,
    /// Key present with a value: overwrite the stored value
    Value(T),
}

impl<T> FieldUpdate<T> {
    /// Whether the caller left this field out
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// Transform the carried value, keeping the intent
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Omitted => FieldUpdate::Omitted,
            Self::Null => FieldUpdate::Null,
            Self::Value(value) => FieldUpdate::Value(f(value)),
        }
    }

    /// Collapse omitted and null into `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Omitted | Self::Null => None,
        }
    }

    /// Resolve against the currently stored value
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Omitted => current,
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Ingredients as sent by clients
///
/// Forms send one text block, API clients usually send a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IngredientsInput {
    /// Already split into lines
    List(Vec<String>),
    /// Free text separated by commas or newlines
    Text(String),
}

/// Request body for create and update
///
/// Unknown keys (including `id` and `created_at`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeInput {
    /// Recipe title
    #[serde(default)]
    pub title: FieldUpdate<String>,
    /// Description
    #[serde(default)]
    pub description: FieldUpdate<String>,
    /// Ingredients as list or text block
    #[serde(default)]
    pub ingredients: FieldUpdate<IngredientsInput>,
    /// Instructions
    #[serde(default)]
    pub instructions: FieldUpdate<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: FieldUpdate<i64>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: FieldUpdate<i64>,
    /// Number of servings
    #[serde(default)]
    pub servings: FieldUpdate<i64>,
}

/// Validated partial update
///
/// `title` is never cleared, so it only needs "keep" or "replace".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeChanges {
    /// Replacement title
    pub title: Option<String>,
    /// Description change
    pub description: FieldUpdate<String>,
    /// Ingredients change
    pub ingredients: FieldUpdate<Vec<String>>,
    /// Instructions change
    pub instructions: FieldUpdate<String>,
    /// Prep time change
    pub prep_time: FieldUpdate<u32>,
    /// Cook time change
    pub cook_time: FieldUpdate<u32>,
    /// Servings change
    pub servings: FieldUpdate<u32>,
}

impl RecipeChanges {
    /// Whether applying these changes would leave a recipe untouched
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_omitted()
            && self.ingredients.is_omitted()
            && self.instructions.is_omitted()
            && self.prep_time.is_omitted()
            && self.cook_time.is_omitted()
            && self.servings.is_omitted()
    }

    /// Merge into the stored content, leaving omitted fields untouched
    #[must_use]
    pub fn merge_into(self, existing: NewRecipe) -> NewRecipe {
        NewRecipe {
            title: self.title.unwrap_or(existing.title),
            description: self.description.apply(existing.description),
            ingredients: self.ingredients.apply(existing.ingredients),
            instructions: self.instructions.apply(existing.instructions),
            prep_time: self.prep_time.apply(existing.prep_time),
            cook_time: self.cook_time.apply(existing.cook_time),
            servings: self.servings.apply(existing.servings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_update_distinguishes_missing_and_null() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"description": null, "prep_time": 10}"#).unwrap();

        assert!(input.title.is_omitted());
        assert_eq!(input.description, FieldUpdate::Null);
        assert_eq!(input.prep_time, FieldUpdate::Value(10));
        assert!(input.servings.is_omitted());
    }

    #[test]
    fn test_ingredients_accepts_text_or_list() {
        let text: RecipeInput =
            serde_json::from_str(r#"{"ingredients": "flour, sugar"}"#).unwrap();
        let list: RecipeInput =
            serde_json::from_str(r#"{"ingredients": ["flour", "sugar"]}"#).unwrap();

        assert_eq!(
            text.ingredients,
            FieldUpdate::Value(IngredientsInput::Text("flour, sugar".to_owned()))
        );
        assert_eq!(
            list.ingredients,
            FieldUpdate::Value(IngredientsInput::List(vec![
                "flour".to_owned(),
                "sugar".to_owned()
            ]))
        );
    }

    #[test]
    fn test_caller_supplied_id_is_ignored() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"id": 7, "created_at": "2020-01-01", "title": "Soup"}"#)
                .unwrap();
        assert_eq!(input.title, FieldUpdate::Value("Soup".to_owned()));
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let existing = NewRecipe {
            title: "X".to_owned(),
            description: Some("old".to_owned()),
            servings: Some(4),
            ..NewRecipe::default()
        };
        let changes = RecipeChanges {
            prep_time: FieldUpdate::Value(10),
            servings: FieldUpdate::Null,
            ..RecipeChanges::default()
        };

        let merged = changes.merge_into(existing);

        assert_eq!(merged.title, "X");
        assert_eq!(merged.description.as_deref(), Some("old"));
        assert_eq!(merged.prep_time, Some(10));
        assert_eq!(merged.servings, None);
    }

    #[test]
    fn test_empty_changes() {
        assert!(RecipeChanges::default().is_empty());
        let changes = RecipeChanges {
            cook_time: FieldUpdate::Null,
            ..RecipeChanges::default()
        };
        assert!(!changes.is_empty());
    }
}
