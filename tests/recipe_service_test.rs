// ABOUTME: Integration tests for the recipe service on top of a real SQLite store
// ABOUTME: Checks which requests reach the store and how updates resolve against stored values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::init_test_logging;
use recipe_collection::{
    database::{RecipeStore, SqliteRecipeStore},
    errors::{AppResult, ErrorCode},
    models::{NewRecipe, Recipe, RecipeChanges, RecipeInput},
    services::RecipeService,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// SQLite store that counts write statements issued through `update`
struct CountingStore {
    inner: SqliteRecipeStore,
    updates: AtomicUsize,
}

#[async_trait]
impl RecipeStore for CountingStore {
    async fn create(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        self.inner.create(recipe).await
    }

    async fn get_all(&self) -> AppResult<Vec<Recipe>> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Recipe>> {
        self.inner.get_by_id(id).await
    }

    async fn update(&self, id: i64, changes: &RecipeChanges) -> AppResult<Recipe> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: i64) -> AppResult<i64> {
        self.inner.delete(id).await
    }

    async fn count(&self) -> AppResult<i64> {
        self.inner.count().await
    }

    async fn ping(&self) -> AppResult<()> {
        self.inner.ping().await
    }

    async fn table_exists(&self) -> AppResult<bool> {
        self.inner.table_exists().await
    }

    async fn migrate(&self) -> AppResult<()> {
        self.inner.migrate().await
    }

    fn backend_info(&self) -> String {
        self.inner.backend_info()
    }
}

async fn counting_service() -> (RecipeService, Arc<CountingStore>) {
    init_test_logging();
    let store = Arc::new(CountingStore {
        inner: SqliteRecipeStore::in_memory().await.unwrap(),
        updates: AtomicUsize::new(0),
    });
    (RecipeService::new(Arc::clone(&store) as Arc<dyn RecipeStore>), store)
}

fn input(json: serde_json::Value) -> RecipeInput {
    serde_json::from_value(json).unwrap()
}

#[tokio::test]
async fn test_update_without_effective_changes_skips_write() {
    let (service, store) = counting_service().await;
    let created = service
        .create(input(serde_json::json!({"title": "Soup", "servings": 2})))
        .await
        .unwrap();

    let unchanged = service
        .update(
            created.id,
            input(serde_json::json!({"servings": 0, "description": null})),
        )
        .await
        .unwrap();

    assert_eq!(unchanged, created);
    assert_eq!(store.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_without_changes_on_missing_recipe_is_not_found() {
    let (service, store) = counting_service().await;

    let err = service
        .update(404, input(serde_json::json!({})))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RecipeNotFound);
    assert_eq!(store.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_with_changes_writes_once() {
    let (service, store) = counting_service().await;
    let created = service
        .create(input(serde_json::json!({"title": "Soup"})))
        .await
        .unwrap();

    let updated = service
        .update(created.id, input(serde_json::json!({"prep_time": 10})))
        .await
        .unwrap();

    assert_eq!(updated.prep_time, Some(10));
    assert_eq!(updated.title, "Soup");
    assert_eq!(store.updates.load(Ordering::SeqCst), 1);
}
