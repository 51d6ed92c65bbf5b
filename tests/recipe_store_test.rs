// ABOUTME: Integration tests for the SQLite recipe store
// ABOUTME: Covers CRUD, ordering, schema bootstrap, file-backed persistence and store errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_store, init_test_logging};
use recipe_collection::{
    config::{DatabaseConfig, DatabaseUrl},
    database::{self, RecipeStore, SqliteRecipeStore},
    errors::ErrorCode,
    models::{FieldUpdate, NewRecipe, RecipeChanges},
};
use tempfile::TempDir;

fn pancakes() -> NewRecipe {
    NewRecipe {
        description: Some("Fluffy".into()),
        ingredients: Some(vec!["flour".into(), "milk".into(), "eggs".into()]),
        instructions: Some("Whisk and fry".into()),
        prep_time: Some(5),
        cook_time: Some(15),
        servings: Some(4),
        ..NewRecipe::titled("Pancakes")
    }
}

#[tokio::test]
async fn test_create_and_get_by_id() {
    let store = create_test_store().await;

    let created = store.create(&pancakes()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Pancakes");
    assert_eq!(created.ingredients.as_deref().map(<[String]>::len), Some(3));

    let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let store = create_test_store().await;
    assert!(store.get_by_id(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_all_newest_first() {
    let store = create_test_store().await;

    let a = store.create(&NewRecipe::titled("A")).await.unwrap();
    let b = store.create(&NewRecipe::titled("B")).await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b.id, a.id]);
    assert!(all[0].created_at >= all[1].created_at);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_update_merges_changes() {
    let store = create_test_store().await;
    let created = store.create(&pancakes()).await.unwrap();

    let changes = RecipeChanges {
        title: Some("Crepes".into()),
        ingredients: FieldUpdate::Null,
        cook_time: FieldUpdate::Value(3),
        ..RecipeChanges::default()
    };
    let updated = store.update(created.id, &changes).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "Crepes");
    assert_eq!(updated.ingredients, None);
    assert_eq!(updated.cook_time, Some(3));
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.servings, created.servings);
}

#[tokio::test]
async fn test_update_without_changes_keeps_record() {
    let store = create_test_store().await;
    let created = store.create(&pancakes()).await.unwrap();

    let updated = store
        .update(created.id, &RecipeChanges::default())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = create_test_store().await;

    let err = store
        .update(42, &RecipeChanges::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RecipeNotFound);
}

#[tokio::test]
async fn test_delete_twice() {
    let store = create_test_store().await;
    let created = store.create(&NewRecipe::titled("Gone")).await.unwrap();

    assert_eq!(store.delete(created.id).await.unwrap(), created.id);
    let err = store.delete(created.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RecipeNotFound);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_title_rejected_by_schema() {
    let store = create_test_store().await;

    let err = store.create(&NewRecipe::titled("   ")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    init_test_logging();
    let store = SqliteRecipeStore::connect_lazy(&DatabaseConfig::in_memory()).unwrap();

    assert!(!store.table_exists().await.unwrap());
    store.migrate().await.unwrap();
    store.migrate().await.unwrap();
    assert!(store.table_exists().await.unwrap());
}

#[tokio::test]
async fn test_missing_table_is_storage_error() {
    init_test_logging();
    let store = SqliteRecipeStore::connect_lazy(&DatabaseConfig::in_memory()).unwrap();

    store.ping().await.unwrap();
    let err = store.get_all().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
}

#[tokio::test]
async fn test_file_database_persists_across_pools() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: dir.path().join("nested").join("recipes.db"),
        },
        ..DatabaseConfig::default()
    };

    let store = SqliteRecipeStore::connect_lazy(&config).unwrap();
    store.migrate().await.unwrap();
    let created = store.create(&pancakes()).await.unwrap();
    store.close().await;

    let reopened = SqliteRecipeStore::connect_lazy(&config).unwrap();
    let fetched = reopened.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(reopened.backend_info().contains("recipes.db"));
    reopened.close().await;
}

#[cfg(not(feature = "postgresql"))]
#[test]
fn test_postgres_store_requires_feature() {
    let config = DatabaseConfig {
        url: DatabaseUrl::parse_url("postgresql://postgres@localhost:5432/api").unwrap(),
        ..DatabaseConfig::default()
    };

    let err = database::connect_lazy(&config).err().unwrap();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert!(err.message.contains("'postgresql' feature"));
}

#[tokio::test]
async fn test_factory_builds_sqlite_store() {
    let store = database::connect_lazy(&DatabaseConfig::in_memory()).unwrap();
    store.migrate().await.unwrap();

    assert!(store.backend_info().starts_with("SQLite"));
    assert!(store.table_exists().await.unwrap());
    store.close().await;
}
