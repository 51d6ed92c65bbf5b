// ABOUTME: Integration tests for the root banner, health and readiness endpoints
// ABOUTME: Checks liveness payloads and the store-backed readiness probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use common::{create_test_resources, create_test_router, init_test_logging, send};
use recipe_collection::{
    database::RecipeStore,
    errors::{AppError, AppResult},
    models::{NewRecipe, Recipe, RecipeChanges},
    server::build_router,
};
use std::sync::Arc;

/// Store that is never reachable
struct OfflineStore;

#[async_trait]
impl RecipeStore for OfflineStore {
    async fn create(&self, _recipe: &NewRecipe) -> AppResult<Recipe> {
        Err(AppError::database("connection refused"))
    }

    async fn get_all(&self) -> AppResult<Vec<Recipe>> {
        Err(AppError::database("connection refused"))
    }

    async fn get_by_id(&self, _id: i64) -> AppResult<Option<Recipe>> {
        Err(AppError::database("connection refused"))
    }

    async fn update(&self, _id: i64, _changes: &RecipeChanges) -> AppResult<Recipe> {
        Err(AppError::database("connection refused"))
    }

    async fn delete(&self, _id: i64) -> AppResult<i64> {
        Err(AppError::database("connection refused"))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::database("connection refused"))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }

    async fn table_exists(&self) -> AppResult<bool> {
        Err(AppError::database("connection refused"))
    }

    async fn migrate(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }

    fn backend_info(&self) -> String {
        "offline".to_owned()
    }
}

#[tokio::test]
async fn test_root_banner() {
    let router = create_test_router().await;

    let (status, body) = send(&router, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe Collection API is running");
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_test_router().await;

    let (status, body) = send(&router, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn test_ready_when_store_answers() {
    let router = create_test_router().await;

    let (status, body) = send(&router, Method::GET, "/api/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["service"], "recipe-collection-api");
}

#[tokio::test]
async fn test_offline_store_fails_requests_but_not_liveness() {
    init_test_logging();
    let router = build_router(create_test_resources(Arc::new(OfflineStore)));

    let (status, _) = send(&router, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");

    let (status, body) = send(&router, Method::GET, "/api/recipes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Database error");
    assert!(!body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_validation_never_reaches_offline_store() {
    init_test_logging();
    let router = build_router(create_test_resources(Arc::new(OfflineStore)));

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/recipes",
        Some(serde_json::json!({"title": " "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}
