// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory stores, wired resources and a one-shot HTTP request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_collection`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipe_collection::{
    config::ServerConfig,
    database::{RecipeStore, SqliteRecipeStore},
    resources::ServerResources,
    server::build_router,
};
use serde_json::Value;
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory store with the recipes table created
pub async fn create_test_store() -> Arc<SqliteRecipeStore> {
    init_test_logging();
    Arc::new(SqliteRecipeStore::in_memory().await.unwrap())
}

/// Resources wired on top of the given store with default configuration
pub fn create_test_resources(store: Arc<dyn RecipeStore>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(store, ServerConfig::default()))
}

/// Full router backed by a fresh in-memory store
pub async fn create_test_router() -> Router {
    let store = create_test_store().await;
    build_router(create_test_resources(store))
}

/// Send one request through the router and decode the JSON response
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

/// Send a pre-built request and decode the JSON response
pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Create a recipe through the API and return its id
pub async fn create_recipe(router: &Router, body: Value) -> i64 {
    let (status, json) = send(router, Method::POST, "/api/recipes", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
    json["data"]["id"].as_i64().unwrap()
}
