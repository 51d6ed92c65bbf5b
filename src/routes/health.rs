// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root banner, liveness and store-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/api/health` only proves the process answers. `/api/ready` also probes
//! the store, so load balancers can hold traffic while it is down.

use crate::constants::{messages, paths, service_names};
use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::ROOT, get(Self::handle_root))
            .route(paths::HEALTH, get(Self::handle_health))
            .route(paths::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<Value> {
        Json(json!({ "message": messages::API_RUNNING }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": messages::HEALTH_OK,
            "message": messages::SERVER_RUNNING,
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> (StatusCode, Json<Value>) {
        match resources.store.ping().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "service": service_names::RECIPE_COLLECTION_API,
                    "version": service_names::SERVICE_VERSION,
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            ),
            Err(e) => {
                warn!("Readiness probe failed: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "unavailable",
                        "service": service_names::RECIPE_COLLECTION_API,
                        "timestamp": chrono::Utc::now().to_rfc3339(),
                    })),
                )
            }
        }
    }
}
