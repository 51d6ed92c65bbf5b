// ABOUTME: Route handlers for the recipe REST API
// ABOUTME: Provides list, get, create, update and delete endpoints over the recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Handlers only extract the request, call [`RecipeService`](crate::services::RecipeService)
//! and wrap the result in the success envelope. Rejected paths and bodies are
//! reported as validation errors.

use super::response::{DataResponse, ListResponse};
use crate::constants::{messages, paths};
use crate::errors::AppError;
use crate::models::RecipeInput;
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                paths::RECIPES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                paths::RECIPE_BY_ID,
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.list().await?;
        Ok((StatusCode::OK, Json(ListResponse::new(recipes))).into_response())
    }

    /// Handle GET /api/recipes/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = recipe_id(id)?;
        let recipe = resources.recipes.get(id).await?;
        Ok((StatusCode::OK, Json(DataResponse::new(recipe))).into_response())
    }

    /// Handle POST /api/recipes
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<RecipeInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let input = request_body(body)?;
        let recipe = resources.recipes.create(input).await?;
        Ok((
            StatusCode::CREATED,
            Json(DataResponse::with_message(recipe, messages::RECIPE_CREATED)),
        )
            .into_response())
    }

    /// Handle PUT /api/recipes/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
        body: Result<Json<RecipeInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id = recipe_id(id)?;
        let input = request_body(body)?;
        let recipe = resources.recipes.update(id, input).await?;
        Ok((
            StatusCode::OK,
            Json(DataResponse::with_message(recipe, messages::RECIPE_UPDATED)),
        )
            .into_response())
    }

    /// Handle DELETE /api/recipes/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = recipe_id(id)?;
        let deleted = resources.recipes.delete(id).await?;
        Ok((
            StatusCode::OK,
            Json(DataResponse::with_message(deleted, messages::RECIPE_DELETED)),
        )
            .into_response())
    }
}

/// Map a path rejection to a validation error
fn recipe_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::validation(format!("Invalid recipe id: {}", e.body_text())))
}

/// Map a body rejection to a validation error
fn request_body(body: Result<Json<RecipeInput>, JsonRejection>) -> Result<RecipeInput, AppError> {
    body.map(|Json(input)| input)
        .map_err(|e| AppError::validation(format!("Invalid request body: {}", e.body_text())))
}
