// ABOUTME: Unified error type and HTTP error envelope for the recipe API
// ABOUTME: Maps validation, not-found and storage failures onto status codes and JSON bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the service is an [`AppError`] carrying an [`ErrorCode`].
//! The code decides the HTTP status and the machine-checkable `error` string of
//! the response envelope; the message is the human-readable part.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::error;

/// Error categories used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Client sent a request that failed validation (400)
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// The addressed recipe does not exist (404)
    #[serde(rename = "RECIPE_NOT_FOUND")]
    RecipeNotFound,
    /// No route matches the requested path (404)
    #[serde(rename = "ROUTE_NOT_FOUND")]
    RouteNotFound,
    /// The store failed or is unreachable (500)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Anything else that went wrong on our side (500)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::RecipeNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category string reported in the `error` field of the envelope
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::ValidationError => "Validation error",
            Self::RecipeNotFound => "Recipe not found",
            Self::RouteNotFound => "Route not found",
            Self::DatabaseError => "Database error",
            Self::InternalError => "Internal server error",
        }
    }

    /// Whether the failure was caused by the server rather than the client
    #[must_use]
    pub const fn is_server_error(self) -> bool {
        matches!(self, Self::DatabaseError | Self::InternalError)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Validation failure caused by the request content
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Recipe with the given id does not exist
    #[must_use]
    pub fn recipe_not_found(id: i64) -> Self {
        Self::new(
            ErrorCode::RecipeNotFound,
            format!("Recipe with id {id} does not exist"),
        )
    }

    /// No route for the requested path
    pub fn route_not_found(path: impl fmt::Display) -> Self {
        Self::new(ErrorCode::RouteNotFound, format!("No route for {path}"))
    }

    /// Store operation failed
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Message safe to hand to clients
    ///
    /// Server-side failures never leak store internals; the detailed message
    /// only goes to the log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self.code {
            ErrorCode::DatabaseError => "Failed to access recipe storage".to_owned(),
            ErrorCode::InternalError => "An unexpected error occurred".to_owned(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.category(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub success: bool,
    /// Machine-checkable error category
    pub error: String,
    /// Human-readable explanation
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.code.category().to_owned(),
            message: error.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.is_server_error() {
            error!(
                error.code = ?self.code,
                error.message = %self.message,
                error.source = ?self.source,
                "Request failed"
            );
        }
        let status = self.http_status();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(format!("Database operation failed: {error}")).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {error}")).with_source(error)
    }
}
