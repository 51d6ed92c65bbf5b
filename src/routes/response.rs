// ABOUTME: Success envelopes shared by the recipe endpoints
// ABOUTME: Every successful body carries success=true next to its data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Envelope for a single item
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Confirmation for mutating calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Plain payload without a message
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Payload with a confirmation message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Envelope for a collection
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Number of items in `data`
    pub count: usize,
    /// Payload
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Wrap a collection, deriving the count from it
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
