//! Error taxonomy for the storefront core.
//!
//! Both pure components reject malformed input synchronously; there are no
//! partial-failure states and nothing to retry. Callers should treat a
//! returned `InvalidInputError` as a programming/data error upstream, not a
//! transient condition.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Malformed input detected before any computation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("line {variant_id}: unit price must be a finite, non-negative amount (got {value})")]
    BadUnitPrice { variant_id: String, value: f64 },

    #[error("line {variant_id}: reference price must be a finite, non-negative amount (got {value})")]
    BadReferencePrice { variant_id: String, value: f64 },

    #[error("line {variant_id}: quantity must be at least 1")]
    ZeroQuantity { variant_id: String },

    #[error("duplicate cart line for variant {variant_id}")]
    DuplicateVariant { variant_id: String },

    #[error("{field} must be a finite, non-negative amount (got {value})")]
    BadPolicyAmount { field: &'static str, value: f64 },

    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("column width must be a finite, positive number (got {value})")]
    BadColumnWidth { value: f64 },

    #[error("spacing must be a finite, non-negative number (got {value})")]
    BadSpacing { value: f64 },
}

impl IntoResponse for InvalidInputError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
