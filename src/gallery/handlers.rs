//! REST API handler for gallery layout
//!
//! The mobile client posts its gallery and viewport-derived geometry here
//! whenever the gallery data changes, and renders the returned columns.

use super::models::GalleryImage;
use super::packer::pack_columns;
use crate::cart::state::SharedState;
use crate::error::InvalidInputError;
use axum::{response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;

/// Input for the gallery layout endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryLayoutInput {
    /// Images in discovery order, dimensions already resolved by the host
    pub images: Vec<GalleryImage>,

    pub column_count: usize,

    /// Content width of one column, computed by the host from its viewport
    pub column_width: f64,

    /// Vertical gap between images within a column
    #[serde(default)]
    pub spacing: f64,
}

/// Creates routes for gallery operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/gallery_layout", post(gallery_layout))
}

/// Endpoint: POST /gallery_layout
/// Packs the supplied images into balanced columns for rendering.
async fn gallery_layout(
    Json(payload): Json<GalleryLayoutInput>,
) -> Result<impl IntoResponse, InvalidInputError> {
    let assignment = pack_columns(
        &payload.images,
        payload.column_count,
        payload.column_width,
        payload.spacing,
    )?;

    Ok(Json(assignment))
}
