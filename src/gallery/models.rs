//! Gallery Domain Models

use serde::{Deserialize, Serialize};

/// Returns the default natural dimension (1) for images of unknown size
fn default_dimension() -> f64 {
    1.0
}

/// One image entry with its pre-fetched natural dimensions.
///
/// The host resolves dimensions before invoking the packer; an image whose
/// size could not be fetched arrives as the 1×1 square fallback rather than
/// an "unknown" sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    /// Unique image identifier
    pub url: String,

    #[serde(default = "default_dimension")]
    pub natural_width: f64,

    #[serde(default = "default_dimension")]
    pub natural_height: f64,
}

/// Output mapping from column index to image urls, top-to-bottom.
///
/// Every input image appears in exactly one column, and images already
/// assigned to a column are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnAssignment {
    pub columns: Vec<Vec<String>>,
}
