//! Gallery Domain Module
//!
//! Masonry layout for vendor image galleries: the image models, the greedy
//! column packer, and the REST handler exposing it.

pub mod handlers;
pub mod models;
pub mod packer;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{ColumnAssignment, GalleryImage};
pub use packer::pack_columns;
