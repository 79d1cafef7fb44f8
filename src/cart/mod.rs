//! Cart Domain Module
//!
//! Cart storage and the REST surface over it, including:
//! - Request/response models for the cart endpoints
//! - Line-merge helpers (aggregate quantities, drop emptied lines)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
