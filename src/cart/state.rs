//! Cart State Management
//!
//! In-memory cart storage shared across handlers. Carts are transient; the
//! client of record is the mobile app, which re-syncs its cart wholesale.

use crate::pricing::CartLine;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing all active carts
#[derive(Default)]
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Vec<CartLine>>,
}

impl AppState {
    /// Creates a new AppState with no carts
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }
}
