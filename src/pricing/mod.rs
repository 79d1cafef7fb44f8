//! Order Pricing Domain Module
//!
//! Derives an [`OrderSummary`] (totals, savings, delivery charge and
//! minimum-order progress) from a cart's lines and a vendor's delivery
//! policy. The derivation is a pure function the host re-runs on every cart
//! or policy change.

pub mod models;
pub mod summary;

// Re-export commonly used types for convenience
pub use models::{CartLine, DeliveryPolicy, OrderSummary};
pub use summary::compute_summary;
