//! Storefront Pricing & Gallery Library
//!
//! This library provides the core computations for a mobile storefront
//! backend: order-summary derivation (totals, savings, delivery charge and
//! minimum-order progress), masonry gallery packing, and the REST surface
//! exposing both over shared in-memory cart state.

// Domain modules
pub mod cart;
pub mod gallery;
pub mod pricing;

// Infrastructure
pub mod error;
pub mod money;
pub mod router;
