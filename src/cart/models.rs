//! Cart REST Models
//!
//! Request and response shapes for the cart endpoints. The pricing domain
//! types ([`CartLine`], [`DeliveryPolicy`], [`OrderSummary`]) are reused
//! directly on the wire.

use crate::pricing::{CartLine, DeliveryPolicy, OrderSummary};
use serde::{Deserialize, Serialize};

/// One quantity adjustment for a product variant
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineChange {
    /// Variant the change applies to
    pub variant_id: String,

    /// Current selling price, refreshed onto the stored line
    pub unit_price: f64,

    /// Pre-discount price, refreshed onto the stored line
    #[serde(default)]
    pub reference_price: Option<f64>,

    /// Signed quantity adjustment; negative values remove units
    pub quantity_delta: i64,
}

/// Input for the sync_cart endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCartInput {
    /// Full cart contents replacing whatever the server holds
    pub lines: Vec<CartLine>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for the update_cart endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartInput {
    /// Quantity adjustments to merge into the stored cart
    pub changes: Vec<CartLineChange>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for the order_summary endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryInput {
    /// Optional cart identifier; an unknown cart is treated as empty
    pub cart_id: Option<String>,

    /// Delivery policy of the vendor the cart belongs to
    pub policy: DeliveryPolicy,
}

/// Input for the checkout endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    /// Optional cart identifier
    pub cart_id: Option<String>,

    /// When supplied, the final summary is computed and a strict minimum
    /// gates the checkout
    #[serde(default)]
    pub policy: Option<DeliveryPolicy>,
}

/// Response for cart mutation endpoints
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    pub cart_id: String,

    /// Cart contents after the operation
    pub lines: Vec<CartLine>,
}

/// Response for the checkout endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// "checked_out", or "minimum_not_met" when a strict minimum blocked it
    pub status: String,

    /// Cart identifier
    pub cart_id: String,

    /// Final order summary, present when a policy was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<OrderSummary>,
}
