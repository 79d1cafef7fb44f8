//! Pricing Domain Models
//!
//! Data structures shared between the cart endpoints and the summary
//! calculator. Wire field names are camelCase to match the mobile client.

use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One product variant and its quantity in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Opaque variant identifier, unique per line
    pub variant_id: String,

    /// Current selling price per unit
    pub unit_price: f64,

    /// Pre-discount (MRP) price; absent or equal to `unit_price` means no discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<f64>,

    /// Quantity of this variant (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Vendor-level delivery configuration affecting order totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    /// Flat delivery charge unless waived
    pub delivery_charge: f64,

    /// Item total at which the delivery charge is waived
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_delivery_threshold: Option<f64>,

    /// Vendor minimum order value; 0 means no minimum
    #[serde(default)]
    pub minimum_order_value: f64,

    /// When true, failing the minimum blocks checkout entirely rather than
    /// just forfeiting free delivery
    #[serde(default)]
    pub strict_minimum_enforced: bool,
}

/// Derived order totals.
///
/// Immutable once produced; any cart or policy change recomputes a fresh
/// value from scratch. All monetary fields are rounded to two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub item_total: f64,
    pub total_savings: f64,
    pub delivery_charge: f64,
    pub grand_total: f64,
    pub is_minimum_order_met: bool,

    /// Percentage of the minimum order value reached, capped at 100
    pub progress: u8,
}
