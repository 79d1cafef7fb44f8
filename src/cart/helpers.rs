//! Cart Business Logic Helpers
//!
//! This module contains helper functions for cart mutation and formatting.

use super::models::CartLineChange;
use crate::pricing::CartLine;
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Applies quantity deltas to `cart_lines`, inserting new lines and removing
/// lines whose quantity would drop to 0.
///
/// # Behaviour
///
/// * An existing line with the same `variant_id` has its quantity adjusted
///   by the incoming delta; its prices are refreshed from the change.
/// * A change with a positive delta and no existing line inserts a new one.
/// * A resulting quantity of 0 or below removes the line — a cart never
///   holds zero-quantity lines.
///
/// This function mutates `cart_lines` in-place.
pub fn apply_cart_changes(cart_lines: &mut Vec<CartLine>, changes: Vec<CartLineChange>) {
    for change in changes {
        if let Some(position) = cart_lines
            .iter()
            .position(|l| l.variant_id == change.variant_id)
        {
            let updated = i64::from(cart_lines[position].quantity) + change.quantity_delta;
            if updated <= 0 {
                cart_lines.remove(position);
            } else {
                let line = &mut cart_lines[position];
                line.quantity = updated as u32;
                line.unit_price = change.unit_price;
                line.reference_price = change.reference_price;
            }
        } else if change.quantity_delta > 0 {
            cart_lines.push(CartLine {
                variant_id: change.variant_id,
                unit_price: change.unit_price,
                reference_price: change.reference_price,
                quantity: change.quantity_delta as u32,
            });
        }
    }
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x sku-42, 1x sku-7"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.variant_id))
        .collect::<Vec<_>>()
        .join(", ")
}
