//! Order Summary Calculator
//!
//! [`compute_summary`] is the single derivation path for order totals: the
//! host calls it on every cart mutation and renders the returned value as-is.

use std::collections::HashSet;

use super::models::{CartLine, DeliveryPolicy, OrderSummary};
use crate::error::InvalidInputError;
use crate::money::{clamped_percent, round_currency};

/// Derives totals, savings, delivery charge and minimum-order progress from
/// the cart lines and the vendor policy.
///
/// Pure and deterministic; the ordering of `lines` does not affect the
/// result. The minimum-order flag is advisory for UI gating — it never
/// modifies `grand_total` or `delivery_charge`.
///
/// # Behaviour
///
/// * `item_total` = Σ unit price × quantity, `total_savings` = Σ
///   `max(0, reference − unit) × quantity` (lines without a reference price
///   contribute no savings).
/// * The delivery charge is waived when the item total reaches
///   `free_delivery_threshold`.
/// * `progress` is the rounded percentage of `minimum_order_value` reached,
///   capped at 100; with no minimum it is always 100.
pub fn compute_summary(
    lines: &[CartLine],
    policy: &DeliveryPolicy,
) -> Result<OrderSummary, InvalidInputError> {
    validate_lines(lines)?;
    validate_policy(policy)?;

    let mut item_total = 0.0;
    let mut total_savings = 0.0;
    for line in lines {
        let quantity = f64::from(line.quantity);
        item_total += line.unit_price * quantity;
        if let Some(reference) = line.reference_price {
            total_savings += (reference - line.unit_price).max(0.0) * quantity;
        }
    }
    let item_total = round_currency(item_total);
    let total_savings = round_currency(total_savings);

    let delivery_charge = match policy.free_delivery_threshold {
        Some(threshold) if item_total >= threshold => 0.0,
        _ => round_currency(policy.delivery_charge),
    };

    let progress = if policy.minimum_order_value > 0.0 {
        clamped_percent(item_total / policy.minimum_order_value)
    } else {
        100
    };

    Ok(OrderSummary {
        item_total,
        total_savings,
        delivery_charge,
        grand_total: round_currency(item_total + delivery_charge),
        is_minimum_order_met: item_total >= policy.minimum_order_value,
        progress,
    })
}

/// Checks cart lines for the invariants the calculator relies on: unique
/// variant ids, finite non-negative prices, quantities of at least 1.
pub fn validate_lines(lines: &[CartLine]) -> Result<(), InvalidInputError> {
    let mut seen = HashSet::with_capacity(lines.len());
    for line in lines {
        if !seen.insert(line.variant_id.as_str()) {
            return Err(InvalidInputError::DuplicateVariant {
                variant_id: line.variant_id.clone(),
            });
        }
        if !line.unit_price.is_finite() || line.unit_price < 0.0 {
            return Err(InvalidInputError::BadUnitPrice {
                variant_id: line.variant_id.clone(),
                value: line.unit_price,
            });
        }
        if let Some(reference) = line.reference_price {
            if !reference.is_finite() || reference < 0.0 {
                return Err(InvalidInputError::BadReferencePrice {
                    variant_id: line.variant_id.clone(),
                    value: reference,
                });
            }
        }
        if line.quantity == 0 {
            return Err(InvalidInputError::ZeroQuantity {
                variant_id: line.variant_id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_policy(policy: &DeliveryPolicy) -> Result<(), InvalidInputError> {
    if !policy.delivery_charge.is_finite() || policy.delivery_charge < 0.0 {
        return Err(InvalidInputError::BadPolicyAmount {
            field: "deliveryCharge",
            value: policy.delivery_charge,
        });
    }
    if !policy.minimum_order_value.is_finite() || policy.minimum_order_value < 0.0 {
        return Err(InvalidInputError::BadPolicyAmount {
            field: "minimumOrderValue",
            value: policy.minimum_order_value,
        });
    }
    if let Some(threshold) = policy.free_delivery_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(InvalidInputError::BadPolicyAmount {
                field: "freeDeliveryThreshold",
                value: threshold,
            });
        }
    }
    Ok(())
}
