//! REST API handlers for cart operations
//!
//! This module implements HTTP endpoints for cart synchronization, line
//! updates, order-summary computation and checkout.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::InvalidInputError;
use crate::pricing::{compute_summary, summary::validate_lines, CartLine};
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/sync_cart", post(sync_cart))
        .route("/update_cart", post(update_cart))
        .route("/order_summary", post(order_summary))
        .route("/checkout", post(checkout))
}

/// Endpoint: POST /sync_cart
/// Updates the backend state to match the client's cart exactly.
async fn sync_cart(
    State(state): State<SharedState>,
    Json(payload): Json<SyncCartInput>,
) -> Result<impl IntoResponse, InvalidInputError> {
    validate_lines(&payload.lines)?;

    let cart_id = get_or_create_cart_id(payload.cart_id);
    state.carts.insert(cart_id.clone(), payload.lines.clone());

    Ok(Json(CartResponse {
        status: "updated".to_string(),
        cart_id,
        lines: payload.lines,
    }))
}

/// Endpoint: POST /update_cart
/// Merges quantity deltas into the stored cart; lines hitting 0 are removed.
async fn update_cart(
    State(state): State<SharedState>,
    Json(payload): Json<UpdateCartInput>,
) -> impl IntoResponse {
    let cart_id = get_or_create_cart_id(payload.cart_id);

    // Update or initialize cart
    let mut cart_lines = state.carts.entry(cart_id.clone()).or_default();
    apply_cart_changes(&mut cart_lines, payload.changes);
    let lines = cart_lines.clone();
    drop(cart_lines);

    Json(CartResponse {
        status: "updated".to_string(),
        cart_id,
        lines,
    })
}

/// Endpoint: POST /order_summary
/// Computes the order summary for the stored cart under the given policy.
async fn order_summary(
    State(state): State<SharedState>,
    Json(payload): Json<OrderSummaryInput>,
) -> Result<impl IntoResponse, InvalidInputError> {
    let cart_id = get_or_create_cart_id(payload.cart_id);
    let lines: Vec<CartLine> = state
        .carts
        .get(&cart_id)
        .map(|c| c.value().clone())
        .unwrap_or_default();

    let summary = compute_summary(&lines, &payload.policy)?;
    Ok(Json(summary))
}

/// Endpoint: POST /checkout
/// Clears the cart. When a policy with a strict minimum is supplied and the
/// cart falls short, the cart is kept and checkout is refused.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> Result<impl IntoResponse, InvalidInputError> {
    let cart_id = get_or_create_cart_id(payload.cart_id);
    let lines: Vec<CartLine> = state
        .carts
        .get(&cart_id)
        .map(|c| c.value().clone())
        .unwrap_or_default();

    let summary = match payload.policy.as_ref() {
        Some(policy) => {
            let summary = compute_summary(&lines, policy)?;
            if policy.strict_minimum_enforced && !summary.is_minimum_order_met {
                return Ok(Json(CheckoutResponse {
                    status: "minimum_not_met".to_string(),
                    cart_id,
                    summary: Some(summary),
                }));
            }
            Some(summary)
        }
        None => None,
    };

    if state.carts.remove(&cart_id).is_some() {
        println!("CHECKOUT: Cart {} - {}", cart_id, format_line_summary(&lines));
    }

    Ok(Json(CheckoutResponse {
        status: "checked_out".to_string(),
        cart_id,
        summary,
    }))
}
