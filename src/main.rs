use std::net::SocketAddr;
use std::sync::Arc;
use storefront_rust::cart::AppState;
use storefront_rust::router::create_app_router;

#[tokio::main]
async fn main() {
    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    println!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use storefront_rust::cart::helpers::{apply_cart_changes, get_or_create_cart_id};
    use storefront_rust::cart::models::CartLineChange;
    use storefront_rust::cart::state::AppState;
    use storefront_rust::pricing::CartLine;

    fn change(variant: &str, price: f64, delta: i64) -> CartLineChange {
        CartLineChange {
            variant_id: variant.into(),
            unit_price: price,
            reference_price: None,
            quantity_delta: delta,
        }
    }

    #[test]
    fn test_state_merge_and_removal() {
        let state = AppState::new();
        let cart_id = "test_cart_1";

        // 1. Initial Insert (Simulate Sync)
        state.carts.insert(
            cart_id.into(),
            vec![CartLine {
                variant_id: "sku-apple".into(),
                unit_price: 30.0,
                reference_price: None,
                quantity: 2,
            }],
        );

        // 2. Merge deltas (Simulate Update)
        {
            let mut lines = state.carts.get_mut(cart_id).unwrap();
            apply_cart_changes(
                &mut lines,
                vec![change("sku-apple", 30.0, 3), change("sku-banana", 10.0, 1)],
            );
        }

        // 3. Verify aggregation
        {
            let lines = state.carts.get(cart_id).unwrap();
            let apple = lines.iter().find(|l| l.variant_id == "sku-apple").unwrap();
            assert_eq!(apple.quantity, 5, "Apple quantity should aggregate to 2+3=5");
            let banana = lines.iter().find(|l| l.variant_id == "sku-banana").unwrap();
            assert_eq!(banana.quantity, 1, "Banana should be added");
        }

        // 4. Dropping to zero removes the line instead of keeping it at 0
        {
            let mut lines = state.carts.get_mut(cart_id).unwrap();
            apply_cart_changes(&mut lines, vec![change("sku-apple", 30.0, -5)]);
            assert!(!lines.iter().any(|l| l.variant_id == "sku-apple"));
            assert_eq!(lines.len(), 1);
        }
    }

    #[test]
    fn test_cart_id_generation() {
        assert_eq!(
            get_or_create_cart_id(Some("cart-7".into())),
            "cart-7".to_string()
        );
        assert!(!get_or_create_cart_id(None).is_empty());
    }
}
