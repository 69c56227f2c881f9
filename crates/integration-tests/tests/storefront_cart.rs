//! Integration tests for the cart flow: adding, updating quantities,
//! removing, the HTMX fragments and triggers, persistence across
//! restarts, and the demo checkout.
//!
//! Run with: cargo test -p minimart-integration-tests

use axum::Router;
use axum::http::{StatusCode, header};
use tower::ServiceExt;

use minimart_core::{Price, ProductId};
use minimart_storefront::cart::LineItem;

use minimart_integration_tests::{TestApp, body_string, get, post_form};

/// Add a product and assert the response is the count badge fragment.
async fn add_product(app: &Router, product_id: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_form("/cart/add", &format!("product_id={product_id}")))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    body_string(response).await
}

// ============================================================================
// Adding Items
// ============================================================================

#[tokio::test]
async fn test_add_returns_count_fragment_and_trigger() {
    let app = TestApp::new().router();

    let response = app
        .clone()
        .oneshot(post_form("/cart/add", "product_id=1"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let trigger = response
        .headers()
        .get("HX-Trigger")
        .expect("HX-Trigger header missing");
    assert_eq!(trigger, "cart-updated");

    let body = body_string(response).await;
    assert!(body.contains(r#"id="cart-count""#));
    assert!(body.contains(">1</span>"));
}

#[tokio::test]
async fn test_adding_same_product_merges_line() {
    let app = TestApp::new().router();

    add_product(&app, "3").await;
    let badge = add_product(&app, "3").await;
    assert!(badge.contains(">2</span>"));

    // One line with quantity 2, not two lines.
    let response = app.oneshot(get("/cart")).await.expect("Request failed");
    let body = body_string(response).await;
    assert_eq!(body.matches(r#"class="cart-item""#).count(), 1);
    assert!(body.contains("Philips Hue LED Strip"));
    assert!(body.contains(r#"class="quantity">2"#));
}

#[tokio::test]
async fn test_add_posts_notice() {
    let app = TestApp::new().router();

    add_product(&app, "5").await;

    let response = app.oneshot(get("/notices")).await.expect("Request failed");
    let body = body_string(response).await;
    assert!(body.contains("Added to cart!"));
}

#[tokio::test]
async fn test_add_unknown_product_is_silent() {
    let app = TestApp::new().router();

    let badge = add_product(&app, "999").await;
    assert!(badge.contains(">0</span>"));

    let response = app.oneshot(get("/notices")).await.expect("Request failed");
    let body = body_string(response).await;
    assert!(!body.contains("Added to cart!"));
}

#[tokio::test]
async fn test_add_unparseable_id_is_silent() {
    let app = TestApp::new().router();

    let badge = add_product(&app, "abc").await;
    assert!(badge.contains(">0</span>"));
}

// ============================================================================
// Cart Page and Totals
// ============================================================================

#[tokio::test]
async fn test_empty_cart_page() {
    let app = TestApp::new().router();

    let response = app.oneshot(get("/cart")).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty"));
    assert!(!body.contains("Order Summary"));
}

#[tokio::test]
async fn test_cart_totals_with_flat_shipping() {
    let app = TestApp::new().router();

    // One LED strip: $79.00 subtotal, under the free shipping bar.
    add_product(&app, "3").await;

    let response = app.oneshot(get("/cart")).await.expect("Request failed");
    let body = body_string(response).await;

    assert!(body.contains("Items (1):"));
    assert!(body.contains("$79.00"));
    assert!(body.contains("$9.99"));
    assert!(body.contains("$6.32"));
    assert!(body.contains("$95.31"));
}

#[tokio::test]
async fn test_cart_totals_with_free_shipping() {
    let app = TestApp::new().router();

    // One MacBook: $1999.00 subtotal, shipping is free.
    add_product(&app, "1").await;

    let response = app.oneshot(get("/cart")).await.expect("Request failed");
    let body = body_string(response).await;

    assert!(body.contains("FREE"));
    assert!(body.contains("$159.92"));
    assert!(body.contains("$2158.92"));
}

// ============================================================================
// Updating Quantities
// ============================================================================

#[tokio::test]
async fn test_update_quantity_returns_cart_fragment() {
    let app = TestApp::new().router();
    add_product(&app, "5").await;

    let response = app
        .clone()
        .oneshot(post_form("/cart/update", "product_id=5&quantity=3"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let trigger = response
        .headers()
        .get("HX-Trigger")
        .expect("HX-Trigger header missing");
    assert_eq!(trigger, "cart-updated");

    let body = body_string(response).await;
    assert!(body.contains(r#"id="cart-items""#));
    assert!(body.contains(r#"class="quantity">3"#));
    // 3 x $349.00
    assert!(body.contains("$1047.00"));
}

#[tokio::test]
async fn test_update_quantity_clamps_to_one() {
    let app = TestApp::new().router();
    add_product(&app, "5").await;

    let response = app
        .clone()
        .oneshot(post_form("/cart/update", "product_id=5&quantity=0"))
        .await
        .expect("Request failed");

    let body = body_string(response).await;
    assert!(body.contains(r#"class="quantity">1"#));

    let response = app
        .oneshot(post_form("/cart/update", "product_id=5&quantity=-4"))
        .await
        .expect("Request failed");

    let body = body_string(response).await;
    assert!(body.contains(r#"class="quantity">1"#));
}

#[tokio::test]
async fn test_update_unknown_product_leaves_cart_alone() {
    let app = TestApp::new().router();
    add_product(&app, "5").await;

    let response = app
        .clone()
        .oneshot(post_form("/cart/update", "product_id=999&quantity=7"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"class="quantity">1"#));
    assert!(!body.contains(r#"class="quantity">7"#));
}

// ============================================================================
// Removing Items
// ============================================================================

#[tokio::test]
async fn test_remove_item_and_empty_state() {
    let app = TestApp::new().router();
    add_product(&app, "2").await;

    let response = app
        .clone()
        .oneshot(post_form("/cart/remove", "product_id=2"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty"));

    let response = app.oneshot(get("/notices")).await.expect("Request failed");
    let body = body_string(response).await;
    assert!(body.contains("Item removed from cart"));
}

#[tokio::test]
async fn test_remove_keeps_other_lines() {
    let app = TestApp::new().router();
    add_product(&app, "2").await;
    add_product(&app, "8").await;

    let response = app
        .clone()
        .oneshot(post_form("/cart/remove", "product_id=2"))
        .await
        .expect("Request failed");

    let body = body_string(response).await;
    assert!(!body.contains("Samsung Galaxy Watch 5"));
    assert!(body.contains("Fitbit Charge 5"));
}

// ============================================================================
// Count Badge
// ============================================================================

#[tokio::test]
async fn test_count_sums_quantities_across_lines() {
    let app = TestApp::new().router();
    add_product(&app, "2").await;
    add_product(&app, "2").await;
    add_product(&app, "7").await;

    let response = app
        .oneshot(get("/cart/count"))
        .await
        .expect("Request failed");

    let body = body_string(response).await;
    assert!(body.contains(">3</span>"));
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn test_cart_survives_restart() {
    let harness = TestApp::new();

    let app = harness.router();
    add_product(&app, "7").await;
    add_product(&app, "7").await;
    drop(app);

    let raw = std::fs::read(harness.document_path("cart")).expect("cart document missing");
    let lines: Vec<LineItem> = serde_json::from_slice(&raw).expect("cart document is not JSON");
    assert_eq!(lines.len(), 1);
    let line = lines.first().expect("cart document is empty");
    assert_eq!(line.id, ProductId::new(7));
    assert_eq!(line.price, Price::from_dollars(499));
    assert_eq!(line.quantity, 2);

    // A fresh router rehydrates the cart from disk.
    let app = harness.router();
    let response = app
        .clone()
        .oneshot(get("/cart/count"))
        .await
        .expect("Request failed");
    let body = body_string(response).await;
    assert!(body.contains(">2</span>"));

    let response = app.oneshot(get("/cart")).await.expect("Request failed");
    let body = body_string(response).await;
    assert!(body.contains("PlayStation 5 Console"));
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn test_checkout_with_empty_cart_bounces_back() {
    let app = TestApp::new().router();

    let response = app
        .clone()
        .oneshot(get("/checkout"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header missing");
    assert_eq!(location, "/cart");

    let response = app.oneshot(get("/notices")).await.expect("Request failed");
    let body = body_string(response).await;
    assert!(body.contains("Your cart is empty!"));
}

#[tokio::test]
async fn test_checkout_renders_demo_confirmation() {
    let app = TestApp::new().router();
    add_product(&app, "4").await;

    let response = app
        .clone()
        .oneshot(get("/checkout"))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(
        "This is a demo. In a real application, you would be redirected to the checkout page."
    ));
    assert!(body.contains("Redirecting to checkout..."));
    // Sofa: $899.00 + $71.92 tax, free shipping.
    assert!(body.contains("$899.00"));
    assert!(body.contains("$71.92"));
    assert!(body.contains("$970.92"));
}
