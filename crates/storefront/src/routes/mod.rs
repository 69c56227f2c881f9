//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (storage probe)
//!
//! # Products
//! GET  /products               - Product listing (category, search, cats,
//!                                price, sort query parameters)
//! GET  /search                 - Redirect to /products?search=...
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count fragment, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Demo checkout confirmation
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//!
//! # Fragments
//! GET  /notices                - Notification toasts (fragment)
//! ```

// The `unused_async` lint is suppressed because handlers must be `async` to
// satisfy axum's `Handler` trait, yet most of them serve in-memory state and
// have nothing to await.
#![allow(clippy::unused_async)]

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod notices;
pub mod products;
pub mod search;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product listing
        .route("/products", get(products::index))
        // Search box redirect
        .route("/search", get(search::submit))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout confirmation
        .route("/checkout", get(checkout::show))
        // Auth routes
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        // Notification fragment
        .route("/notices", get(notices::fragment))
}

/// Build the full application router: pages, health endpoints, static
/// assets, and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the durable store is reachable before reporting ready.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.store().ping() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Fallback handler for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
