//! Cart route handlers.
//!
//! Cart mutations use HTMX for dynamic updates without full page reloads.
//! Add returns the count badge fragment; update and remove return the
//! cart-items region. Every mutation response carries a `cart-updated`
//! trigger so the header badge and the toast region refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use minimart_core::ProductId;

use crate::catalog::Product;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{CartView, NoticeView};

/// Add to cart form data.
///
/// The id arrives as the raw control value; unparseable ids are treated
/// like unknown products.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
    pub notices: Vec<NoticeView>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let (cart, cart_count) = {
        let guard = state.cart();
        (CartView::from_store(&guard), guard.item_count())
    };

    CartShowTemplate {
        cart,
        cart_count,
        notices: state.notice_views(),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Unknown and unparseable ids fall through silently; the count fragment
/// is returned either way, and the notice is only posted for a real add.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product: Option<Product> = form
        .product_id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id).cloned());

    let count = {
        let mut cart = state.cart();
        if let Some(product) = &product {
            cart.add(product)?;
        }
        cart.item_count()
    };

    if product.is_some() {
        state.notify("Added to cart!");
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Update a line's quantity (HTMX).
///
/// Quantities below 1 are clamped rather than rejected; unknown ids leave
/// the cart untouched.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let cart = {
        let mut guard = state.cart();
        if let Ok(id) = form.product_id.parse::<ProductId>() {
            guard.set_quantity(id, form.quantity)?;
        }
        CartView::from_store(&guard)
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let cart = {
        let mut guard = state.cart();
        if let Ok(id) = form.product_id.parse::<ProductId>() {
            guard.remove(id)?;
        }
        CartView::from_store(&guard)
    };

    state.notify("Item removed from cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart_count(),
    }
}
