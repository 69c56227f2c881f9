//! Checkout route handler: the demo confirmation flow.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::{CartView, NoticeView};

/// Demo checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub cart_count: u32,
    pub notices: Vec<NoticeView>,
}

/// Display the demo checkout confirmation.
///
/// An empty cart cannot check out; the visitor is sent back to the cart
/// page with a notice instead.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Response {
    let (cart, cart_count, is_empty) = {
        let guard = state.cart();
        (
            CartView::from_store(&guard),
            guard.item_count(),
            guard.is_empty(),
        )
    };

    if is_empty {
        state.notify("Your cart is empty!");
        return Redirect::to("/cart").into_response();
    }

    state.notify("Redirecting to checkout...");

    CheckoutTemplate {
        cart,
        cart_count,
        notices: state.notice_views(),
    }
    .into_response()
}
