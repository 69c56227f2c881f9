//! Pure projection layer: plain data shaped for the templates.
//!
//! Nothing here touches storage or markup. Route handlers build these
//! values from domain state and hand them to the Askama templates.

pub mod cart;
pub mod listing;
pub mod products;

pub use cart::{CartItemView, CartView, OrderSummary};
pub use listing::{ListingSelection, PriceBucket, SortKey};
pub use products::ProductCardView;

/// A live notification projected for the toast region.
#[derive(Debug, Clone)]
pub struct NoticeView {
    pub message: String,
    pub leaving: bool,
}
