//! Cart page projection: line rows plus the derived order summary.

use rust_decimal::{Decimal, RoundingStrategy};

use minimart_core::{Price, ProductId};

use crate::cart::CartStore;

/// Free shipping applies strictly above this subtotal, in dollars.
const FREE_SHIPPING_OVER: i64 = 100;

/// Flat shipping charge below the free threshold, in cents.
const FLAT_SHIPPING_CENTS: i64 = 999;

/// Derived totals for the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute shipping, tax, and total from a subtotal.
    ///
    /// Shipping is free strictly above $100; at exactly $100 the flat
    /// charge still applies. Tax is 8% of the subtotal, rounded to cents
    /// with midpoints going away from zero.
    #[must_use]
    pub fn compute(subtotal: Price) -> Self {
        let shipping = if subtotal.amount() > Decimal::from(FREE_SHIPPING_OVER) {
            Price::ZERO
        } else {
            Price::from_cents(FLAT_SHIPPING_CENTS)
        };

        let tax_rate = Decimal::new(8, 2);
        let tax = Price::new(
            (subtotal.amount() * tax_rate)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        );

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// One row on the cart page.
///
/// The quantity stepper posts absolute values, so the neighboring
/// quantities are precomputed here instead of doing arithmetic in the
/// template.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub decrease_to: u32,
    pub increase_to: u32,
    pub line_total: String,
}

/// Cart display data for the cart page and its fragments.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl CartView {
    /// Project the cart rows plus the derived summary. Shipping shows as
    /// `FREE` once the subtotal clears the threshold.
    #[must_use]
    pub fn from_store(cart: &CartStore) -> Self {
        let items: Vec<CartItemView> = cart
            .items()
            .iter()
            .map(|item| CartItemView {
                id: item.id,
                name: item.name.clone(),
                image: item.image.clone(),
                price: item.price.to_string(),
                quantity: item.quantity,
                decrease_to: item.quantity.saturating_sub(1).max(1),
                increase_to: item.quantity.saturating_add(1),
                line_total: item.line_total().to_string(),
            })
            .collect();

        let summary = OrderSummary::compute(cart.total());

        Self {
            items,
            item_count: cart.item_count(),
            subtotal: summary.subtotal.to_string(),
            shipping: if summary.shipping.is_zero() {
                "FREE".to_owned()
            } else {
                summary.shipping.to_string()
            },
            tax: summary.tax.to_string(),
            total: summary.total.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
