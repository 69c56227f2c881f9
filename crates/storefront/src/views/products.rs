//! Product card projection.

use minimart_core::ProductId;

use crate::catalog::Product;

/// One product card on a grid.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    pub stars: String,
    pub reviews: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            stars: stars(product.rating),
            reviews: thousands(product.reviews),
        }
    }
}

/// Star string for a rating: one filled star per whole point, plus a half
/// symbol when the fractional part reaches 0.5. Never rounds up to an
/// extra full star.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stars(rating: f32) -> String {
    let full = rating.max(0.0).floor() as usize;
    let mut out = "★".repeat(full);
    if rating.fract() >= 0.5 {
        out.push('½');
    }
    out
}

/// Group digits with thousands separators, `1250` becoming `1,250`.
#[must_use]
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
