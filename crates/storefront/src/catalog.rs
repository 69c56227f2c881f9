//! Product catalog: the fixed set of purchasable products.
//!
//! The catalog is seeded once at startup and never mutated. All queries
//! return products in seed order unless a sort is applied downstream.

use minimart_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
}

/// Read-only queries over the seeded product list.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog holding the demo seed data.
    #[must_use]
    pub fn with_seed() -> Self {
        Self::new(seed_products())
    }

    /// The full product sequence in seed order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category matches exactly (case-sensitive), in seed
    /// order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over name and category.
    ///
    /// An empty query matches nothing, not everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}

fn seed(
    id: i32,
    name: &str,
    category: &str,
    dollars: i64,
    image_id: &str,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Price::from_dollars(dollars),
        image: format!("https://images.unsplash.com/{image_id}?w=400"),
        rating,
        reviews,
    }
}

#[rustfmt::skip]
fn seed_products() -> Vec<Product> {
    vec![
        seed(1, "Apple MacBook Pro 14\"", "laptops", 1999, "photo-1496181133206-80ce9b88a853", 4.8, 1250),
        seed(2, "Samsung Galaxy Watch 5", "smartwatches", 299, "photo-1523275335684-37898b6baf30", 4.5, 890),
        seed(3, "Philips Hue LED Strip", "lighting", 79, "photo-1558618666-fcd25c85cd64", 4.3, 456),
        seed(4, "Modern Sofa Set", "home", 899, "photo-1556909114-44e3e70034e2", 4.6, 234),
        seed(5, "Sony WH-1000XM5 Headphones", "audio", 349, "photo-1505740420928-5e560c06d30e", 4.7, 2100),
        seed(6, "Canon EOS R6 Camera", "cameras", 2499, "photo-1516035069371-29a1b244cc32", 4.9, 567),
        seed(7, "PlayStation 5 Console", "gaming", 499, "photo-1606144042614-b2417e99c4e3", 4.8, 3450),
        seed(8, "Fitbit Charge 5", "wearables", 149, "photo-1575311373937-040b8e1fd5b6", 4.4, 1890),
    ]
}

// ============================================================================
// Tests
// ============================================================================
