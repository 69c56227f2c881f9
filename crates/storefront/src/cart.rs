//! Cart state and persistence.
//!
//! The in-memory line-item sequence is the source of truth; the stored copy
//! is overwritten wholesale after every mutation. After any mutating call
//! returns `Ok`, memory and storage are identical.

use minimart_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::storage::{LocalStore, StorageError, keys};

/// One product entry in the cart with its quantity.
///
/// Field order matches the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(i64::from(self.quantity))
    }
}

/// The mutable cart: an ordered line-item sequence mirrored to storage.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<LineItem>,
    store: LocalStore,
}

impl CartStore {
    /// Hydrate the cart from storage. Absent or unparseable data starts
    /// empty; nothing else repairs a bad document.
    #[must_use]
    pub fn open(store: LocalStore) -> Self {
        let items: Vec<LineItem> = store.get(keys::CART).unwrap_or_default();
        Self { items, store }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines, for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Add one unit of `product`: bump the quantity of an existing line,
    /// or append a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated sequence cannot be persisted.
    pub fn add(&mut self, product: &Product) -> Result<(), StorageError> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem {
                id: product.id,
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                quantity: 1,
            });
        }
        self.save()
    }

    /// Remove the line for `id`. Unknown ids leave the sequence unchanged,
    /// but it is persisted either way.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the sequence cannot be persisted.
    pub fn remove(&mut self, id: ProductId) -> Result<(), StorageError> {
        self.items.retain(|item| item.id != id);
        self.save()
    }

    /// Set the quantity for `id`, clamped to at least 1. Unknown ids are a
    /// no-op and do not touch storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the updated sequence cannot be persisted.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), StorageError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };

        item.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        self.save()
    }

    /// Serialize the full sequence and overwrite the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the document cannot be written.
    pub fn save(&self) -> Result<(), StorageError> {
        self.store.put(keys::CART, &self.items)
    }
}

// ============================================================================
// Tests
// ============================================================================
