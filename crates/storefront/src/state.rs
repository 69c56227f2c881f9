//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::cart::CartStore;
use crate::catalog::ProductCatalog;
use crate::config::StorefrontConfig;
use crate::notifications::NoticeBoard;
use crate::storage::LocalStore;
use crate::views::NoticeView;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart, the notice board, and the durable store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: LocalStore,
    catalog: ProductCatalog,
    cart: Mutex<CartStore>,
    notices: Mutex<NoticeBoard>,
}

impl AppState {
    /// Create a new application state around an opened store, hydrating
    /// the cart from it.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: LocalStore) -> Self {
        let cart = CartStore::open(store.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: ProductCatalog::with_seed(),
                cart: Mutex::new(cart),
                notices: Mutex::new(NoticeBoard::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the durable key-value store.
    #[must_use]
    pub fn store(&self) -> &LocalStore {
        &self.inner.store
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.inner.catalog
    }

    /// Lock the cart.
    ///
    /// A poisoned lock is recovered rather than propagated: the cart
    /// persists itself before every mutating call returns, so the state a
    /// panicking thread left behind is still consistent.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the notice board.
    pub fn notices(&self) -> MutexGuard<'_, NoticeBoard> {
        self.inner
            .notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Post a transient notification.
    pub fn notify(&self, message: impl Into<String>) {
        self.notices().push(message);
    }

    /// Sweep expired notices and project the live ones for rendering.
    #[must_use]
    pub fn notice_views(&self) -> Vec<NoticeView> {
        let now = Instant::now();
        let mut board = self.notices();
        board
            .active(now)
            .iter()
            .map(|notice| NoticeView {
                message: notice.message().to_owned(),
                leaving: notice.is_leaving(now),
            })
            .collect()
    }

    /// Current header badge count.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart().item_count()
    }
}
