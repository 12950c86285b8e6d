//! Aggregate store state.
//!
//! [`StoreState`] is the dependency-injection root: it owns the catalog,
//! cart, and order stores plus the configuration, and consumers receive a
//! reference to it rather than reaching for ambient globals. Single-writer
//! semantics fall out of `&mut` access; no locks, no `Arc` — callers that
//! need sharing wrap it themselves.

use modernshop_core::PaymentMethod;

use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::checkout::{CardInfo, CheckoutFlow, ShippingInfo};
use crate::config::StoreConfig;
use crate::error::CheckoutError;
use crate::orders::{OrderRecord, OrderStore};
use crate::stats::{self, StoreStats};

/// Everything one running store session owns.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub orders: OrderStore,
    config: StoreConfig,
}

impl StoreState {
    /// Create empty stores with the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            catalog: CatalogStore::new(),
            cart: CartStore::new(),
            orders: OrderStore::new(),
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Start a fresh checkout flow against this store's configuration.
    #[must_use]
    pub fn begin_checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.config.checkout.clone())
    }

    /// Run a complete checkout attempt against the owned cart and orders.
    ///
    /// Convenience for callers that don't need to observe the intermediate
    /// flow states; each call is a fresh flow instance.
    ///
    /// # Errors
    ///
    /// Same as [`CheckoutFlow::submit`].
    pub async fn checkout(
        &mut self,
        shipping: &ShippingInfo,
        payment_method: PaymentMethod,
        card: Option<&CardInfo>,
    ) -> Result<OrderRecord, CheckoutError> {
        let mut flow = CheckoutFlow::new(self.config.checkout.clone());
        flow.submit(&mut self.cart, &mut self.orders, shipping, payment_method, card)
            .await
    }

    /// Current dashboard numbers.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        stats::compute(&self.catalog, &self.orders, self.config.low_stock_threshold)
    }
}
