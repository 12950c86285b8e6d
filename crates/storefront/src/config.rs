//! Store configuration.
//!
//! The engine takes no configuration from the environment or files; it is an
//! embedded library, so configuration is programmatic. Defaults match the
//! store's production behavior (8% tax, 2-second simulated payment
//! processing, low-stock warning at 5 units).

use std::time::Duration;

use rust_decimal::Decimal;

use crate::pricing;

/// Configuration for the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Tax rate applied to the cart subtotal (e.g., `0.08` for 8%).
    pub tax_rate: Decimal,
    /// Simulated payment-processing delay. Tests set this to zero.
    pub processing_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: pricing::default_tax_rate(),
            processing_delay: Duration::from_secs(2),
        }
    }
}

impl CheckoutConfig {
    /// Override the tax rate.
    #[must_use]
    pub const fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Override the processing delay. `Duration::ZERO` makes `submit`
    /// complete without suspending.
    #[must_use]
    pub const fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }
}

/// Top-level configuration for a [`crate::state::StoreState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Checkout behavior.
    pub checkout: CheckoutConfig,
    /// Products with `stock <= threshold` count as low stock in
    /// [`crate::stats::StoreStats`].
    pub low_stock_threshold: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            checkout: CheckoutConfig::default(),
            low_stock_threshold: 5,
        }
    }
}

impl StoreConfig {
    /// Override the checkout configuration.
    #[must_use]
    pub fn with_checkout(mut self, checkout: CheckoutConfig) -> Self {
        self.checkout = checkout;
        self
    }

    /// Override the low-stock threshold.
    #[must_use]
    pub const fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}
