//! Integration tests for ModernShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p modernshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_session` - Full browse → cart → checkout → dashboard runs
//! - `checkout_flow` - Validation and state-machine behavior across stores
//!
//! Everything runs in-process against the library crates; there is no
//! server or database to stand up. Checkout tests zero the processing
//! delay.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub use modernshop_storefront::{CheckoutConfig, StoreConfig, StoreState};

/// A store configured for tests: default behavior, zero processing delay.
#[must_use]
pub fn test_store() -> StoreState {
    StoreState::new(
        StoreConfig::default().with_checkout(
            CheckoutConfig::default().with_processing_delay(std::time::Duration::ZERO),
        ),
    )
}
