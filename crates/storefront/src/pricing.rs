//! Tax pricing.
//!
//! Pure arithmetic over [`Money`]: subtotal → tax → total. All values stay
//! exact; rounding to cents is the `Display` impl's job at presentation
//! time.

use modernshop_core::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The store's tax rate, 8%.
///
/// A function rather than a constant because `Decimal` construction from a
/// scaled integer is the idiomatic spelling here.
#[must_use]
pub fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Subtotal, tax, and tax-inclusive total for an order summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Price a subtotal at the given tax rate.
///
/// `tax = subtotal × rate`, `total = subtotal + tax`, both exact.
#[must_use]
pub fn price(subtotal: Money, tax_rate: Decimal) -> PriceBreakdown {
    let tax = subtotal * tax_rate;
    PriceBreakdown {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
