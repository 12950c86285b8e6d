//! Cart and checkout error types.
//!
//! The error surface is deliberately narrow (see the stores themselves):
//! mutations targeting an unknown ID are silent no-ops, so the only cart
//! failure is a stock violation, and checkout failures are validation or
//! state-machine misuse. Nothing here is fatal.

use modernshop_core::ProductId;
use thiserror::Error;

/// Errors from cart mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested quantity exceeds the product's available stock.
    /// The cart is left unchanged.
    #[error("insufficient stock for product {product_id}: requested {requested}, {available} available")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
}

/// Errors from the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Submission attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A required form field is blank. Reports the first one found.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Card payment selected but no card details were provided.
    #[error("card payment selected but no card details provided")]
    MissingCardInfo,

    /// A submission on this flow is already in flight.
    #[error("order is already being processed")]
    AlreadyProcessing,

    /// This flow already produced an order; start a fresh flow instead.
    #[error("checkout already completed")]
    AlreadyCompleted,
}
