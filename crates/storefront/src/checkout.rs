//! Checkout flow.
//!
//! A two-step state machine per checkout attempt: `Payment` →
//! (`Processing`) → `Confirmation`. Validation gates submission; the
//! simulated payment-processing delay is an async suspension, not a
//! blocking sleep; and on success the flow materializes an immutable
//! [`OrderRecord`], records it, and clears the cart in the same logical
//! step. `Confirmation` is terminal: a new attempt uses a fresh flow.
//!
//! Also home to the display-time input masks for card fields. These are
//! pure string formatters; the stored [`CardInfo`] is whatever the caller
//! passes.

use chrono::Utc;
use modernshop_core::{OrderId, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;
use crate::orders::{OrderRecord, OrderStore};
use crate::pricing;

/// Shipping details captured by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingInfo {
    /// The single-line address stored on the order record, e.g.
    /// `"123 Main St, Springfield, IL 62704"`.
    #[must_use]
    pub fn formatted_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Card details captured when paying by card.
///
/// No format validation beyond non-emptiness is performed; there is no real
/// payment processor behind this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
    pub name_on_card: String,
}

/// Where a [`CheckoutFlow`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// Collecting shipping and payment details.
    Payment,
    /// A submission is in flight (resubmission disabled).
    Processing,
    /// Terminal: an order was placed on this flow.
    Confirmation,
}

/// One checkout attempt.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    state: CheckoutState,
    config: CheckoutConfig,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new(CheckoutConfig::default())
    }
}

impl CheckoutFlow {
    /// Start a fresh flow in the `Payment` state.
    #[must_use]
    pub const fn new(config: CheckoutConfig) -> Self {
        Self {
            state: CheckoutState::Payment,
            config,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Submit the checkout form.
    ///
    /// Guards in order: the flow must be in `Payment`, the cart must be
    /// non-empty, and [`validate`] must pass. Until all guards pass nothing
    /// is mutated and the flow stays in `Payment`. On success the flow waits
    /// out the configured processing delay, then records the order, clears
    /// the cart, and enters `Confirmation`.
    ///
    /// Cancellation is unsupported: dropping the future mid-delay leaves the
    /// flow in `Processing`, where a retry reports `AlreadyProcessing`.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::AlreadyProcessing`], [`CheckoutError::AlreadyCompleted`],
    /// [`CheckoutError::EmptyCart`], or a validation error from [`validate`].
    #[tracing::instrument(skip_all, fields(payment_method = %payment_method))]
    pub async fn submit(
        &mut self,
        cart: &mut CartStore,
        orders: &mut OrderStore,
        shipping: &ShippingInfo,
        payment_method: PaymentMethod,
        card: Option<&CardInfo>,
    ) -> Result<OrderRecord, CheckoutError> {
        match self.state {
            CheckoutState::Payment => {}
            CheckoutState::Processing => return Err(CheckoutError::AlreadyProcessing),
            CheckoutState::Confirmation => return Err(CheckoutError::AlreadyCompleted),
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        validate(shipping, payment_method, card)?;

        self.state = CheckoutState::Processing;
        tokio::time::sleep(self.config.processing_delay).await;

        let breakdown = pricing::price(cart.subtotal(), self.config.tax_rate);
        let order = OrderRecord {
            id: OrderId::generate(),
            lines: cart.lines().to_vec(),
            total: breakdown.total,
            payment_method,
            shipping_address: shipping.formatted_address(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        tracing::info!(order_id = %order.id, total = %order.total, "order placed");

        orders.record(order.clone());
        cart.clear();
        self.state = CheckoutState::Confirmation;
        Ok(order)
    }
}

/// Validate the checkout form.
///
/// All six shipping fields must be non-empty; if paying by card, the card
/// details must be present with all four fields non-empty. Reports the
/// first missing field found, in form order. No deeper format validation
/// (no Luhn check, no phone-format check).
///
/// # Errors
///
/// [`CheckoutError::MissingField`] or [`CheckoutError::MissingCardInfo`].
pub fn validate(
    shipping: &ShippingInfo,
    payment_method: PaymentMethod,
    card: Option<&CardInfo>,
) -> Result<(), CheckoutError> {
    let shipping_fields = [
        ("full name", &shipping.full_name),
        ("phone", &shipping.phone),
        ("address", &shipping.address),
        ("city", &shipping.city),
        ("state", &shipping.state),
        ("zip code", &shipping.zip_code),
    ];
    for (name, value) in shipping_fields {
        if value.is_empty() {
            return Err(CheckoutError::MissingField(name));
        }
    }

    if payment_method == PaymentMethod::Card {
        let card = card.ok_or(CheckoutError::MissingCardInfo)?;
        let card_fields = [
            ("name on card", &card.name_on_card),
            ("card number", &card.number),
            ("expiry date", &card.expiry),
            ("cvv", &card.cvv),
        ];
        for (name, value) in card_fields {
            if value.is_empty() {
                return Err(CheckoutError::MissingField(name));
            }
        }
    }
    Ok(())
}

/// Mask a card number for display: digits only, grouped in fours, at most
/// 19 characters (`"1234 5678 9012 3456"`).
#[must_use]
pub fn format_card_number(input: &str) -> String {
    let mut out = String::new();
    for c in input.chars().filter(char::is_ascii_digit) {
        if !out.is_empty() && (out.len() + 1) % 5 == 0 {
            out.push(' ');
        }
        out.push(c);
        if out.len() >= 19 {
            break;
        }
    }
    out
}

/// Mask an expiry date for display: digits only, `MM/YY`, at most 5
/// characters.
#[must_use]
pub fn format_expiry(input: &str) -> String {
    let mut out = String::new();
    for c in input.chars().filter(char::is_ascii_digit) {
        if out.len() == 2 {
            out.push('/');
        }
        out.push(c);
        if out.len() >= 5 {
            break;
        }
    }
    out
}

/// Mask a CVV for display: digits only, at most 4 characters.
#[must_use]
pub fn format_cvv(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(4).collect()
}
