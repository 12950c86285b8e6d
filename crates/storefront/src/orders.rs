//! Order records.
//!
//! An [`OrderRecord`] is the immutable snapshot produced when a checkout
//! completes: the cart lines as they were, the tax-inclusive total, and the
//! shipping/payment details. Nothing mutates a record after creation.
//! [`OrderStore`] keeps them in creation order.

use chrono::{DateTime, Utc};
use modernshop_core::{Money, OrderId, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;

/// Immutable snapshot of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Generated at checkout; unique per process.
    pub id: OrderId,
    /// The cart lines at submission time.
    pub lines: Vec<CartLine>,
    /// Tax-inclusive total, computed once at creation.
    pub total: Money,
    pub payment_method: PaymentMethod,
    /// Single formatted line, e.g. `"123 Main St, Springfield, IL 62704"`.
    pub shipping_address: String,
    /// Always [`OrderStatus::Pending`] for freshly created orders.
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Owner of the order records, in creation order.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<OrderRecord>,
}

impl OrderStore {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, order: OrderRecord) {
        tracing::info!(order_id = %order.id, total = %order.total, "order recorded");
        self.orders.push(order);
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// The last `n` orders, newest first (the dashboard's recent-orders
    /// panel).
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&OrderRecord> {
        self.orders.iter().rev().take(n).collect()
    }

    /// Sum of all order totals.
    #[must_use]
    pub fn total_revenue(&self) -> Money {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
