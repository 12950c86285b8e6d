//! Dashboard statistics.
//!
//! Pure reporting over the stores, recomputed on every call. These are the
//! numbers the admin dashboard shows in its header cards.

use modernshop_core::Money;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::orders::OrderStore;

/// Snapshot of store-wide numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_revenue: Money,
    /// Products with `stock <= threshold`.
    pub low_stock_products: usize,
}

/// Compute the dashboard numbers.
#[must_use]
pub fn compute(catalog: &CatalogStore, orders: &OrderStore, low_stock_threshold: u32) -> StoreStats {
    StoreStats {
        total_products: catalog.len(),
        total_orders: orders.len(),
        total_revenue: orders.total_revenue(),
        low_stock_products: catalog
            .products()
            .iter()
            .filter(|p| p.stock <= low_stock_threshold)
            .count(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use crate::orders::OrderRecord;
    use chrono::Utc;
    use modernshop_core::{OrderId, OrderStatus, PaymentMethod};

    fn new_product(stock: u32) -> NewProduct {
        NewProduct {
            name: "Test Product".to_string(),
            description: String::new(),
            price: Money::from_cents(1_000),
            category: "Test".to_string(),
            image_url: String::new(),
            stock,
            specifications: Vec::new(),
        }
    }

    #[test]
    fn test_compute() {
        let mut catalog = CatalogStore::new();
        for stock in [25, 5, 3, 12] {
            catalog.add(new_product(stock));
        }

        let mut orders = OrderStore::new();
        for cents in [25_997, 29_999] {
            orders.record(OrderRecord {
                id: OrderId::generate(),
                lines: Vec::new(),
                total: Money::from_cents(cents),
                payment_method: PaymentMethod::Cash,
                shipping_address: String::new(),
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            });
        }

        let stats = compute(&catalog, &orders, 5);
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.total_revenue, Money::from_cents(55_996));
        // Stock 5 and 3 are at or below the threshold.
        assert_eq!(stats.low_stock_products, 2);
    }

    #[test]
    fn test_compute_on_empty_stores() {
        let stats = compute(&CatalogStore::new(), &OrderStore::new(), 5);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, Money::ZERO);
        assert_eq!(stats.low_stock_products, 0);
    }
}
