//! Shopping cart.
//!
//! [`CartStore`] owns the cart's line items. Each line snapshots its product
//! at add time; the snapshot's price and stock are authoritative for that
//! line from then on. The subtotal is recomputed from the lines on every
//! read, so it can never drift.
//!
//! Stock is enforced here, in the store, not in the UI: any mutation that
//! would push a line's quantity past its product's stock is rejected and
//! leaves the cart unchanged.

use modernshop_core::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CartError;

/// One distinct product's presence in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Always in `[1, product.stock]` for a stored line.
    pub quantity: u32,
}

impl CartLine {
    /// This line's contribution to the cart subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Owner of the cart's line items, insertion-ordered.
///
/// At most one line exists per product ID; adding an already-present product
/// merges into its existing line.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// Merges into the existing line for the same product ID if there is
    /// one, otherwise appends a new line. Quantity 0 is an `Ok` no-op.
    ///
    /// # Errors
    ///
    /// [`CartError::InsufficientStock`] if the resulting line quantity would
    /// exceed the product's stock; the cart is left unchanged.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Ok(());
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            // checked_add: an overflowing request can only exceed stock, so
            // it is the same rejection, never a panic or a wrapped quantity.
            let requested = match line.quantity.checked_add(quantity) {
                Some(total) if total <= line.product.stock => total,
                _ => {
                    return Err(CartError::InsufficientStock {
                        product_id: product.id,
                        requested: line.quantity.saturating_add(quantity),
                        available: line.product.stock,
                    });
                }
            };
            line.quantity = requested;
            tracing::debug!(product_id = %product.id, quantity = requested, "cart line merged");
        } else {
            if quantity > product.stock {
                return Err(CartError::InsufficientStock {
                    product_id: product.id,
                    requested: quantity,
                    available: product.stock,
                });
            }
            tracing::debug!(product_id = %product.id, quantity, "cart line added");
            self.lines.push(CartLine { product, quantity });
        }
        Ok(())
    }

    /// Add one unit of a product (the storefront's "Add to Cart" default).
    ///
    /// # Errors
    ///
    /// Same as [`CartStore::add`].
    pub fn add_one(&mut self, product: Product) -> Result<(), CartError> {
        self.add(product, 1)
    }

    /// Set a line's quantity.
    ///
    /// Quantity 0 removes the line. An unknown product ID is a silent `Ok`
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`CartError::InsufficientStock`] if `quantity` exceeds the line's
    /// product stock; the quantity is left unchanged.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove(id);
            return Ok(());
        }
        let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) else {
            return Ok(());
        };
        if quantity > line.product.stock {
            return Err(CartError::InsufficientStock {
                product_id: id.clone(),
                requested: quantity,
                available: line.product.stock,
            });
        }
        line.quantity = quantity;
        tracing::debug!(product_id = %id, quantity, "cart quantity updated");
        Ok(())
    }

    /// Remove a line unconditionally. Silent no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product.id != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Pre-tax subtotal: Σ price × quantity. Recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total units across all lines (the cart badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(cents: i64, stock: u32) -> Product {
        Product {
            id: ProductId::generate(),
            name: "Test Product".to_string(),
            description: String::new(),
            price: Money::from_cents(cents),
            category: "Test".to_string(),
            image_url: String::new(),
            stock,
            specifications: Vec::new(),
        }
    }

    #[test]
    fn test_adding_same_product_merges_lines() {
        let mut cart = CartStore::new();
        let p = product(1_000, 10);

        cart.add(p.clone(), 2).unwrap();
        cart.add(p.clone(), 3).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = CartStore::new();
        cart.add(product(1_000, 10), 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_beyond_stock_rejected_unchanged() {
        let mut cart = CartStore::new();
        let p = product(1_000, 3);

        cart.add(p.clone(), 2).unwrap();
        let err = cart.add(p.clone(), 2).unwrap_err();

        assert_eq!(
            err,
            CartError::InsufficientStock {
                product_id: p.id.clone(),
                requested: 4,
                available: 3,
            }
        );
        assert_eq!(cart.line(&p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_overflowing_quantity_rejected_unchanged() {
        let mut cart = CartStore::new();
        let p = product(1_000, 5);
        cart.add(p.clone(), 2).unwrap();

        // A request that would overflow the line quantity is an ordinary
        // stock rejection, not a panic or a wrapped value.
        let err = cart.add(p.clone(), u32::MAX).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                product_id: p.id.clone(),
                requested: u32::MAX,
                available: 5,
            }
        );
        assert_eq!(cart.line(&p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_new_line_beyond_stock_rejected() {
        let mut cart = CartStore::new();
        let p = product(1_000, 3);
        assert!(cart.add(p, 4).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartStore::new();
        let keep = product(1_000, 10);
        let drop = product(550, 10);
        cart.add(keep.clone(), 2).unwrap();
        cart.add(drop.clone(), 1).unwrap();

        cart.update_quantity(&drop.id, 0).unwrap();

        assert_eq!(cart.len(), 1);
        assert!(cart.line(&drop.id).is_none());
        // Subtotal excludes the removed product entirely.
        assert_eq!(cart.subtotal(), Money::from_cents(2_000));
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.add(product(1_000, 10), 1).unwrap();
        cart.update_quantity(&ProductId::new("prod-missing"), 7)
            .unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_beyond_stock_rejected() {
        let mut cart = CartStore::new();
        let p = product(1_000, 5);
        cart.add(p.clone(), 2).unwrap();

        assert!(cart.update_quantity(&p.id, 6).is_err());
        assert_eq!(cart.line(&p.id).unwrap().quantity, 2);

        cart.update_quantity(&p.id, 5).unwrap();
        assert_eq!(cart.line(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_subtotal_recomputed_from_lines() {
        let mut cart = CartStore::new();
        let a = product(1_000, 10);
        let b = product(550, 10);
        cart.add(a.clone(), 2).unwrap();
        cart.add(b, 1).unwrap();

        assert_eq!(cart.subtotal(), Money::from_cents(2_550));
        assert_eq!(cart.item_count(), 3);

        cart.remove(&a.id);
        assert_eq!(cart.subtotal(), Money::from_cents(550));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(product(1_000, 10), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }
}
