//! ModernShop Storefront - the store's domain engine.
//!
//! This crate owns the behavior of the shop: the product catalog, search and
//! category filtering, the shopping cart, tax pricing, and the checkout flow
//! that turns a cart into an immutable order record. It performs no I/O and
//! renders nothing; callers (CLI, UI, tests) drive it through the store
//! types and read back snapshots.
//!
//! # Architecture
//!
//! State is owned explicitly, never ambient: each store is a plain struct
//! mutated through `&mut self` methods, and [`state::StoreState`] is the
//! dependency-injection root that wires the stores together. Derived values
//! (cart subtotal, dashboard stats) are recomputed on read, never cached.
//!
//! # Modules
//!
//! - [`catalog`] - Product list and favorites ([`catalog::CatalogStore`])
//! - [`filter`] - Pure search/category filtering
//! - [`cart`] - Cart lines and quantities ([`cart::CartStore`])
//! - [`pricing`] - Subtotal → tax → total math
//! - [`checkout`] - Validation, the payment → confirmation state machine,
//!   and card-input display formatting
//! - [`orders`] - Immutable order records ([`orders::OrderStore`])
//! - [`stats`] - Dashboard statistics over the stores
//! - [`fixtures`] - The sample catalog for demos and tests
//! - [`config`] - Tax rate, processing delay, low-stock threshold
//! - [`error`] - Cart and checkout error types
//! - [`state`] - Aggregate [`state::StoreState`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod orders;
pub mod pricing;
pub mod state;
pub mod stats;

pub use cart::{CartLine, CartStore};
pub use catalog::{CatalogStore, NewProduct, Product, ProductPatch};
pub use checkout::{CardInfo, CheckoutFlow, CheckoutState, ShippingInfo};
pub use config::{CheckoutConfig, StoreConfig};
pub use error::{CartError, CheckoutError};
pub use filter::filter_products;
pub use orders::{OrderRecord, OrderStore};
pub use pricing::{PriceBreakdown, price};
pub use state::StoreState;
pub use stats::StoreStats;
