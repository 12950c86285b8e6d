//! Shared domain types.
//!
//! - [`id`] - Type-safe ID newtypes (`ProductId`, `OrderId`)
//! - [`money`] - Exact decimal money representation
//! - [`status`] - Payment method and order status enums

pub mod id;
pub mod money;
pub mod status;

pub use id::{OrderId, ProductId};
pub use money::Money;
pub use status::{OrderStatus, PaymentMethod};
