//! ModernShop Core - Shared types library.
//!
//! This crate provides common types used across all ModernShop components:
//! - `storefront` - Catalog, cart, pricing, and checkout engine
//! - `cli` - Command-line demo and catalog tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no stores, no async. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money, plus the
//!   payment and order status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
