//! # proprent-core: Pure Business Logic for PropRent
//!
//! This crate is the **heart** of PropRent, a point-of-sale and inventory
//! tracker for a props-rental business. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PropRent Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Collaborator (out of scope)               │   │
//! │  │    Catalog view ──► Cart view ──► Checkout ──► Rental log       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               proprent-engine (Session Layer)                   │   │
//! │  │    RentalSession: ledger, lifecycle, write queues               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ proprent-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  pricing  │  │ validation│  │   │
//! │  │   │  Item     │  │   Cart    │  │ subtotal  │  │   rules   │  │   │
//! │  │   │  Rental   │  │ CartLine  │  │   total   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 proprent-db (Database Layer)                    │   │
//! │  │          SQLite collections: inventory / rentals                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, Rental, CartLine, etc.)
//! - [`cart`] - Cart aggregation bounded by live stock
//! - [`pricing`] - Rental pricing (integer arithmetic, no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole currency units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use proprent_core::cart::Cart;
//! use proprent_core::pricing;
//! use proprent_core::types::{Category, InventoryItem};
//!
//! let item = InventoryItem {
//!     id: "prop-001".to_string(),
//!     name: "Lightsaber Replica".to_string(),
//!     price: 50_000,
//!     stock: 5,
//!     category: Category::Weapon,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&item).unwrap();
//! cart.add(&item).unwrap();
//!
//! // 2 units × 50 000/day × 3 days, 10% discount = 270 000
//! assert_eq!(pricing::total(cart.lines(), 3, 10), 270_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use proprent_core::Cart` instead of
// `use proprent_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum rental duration in days.
///
/// ## Business Reason
/// A rental is billed per day; a zero-day rental would price at zero while
/// still decrementing stock. Callers default empty/invalid input to this.
pub const MIN_RENTAL_DAYS: i64 = 1;

/// Default rental duration used when the checkout form leaves it blank.
pub const DEFAULT_RENTAL_DAYS: i64 = 1;

/// Maximum discount that can be applied to a rental, in percent.
///
/// ## Business Reason
/// 100% is a free rental (comped props for a partner production); anything
/// above would produce a negative total.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// Default discount used when the checkout form leaves it blank.
pub const DEFAULT_DISCOUNT_PERCENT: i64 = 0;
