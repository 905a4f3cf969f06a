//! # proprent-engine: Session Layer for PropRent
//!
//! The engine owns a running session's state and is the only crate a UI
//! collaborator needs to talk to.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Control Flow                             │
//! │                                                                         │
//! │  UI reads catalog + cart ──► RentalSession views (catalog, cart_lines) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  User action (add_to_cart, checkout, return_rental, ...)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate (proprent-core rules)                                     │
//! │  2. Mutate in-memory state (ledger + cart + rental log together)       │
//! │  3. Enqueue durable write(s) on the collection's ordered queue         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Writer task rewrites/upserts the collection (proprent-db)             │
//! │  Failure is logged, never rolled back: in-memory state is the          │
//! │  source of truth for the running session.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - Authoritative in-memory stock view
//! - [`session`] - The `RentalSession` facade
//! - [`persist`] - Per-collection ordered write queues
//! - [`error`] - Session error type with UI-facing codes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use proprent_db::DbConfig;
//! use proprent_engine::{CheckoutForm, RentalSession};
//!
//! let mut session = RentalSession::open(DbConfig::new("./proprent.db")).await?;
//!
//! let first = session.catalog()[0].id.clone();
//! session.add_to_cart(&first)?;
//!
//! let rental = session.checkout(&CheckoutForm {
//!     customer_name: "Budi Santoso".into(),
//!     customer_phone: "0812-3456-7890".into(),
//!     days: 3,
//!     discount_percent: 10,
//! })?;
//!
//! session.return_rental(&rental.id)?;
//! session.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod persist;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SessionError, SessionResult};
pub use ledger::Ledger;
pub use session::{CartTotals, CheckoutForm, ItemForm, RentalSession};
