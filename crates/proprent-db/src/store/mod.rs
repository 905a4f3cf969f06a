//! # Collection Stores
//!
//! One store per persisted collection, mirroring the repository-per-entity
//! pattern.
//!
//! ## Store Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stores                                          │
//! │                                                                         │
//! │  ┌─────────────────────────┐   ┌─────────────────────────┐             │
//! │  │    InventoryStore       │   │      RentalStore        │             │
//! │  │  ─────────────────────  │   │  ─────────────────────  │             │
//! │  │  load_all()             │   │  load_all()             │             │
//! │  │  replace_all(items)     │   │  upsert(rental)         │             │
//! │  │  count()                │   │  count()                │             │
//! │  └─────────────────────────┘   └─────────────────────────┘             │
//! │                                                                         │
//! │  Inventory: bulk clear-and-rewrite — the persisted snapshot always     │
//! │             mirrors the in-memory ledger after each mutation.          │
//! │  Rentals:   per-record upsert — a rental changes one record at a      │
//! │             time (append at checkout, update on return/undo).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod inventory;
pub mod rental;
