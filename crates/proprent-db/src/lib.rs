//! # proprent-db: Database Layer for PropRent
//!
//! This crate provides database access for PropRent. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PropRent Data Flow                               │
//! │                                                                         │
//! │  RentalSession mutation (checkout, return, catalog edit)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   proprent-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │    Stores     │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │  (store/*.rs) │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ Inventory     │    │ inventory    │  │   │
//! │  │   │ Connection    │    │ Rental        │    │ rentals      │  │   │
//! │  │   │ Management    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   inventory(id, payload)   rentals(id, payload)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collection Model
//!
//! Each collection is a table of `id TEXT PRIMARY KEY, payload TEXT` rows,
//! where `payload` is the serde_json document of the domain record. The
//! gateway exposes bulk-read and bulk-rewrite per collection; the inventory
//! collection is rewritten wholesale after each mutation so the durable
//! snapshot always mirrors the in-memory ledger.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Collection table setup
//! - [`error`] - Database error types
//! - [`store`] - Store implementations (inventory, rentals)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use proprent_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/proprent.db");
//! let db = Database::new(config).await?;
//!
//! // Use stores
//! let items = db.inventory().load_all().await?;
//! db.inventory().replace_all(&items).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod schema;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Store re-exports for convenience
pub use store::inventory::InventoryStore;
pub use store::rental::RentalStore;
