//! # Collection Schema
//!
//! Table setup for the two persisted collections.
//!
//! ## Why Not Migrations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Strategy                                    │
//! │                                                                         │
//! │  Each collection is a single id → payload table:                       │
//! │                                                                         │
//! │  inventory(id TEXT PRIMARY KEY, payload TEXT NOT NULL)                 │
//! │  rentals  (id TEXT PRIMARY KEY, payload TEXT NOT NULL)                 │
//! │                                                                         │
//! │  The record shape lives in the JSON payload, versioned by serde        │
//! │  defaults, so the SQL schema itself never changes. Idempotent          │
//! │  CREATE TABLE IF NOT EXISTS at startup replaces a migration history.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Name of the inventory collection table.
pub const INVENTORY_TABLE: &str = "inventory";

/// Name of the rental transaction collection table.
pub const RENTALS_TABLE: &str = "rentals";

const SCHEMA_SQL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS inventory (
        id      TEXT PRIMARY KEY,
        payload TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS rentals (
        id      TEXT PRIMARY KEY,
        payload TEXT NOT NULL
    )",
];

/// Creates the collection tables if they do not exist.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Never drops or alters existing tables
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring collection tables exist");

    for ddl in SCHEMA_SQL {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    info!("Collection tables ready");
    Ok(())
}
