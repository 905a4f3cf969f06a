//! # Domain Types
//!
//! Core domain types used throughout PropRent.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InventoryItem  │   │     Rental      │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (TRX-...)   │   │  item_id        │       │
//! │  │  name           │   │  customer_name  │   │  name (frozen)  │       │
//! │  │  price (i64)    │   │  items (frozen) │   │  price (frozen) │       │
//! │  │  stock (i64)    │   │  total          │   │  quantity       │       │
//! │  │  category       │   │  status         │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │  RentalStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Weapon         │   │  Borrowed       │                             │
//! │  │  Costume        │   │  Returned       │                             │
//! │  │  Equipment      │   └─────────────────┘                             │
//! │  │  Vehicle        │                                                   │
//! │  │  SetPiece       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Rental` owns a deep copy of its cart lines, frozen at checkout time.
//! Catalog edits after checkout can never retroactively alter a historical
//! rental record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Category
// =============================================================================

/// Prop category. A fixed enumerated set matching the rental catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Stage weapons: blasters, blades, replica firearms.
    Weapon,
    /// Costume pieces: masks, cowls, uniforms.
    Costume,
    /// Production equipment: cameras, rigs, lighting props.
    Equipment,
    /// Picture vehicles and vehicle dressing.
    Vehicle,
    /// Set decoration: furniture, backdrops, large dressing.
    SetPiece,
}

impl Category {
    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Weapon => "Weapon",
            Category::Costume => "Costume",
            Category::Equipment => "Equipment",
            Category::Vehicle => "Vehicle",
            Category::SetPiece => "Set Piece",
        }
    }

    /// All categories, in catalog display order.
    pub const ALL: [Category; 5] = [
        Category::Weapon,
        Category::Costume,
        Category::Equipment,
        Category::Vehicle,
        Category::SetPiece,
    ];
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A prop available for rental.
///
/// ## Invariants
/// - `stock >= 0` at all times
/// - `stock` only changes through ledger operations
/// - `price >= 0` (whole currency units per rental day)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique identifier (UUID v4 for items created at runtime).
    pub id: String,

    /// Display name shown in the catalog and on rental records.
    pub name: String,

    /// Rental rate per day, in whole currency units.
    pub price: i64,

    /// Quantity currently available for rental.
    pub stock: i64,

    /// Catalog category.
    pub category: Category,
}

impl InventoryItem {
    /// Checks if at least one unit is available for rental.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A pending, not-yet-committed quantity of one catalog item.
///
/// ## Price Freezing
/// The item's pricing fields are captured when the line is created. If the
/// catalog entry is edited afterwards, the line (and any rental it ends up
/// in) retains the values the customer saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Inventory item id this line refers to.
    #[serde(rename = "id")]
    pub item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Rate per day at time of adding (frozen).
    pub price: i64,

    /// Category at time of adding (frozen).
    pub category: Category,

    /// Quantity in cart. Always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new line for one unit of the given item.
    pub fn from_item(item: &InventoryItem) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            category: item.category,
            quantity: 1,
        }
    }

    /// Line total per rental day (rate × quantity).
    #[inline]
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity
    }
}

// =============================================================================
// Rental Status
// =============================================================================

/// The status of a rental transaction.
///
/// ## State Machine
/// ```text
/// checkout ──► Borrowed ──return_rental──► Returned
///                  ▲                          │
///                  └───────undo_return────────┘
/// ```
/// Unlike a typical one-way lifecycle both transitions are reversible; the
/// reversal exists to support data-entry correction at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    /// Props are out with the customer.
    Borrowed,
    /// Props have come back; stock was restored.
    Returned,
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalStatus::Borrowed => write!(f, "borrowed"),
            RentalStatus::Returned => write!(f, "returned"),
        }
    }
}

// =============================================================================
// Rental
// =============================================================================

/// A rental transaction.
///
/// Created only by checkout, mutated only by return / undo-return, never
/// deleted. `items` is an immutable snapshot copied by value at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    /// Unique, time-derived identifier (`TRX-<unix millis>`).
    pub id: String,

    /// When the rental was created.
    pub timestamp: DateTime<Utc>,

    /// Customer name as entered at checkout.
    pub customer_name: String,

    /// Customer phone as entered at checkout.
    pub customer_phone: String,

    /// Ordered snapshot of the cart at checkout (frozen).
    pub items: Vec<CartLine>,

    /// Rental duration in days. Always >= 1.
    pub days: i64,

    /// Discount applied, in percent (0-100).
    pub discount_percent: i64,

    /// Computed total for the whole rental. Never negative.
    pub total: i64,

    /// Lifecycle status.
    pub status: RentalStatus,

    /// When the props came back. Present iff status is `Returned`.
    pub returned_at: Option<DateTime<Utc>>,
}

impl Rental {
    /// Checks if the props are still out.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        self.status == RentalStatus::Borrowed
    }

    /// Checks if the rental has been closed by a return.
    #[inline]
    pub fn is_returned(&self) -> bool {
        self.status == RentalStatus::Returned
    }
}

// =============================================================================
// Identifier Helpers
// =============================================================================

/// Generates a rental id from its creation time.
///
/// ## Format
/// `TRX-<unix millis>`, e.g. `TRX-1724380800000`. Time-derived so the id
/// doubles as a human-scannable creation marker on printed records.
pub fn rental_id_at(timestamp: DateTime<Utc>) -> String {
    format!("TRX-{}", timestamp.timestamp_millis())
}

/// Generates a new inventory item id.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
