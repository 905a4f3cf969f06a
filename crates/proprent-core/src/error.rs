//! # Error Types
//!
//! Domain-specific error types for proprent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  proprent-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  proprent-db errors (separate crate)                                   │
//! │  └── DbError          - Persistence gateway failures                   │
//! │                                                                         │
//! │  proprent-engine errors (separate crate)                               │
//! │  └── SessionError     - What the UI collaborator sees                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → UI notification    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, stock levels, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! No error here is fatal: every variant either blocks a single user action
//! with a message or leaves state untouched for the user to retry.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Inventory item cannot be found.
    ///
    /// ## When This Occurs
    /// - Item id doesn't exist in the ledger
    /// - Item was deleted from the catalog
    #[error("Inventory item not found: {0}")]
    ItemNotFound(String),

    /// Rental transaction cannot be found.
    #[error("Rental not found: {0}")]
    RentalNotFound(String),

    /// A stock delta would drive an item's stock below zero.
    ///
    /// ## When This Occurs
    /// - Checkout requests more units than the ledger currently has
    ///
    /// The ledger rejects the whole operation; stock is left untouched.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Cart add blocked: quantity already matches available stock.
    ///
    /// ## When This Occurs
    /// - Adding an out-of-stock item to the cart
    /// - Incrementing a cart line past the ledger's current stock
    ///
    /// ## User Workflow
    /// ```text
    /// Item X, stock 5, cart quantity 5
    ///      │
    ///      ▼
    /// add_to_cart(X)
    ///      │
    ///      ▼
    /// StockLimitReached { name: "X", stock: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 5 of X available" (cart unchanged)
    /// ```
    /// This is a user-visible warning, not a hard failure; the cart is
    /// never left in a partial state.
    #[error("Stock limit reached for {name}: only {stock} available")]
    StockLimitReached { name: String, stock: i64 },

    /// Undo-return blocked: re-lending the props would oversell stock.
    ///
    /// ## When This Occurs
    /// - Some returned units have since been rented out again
    /// - A returned item was deleted from the catalog (available counts as 0)
    ///
    /// The check covers ALL lines before any decrement; the ledger is left
    /// untouched on failure.
    #[error("Cannot undo return: {name} has {available} in stock, needs {required}")]
    InsufficientStockForUndo {
        name: String,
        available: i64,
        required: i64,
    },

    /// Rental is not in a state that allows the requested transition.
    ///
    /// ## When This Occurs
    /// - Returning a rental that is already `Returned`
    /// - Undoing a return on a rental that is still `Borrowed`
    #[error("Rental {rental_id} is {current_status}, cannot perform operation")]
    InvalidRentalStatus {
        rental_id: String,
        current_status: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Lightsaber Replica".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Lightsaber Replica: available 3, requested 5"
        );

        let err = CoreError::StockLimitReached {
            name: "Batman Cowl".to_string(),
            stock: 3,
        };
        assert_eq!(
            err.to_string(),
            "Stock limit reached for Batman Cowl: only 3 available"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer name".to_string(),
        };
        assert_eq!(err.to_string(), "customer name is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customer name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
