//! # Session Error Type
//!
//! Unified error type returned by the `RentalSession` facade.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PropRent                               │
//! │                                                                         │
//! │  UI Collaborator                Session Layer                           │
//! │  ───────────────                ─────────────                           │
//! │                                                                         │
//! │  session.checkout(form)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Facade method: Result<T, SessionError>                          │  │
//! │  │         │                                                        │  │
//! │  │  Validation failed? ── CoreError::Validation ──┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │  Stock rule broken? ── CoreError::* ────────── SessionError ───► │  │
//! │  │         │                                      │                 │  │
//! │  │  Bootstrap I/O died? ─ DbError::* ─────────────┘                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  match err.code() {                                                     │
//! │    "STOCK_LIMIT_REACHED" => toast(err),      // informational          │
//! │    "VALIDATION_ERROR"    => highlight_form(err),                       │
//! │    _                     => notify(err),                               │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `code()` discriminant is the machine-readable half of each failure;
//! the `Display` impl carries the human-readable message.

use thiserror::Error;

use proprent_core::{CoreError, ValidationError};
use proprent_db::DbError;

/// Error returned from session facade operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A business rule or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence gateway failure surfaced synchronously (bootstrap and
    /// seeding only; steady-state write failures are logged by the writer
    /// tasks instead).
    #[error(transparent)]
    Db(#[from] DbError),
}

// Validators return the bare ValidationError; lift it through CoreError so
// facade methods can use `?` on them directly.
impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Core(CoreError::Validation(err))
    }
}

impl SessionError {
    /// Machine-readable error code for programmatic handling.
    ///
    /// ## Usage in the UI Collaborator
    /// ```rust,ignore
    /// match session.undo_return(&id) {
    ///     Err(e) if e.code() == "INSUFFICIENT_STOCK_FOR_UNDO" => warn_toast(e),
    ///     Err(e) => error_toast(e),
    ///     Ok(rental) => refresh(rental),
    /// }
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Core(CoreError::ItemNotFound(_)) => "ITEM_NOT_FOUND",
            SessionError::Core(CoreError::RentalNotFound(_)) => "RENTAL_NOT_FOUND",
            SessionError::Core(CoreError::InsufficientStock { .. }) => "INSUFFICIENT_STOCK",
            SessionError::Core(CoreError::StockLimitReached { .. }) => "STOCK_LIMIT_REACHED",
            SessionError::Core(CoreError::InsufficientStockForUndo { .. }) => {
                "INSUFFICIENT_STOCK_FOR_UNDO"
            }
            SessionError::Core(CoreError::InvalidRentalStatus { .. }) => "INVALID_RENTAL_STATUS",
            SessionError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            SessionError::Db(_) => "PERSISTENCE_FAILURE",
        }
    }

    /// Whether the failure is recoverable by correcting user input.
    ///
    /// Everything except a persistence failure is: no state was changed and
    /// the user can adjust and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::Core(_))
    }
}

/// Result type for session facade operations.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proprent_core::ValidationError;

    #[test]
    fn test_codes() {
        let err: SessionError = CoreError::StockLimitReached {
            name: "Batman Cowl".to_string(),
            stock: 3,
        }
        .into();
        assert_eq!(err.code(), "STOCK_LIMIT_REACHED");
        assert!(err.is_recoverable());

        let err: SessionError = CoreError::Validation(ValidationError::Required {
            field: "customer name".to_string(),
        })
        .into();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err: SessionError = DbError::PoolExhausted.into();
        assert_eq!(err.code(), "PERSISTENCE_FAILURE");
        assert!(!err.is_recoverable());
    }
}
