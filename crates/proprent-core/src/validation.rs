//! # Validation Module
//!
//! Input validation utilities for PropRent.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI collaborator                                               │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback, disabled buttons                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session facade (Rust)                                        │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger operations                                            │
//! │  └── Stock-delta safety checks (stock >= 0)                            │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use proprent_core::validation::{validate_customer_name, validate_rental_days};
//!
//! validate_customer_name("BUDI SANTOSO").unwrap();
//! validate_rental_days(3).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_DISCOUNT_PERCENT;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name for checkout.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_required_text("customer name", name, 200)
}

/// Validates a customer phone number for checkout.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
///
/// No format check: the counter takes whatever the customer dictates,
/// including extensions and international prefixes.
pub fn validate_customer_phone(phone: &str) -> ValidationResult<()> {
    validate_required_text("customer phone", phone, 50)
}

/// Validates an inventory item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name, 200)
}

fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rental rate.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (comped props)
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock count for an inventory edit.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a rental duration in days.
///
/// ## Rules
/// - Must be positive (>= 1)
///
/// Blank form input should be defaulted to
/// [`DEFAULT_RENTAL_DAYS`](crate::DEFAULT_RENTAL_DAYS) before this runs;
/// a value that survives to here and is still below 1 is a user error.
pub fn validate_rental_days(days: i64) -> ValidationResult<()> {
    if days < 1 {
        return Err(ValidationError::MustBePositive {
            field: "rental days".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(discount: i64) -> ValidationResult<()> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Budi Santoso").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_customer_phone() {
        assert!(validate_customer_phone("+62 812-3456-7890").is_ok());
        assert!(validate_customer_phone("").is_err());
        assert!(validate_customer_phone(&"0".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0).is_ok()); // Comped prop
        assert!(validate_price(50_000).is_ok());
        assert!(validate_price(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(8).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_rental_days() {
        assert!(validate_rental_days(1).is_ok());
        assert!(validate_rental_days(30).is_ok());
        assert!(validate_rental_days(0).is_err());
        assert!(validate_rental_days(-3).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0).is_ok());
        assert!(validate_discount_percent(10).is_ok());
        assert!(validate_discount_percent(100).is_ok());
        assert!(validate_discount_percent(101).is_err());
        assert!(validate_discount_percent(-1).is_err());
    }
}
