//! # Pricing Calculator
//!
//! Derives subtotal/total from cart contents, rental duration, and discount
//! rate. Pure integer arithmetic throughout - no floating point.
//!
//! ## Pricing Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rental Pricing                                       │
//! │                                                                         │
//! │  subtotal = Σ (line.price × line.quantity) × days                      │
//! │                                                                         │
//! │  total    = subtotal × (100 - discount_percent) / 100                  │
//! │                                                                         │
//! │  Example: 2 × 50 000 × 3 days, 10% discount                            │
//! │           subtotal = 300 000                                           │
//! │           total    = 300 000 × 90 / 100 = 270 000                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Preconditions (caller-enforced)
//! `days >= 1` and `0 <= discount_percent <= 100`. The calculator does not
//! clamp; callers must validate or default invalid input (blank `days`
//! defaults to 1, blank discount to 0) before calling. Division rounds
//! toward zero, which is exact for the whole-unit prices in the catalog.

use crate::types::CartLine;

/// Subtotal for the whole rental period, before discount.
pub fn subtotal(lines: &[CartLine], days: i64) -> i64 {
    let per_day: i64 = lines.iter().map(CartLine::line_total).sum();
    per_day * days
}

/// Applies a percentage discount to an amount.
#[inline]
pub fn apply_discount(amount: i64, discount_percent: i64) -> i64 {
    amount * (100 - discount_percent) / 100
}

/// Grand total: discounted subtotal for the whole rental period.
pub fn total(lines: &[CartLine], days: i64, discount_percent: i64) -> i64 {
    apply_discount(subtotal(lines, days), discount_percent)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn line(price: i64, quantity: i64) -> CartLine {
        CartLine {
            item_id: "prop-001".to_string(),
            name: "Test Prop".to_string(),
            price,
            category: Category::Equipment,
            quantity,
        }
    }

    #[test]
    fn test_subtotal_scales_with_days() {
        let lines = vec![line(50_000, 2)];
        assert_eq!(subtotal(&lines, 1), 100_000);
        assert_eq!(subtotal(&lines, 3), 300_000);
    }

    #[test]
    fn test_total_with_discount() {
        // Scenario B: {qty 2, price 50 000}, days=3, discount=10 → 270 000
        let lines = vec![line(50_000, 2)];
        assert_eq!(total(&lines, 3, 10), 270_000);
    }

    #[test]
    fn test_total_without_discount_equals_subtotal() {
        let lines = vec![line(35_000, 1), line(40_000, 2)];
        assert_eq!(total(&lines, 2, 0), subtotal(&lines, 2));
        assert_eq!(total(&lines, 2, 0), 230_000);
    }

    #[test]
    fn test_full_discount_is_free() {
        let lines = vec![line(150_000, 1)];
        assert_eq!(total(&lines, 7, 100), 0);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        assert_eq!(total(&[], 3, 10), 0);
    }
}
