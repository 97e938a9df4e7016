//! # Validation Module
//!
//! Input validation for the basket engine's fallible constructors.
//!
//! Every rule here runs at construction time, before any state is built:
//! [`crate::Product::new`], the offer constructors, and
//! [`crate::TieredDeliveryCalculator::new`] each call into this module and
//! refuse to produce a value that would break an invariant. A constructed
//! value never needs re-checking.
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_product_code, validate_minimum_quantity};
//!
//! assert!(validate_product_code("R01").is_ok());
//! assert!(validate_product_code("").is_err());
//! assert!(validate_minimum_quantity(0).is_err());
//! ```

use crate::delivery::DeliveryTier;
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// Codes are case-sensitive opaque identifiers; the only structural rule is
/// that they must not be empty (or whitespace-only).
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product code".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "product price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage. Must be a finite value in [0, 100].
pub fn validate_discount_percentage(percentage: f64) -> ValidationResult<()> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

/// Validates an offer's minimum quantity. At least one item must be
/// required for the offer to ever apply.
pub fn validate_minimum_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "minimum quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Delivery Tier Validators
// =============================================================================

/// Validates a delivery tier list.
///
/// ## Rules
/// - Must not be empty
/// - Thresholds must be non-negative and strictly descending
/// - Costs must be non-negative
pub fn validate_delivery_tiers(tiers: &[DeliveryTier]) -> ValidationResult<()> {
    if tiers.is_empty() {
        return Err(ValidationError::Empty {
            field: "delivery tiers".to_string(),
        });
    }

    let mut previous_threshold: Option<Money> = None;
    for tier in tiers {
        if tier.threshold.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "delivery tier threshold".to_string(),
            });
        }
        if tier.cost.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "delivery tier cost".to_string(),
            });
        }
        if let Some(previous) = previous_threshold {
            if tier.threshold >= previous {
                return Err(ValidationError::NotDescending {
                    field: "delivery tiers".to_string(),
                });
            }
        }
        previous_threshold = Some(tier.threshold);
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
    fn test_validate_product_code() {
        assert!(validate_product_code("R01").is_ok());
        assert!(validate_product_code("").is_err());
        assert!(validate_product_code("   ").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Red Widget").is_ok());
        assert!(validate_product_name("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(3295)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(0.0).is_ok());
        assert!(validate_discount_percentage(100.0).is_ok());
        assert!(validate_discount_percentage(-0.1).is_err());
        assert!(validate_discount_percentage(100.1).is_err());
        assert!(validate_discount_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_minimum_quantity() {
        assert!(validate_minimum_quantity(1).is_ok());
        assert!(validate_minimum_quantity(0).is_err());
    }

    #[test]
    fn test_validate_delivery_tiers() {
        let valid = vec![
            DeliveryTier::new(Money::from_cents(9000), Money::zero()),
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
            DeliveryTier::new(Money::zero(), Money::from_cents(495)),
        ];
        assert!(validate_delivery_tiers(&valid).is_ok());

        assert!(validate_delivery_tiers(&[]).is_err());

        let ascending = vec![
            DeliveryTier::new(Money::zero(), Money::from_cents(495)),
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
        ];
        assert!(validate_delivery_tiers(&ascending).is_err());

        let duplicate = vec![
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(495)),
        ];
        assert!(validate_delivery_tiers(&duplicate).is_err());

        let negative_cost = vec![DeliveryTier::new(Money::zero(), Money::from_cents(-1))];
        assert!(validate_delivery_tiers(&negative_cost).is_err());
    }
}
