//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  basket-core errors (this file)                                     │
//! │  ├── CoreError        - Pricing/domain errors                       │
//! │  └── ValidationError  - Construction-time input failures            │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → caller (demo app, API, ...)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, subtotal, etc.)
//! 3. Errors are enum variants, never String
//! 4. Invalid objects are never observable: constructors validate first

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing and domain errors.
///
/// These represent failed lookups or broken configuration invariants and
/// propagate synchronously to the caller. There are no transient failure
/// modes and no retries anywhere in the crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product code has no entry in the catalog.
    ///
    /// Raised both by [`crate::ProductCatalog::product`] and by
    /// [`crate::Basket::add`]; the basket is left unchanged.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No delivery tier matched the discounted subtotal.
    ///
    /// Unreachable with a tier list that includes a zero threshold, but a
    /// validated list is not required to include one. Indicates a
    /// misconfigured tier table, not a user error.
    #[error("No delivery tier matches subtotal {subtotal}; delivery tiers are misconfigured")]
    NoDeliveryTier { subtotal: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction-time input validation errors.
///
/// Every fallible constructor in the crate runs its inputs through
/// [`crate::validation`] before any state is built, so a value that exists
/// is always a valid one.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A collection that must have at least one element is empty.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Tier thresholds are not strictly descending.
    #[error("{field} must be sorted by threshold in strictly descending order")]
    NotDescending { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("INVALID".to_string());
        assert_eq!(err.to_string(), "Product not found: INVALID");

        let err = CoreError::NoDeliveryTier {
            subtotal: Money::from_cents(-100),
        };
        assert_eq!(
            err.to_string(),
            "No delivery tier matches subtotal -1.00; delivery tiers are misconfigured"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product code".to_string(),
        };
        assert_eq!(err.to_string(), "product code is required");

        let err = ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "discount percentage must be between 0 and 100"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Empty {
            field: "delivery tiers".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
