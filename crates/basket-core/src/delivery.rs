//! # Delivery Charges
//!
//! Tiered delivery pricing: a post-discount subtotal maps to the cost of
//! the first tier (scanning highest threshold first) whose threshold it
//! meets.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Acme rules                                                         │
//! │                                                                     │
//! │  subtotal >= 90.00  ──►  delivery 0.00                              │
//! │  subtotal >= 50.00  ──►  delivery 2.95                              │
//! │  subtotal >=  0.00  ──►  delivery 4.95                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_delivery_tiers;

// =============================================================================
// Delivery Calculator Trait
// =============================================================================

/// Maps a post-discount subtotal to a delivery charge.
///
/// Implementations are read-only once constructed and shared across
/// baskets, so they must be `Send + Sync`.
pub trait DeliveryCalculator: fmt::Debug + Send + Sync {
    /// Returns the delivery cost for the given subtotal.
    fn calculate_delivery(&self, subtotal: Money) -> CoreResult<Money>;
}

// =============================================================================
// Delivery Tier
// =============================================================================

/// A `(threshold, cost)` pair: subtotals at or above `threshold` (up to the
/// next higher tier) pay `cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    /// Minimum subtotal for this tier to apply. Non-negative.
    pub threshold: Money,

    /// Delivery cost charged in this tier. Non-negative.
    pub cost: Money,
}

impl DeliveryTier {
    /// Creates a tier. Range rules are enforced by
    /// [`TieredDeliveryCalculator::new`] over the whole list.
    pub const fn new(threshold: Money, cost: Money) -> Self {
        DeliveryTier { threshold, cost }
    }
}

// =============================================================================
// Tiered Delivery Calculator
// =============================================================================

/// Threshold-table implementation of [`DeliveryCalculator`].
///
/// The tier list is validated at construction (non-empty, non-negative
/// amounts, strictly descending thresholds), never at calculation time.
#[derive(Debug, Clone)]
pub struct TieredDeliveryCalculator {
    /// Invariant: non-empty, strictly descending thresholds.
    tiers: Vec<DeliveryTier>,
}

impl TieredDeliveryCalculator {
    /// Creates a calculator from a tier list sorted by threshold
    /// descending.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{DeliveryTier, Money, TieredDeliveryCalculator};
    ///
    /// let flat = TieredDeliveryCalculator::new(vec![
    ///     DeliveryTier::new(Money::zero(), Money::from_cents(199)),
    /// ])?;
    /// # Ok::<(), basket_core::CoreError>(())
    /// ```
    pub fn new(tiers: Vec<DeliveryTier>) -> CoreResult<Self> {
        validate_delivery_tiers(&tiers)?;
        Ok(TieredDeliveryCalculator { tiers })
    }

    /// The standard Acme Widget Co delivery rules:
    /// free from 90.00, 2.95 from 50.00, 4.95 below that.
    pub fn acme_rules() -> Self {
        TieredDeliveryCalculator {
            tiers: vec![
                DeliveryTier::new(Money::from_cents(9000), Money::zero()),
                DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
                DeliveryTier::new(Money::zero(), Money::from_cents(495)),
            ],
        }
    }

    /// The configured tiers, highest threshold first.
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }
}

impl DeliveryCalculator for TieredDeliveryCalculator {
    /// First-match-wins scan from the highest threshold down.
    ///
    /// A validated tier list is not required to contain a zero-threshold
    /// catch-all, so the exhausted case stays a guarded error rather than
    /// an unreachable panic.
    fn calculate_delivery(&self, subtotal: Money) -> CoreResult<Money> {
        for tier in &self.tiers {
            if subtotal >= tier.threshold {
                return Ok(tier.cost);
            }
        }

        Err(CoreError::NoDeliveryTier { subtotal })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acme_rules_boundaries() {
        let calculator = TieredDeliveryCalculator::acme_rules();

        let cases = [
            (0, 495),
            (4999, 495),
            (5000, 295),
            (8999, 295),
            (9000, 0),
            (10000, 0),
        ];
        for (subtotal, expected) in cases {
            assert_eq!(
                calculator
                    .calculate_delivery(Money::from_cents(subtotal))
                    .unwrap(),
                Money::from_cents(expected),
                "subtotal {subtotal}"
            );
        }
    }

    #[test]
    fn test_delivery_is_non_increasing() {
        let calculator = TieredDeliveryCalculator::acme_rules();
        let mut previous = Money::from_cents(i64::MAX);
        for subtotal in [0, 4999, 5000, 8999, 9000, 20000] {
            let cost = calculator
                .calculate_delivery(Money::from_cents(subtotal))
                .unwrap();
            assert!(cost <= previous, "cost rose at subtotal {subtotal}");
            previous = cost;
        }
    }

    #[test]
    fn test_empty_tiers_rejected() {
        assert!(TieredDeliveryCalculator::new(vec![]).is_err());
    }

    #[test]
    fn test_unsorted_tiers_rejected() {
        let result = TieredDeliveryCalculator::new(vec![
            DeliveryTier::new(Money::zero(), Money::from_cents(495)),
            DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let result = TieredDeliveryCalculator::new(vec![DeliveryTier::new(
            Money::zero(),
            Money::from_cents(-100),
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_matching_tier_is_guarded() {
        // valid list, but the lowest threshold is above the subtotal
        let calculator = TieredDeliveryCalculator::new(vec![DeliveryTier::new(
            Money::from_cents(1000),
            Money::from_cents(100),
        )])
        .unwrap();

        let result = calculator.calculate_delivery(Money::from_cents(500));
        assert!(matches!(result, Err(CoreError::NoDeliveryTier { .. })));
    }
}
