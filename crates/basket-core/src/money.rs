//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `DiscountRate` type used by percentage-based offers.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    32.95 is stored as 3295 cents                                    │
//! │    Every rounding step is explicit integer arithmetic               │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every amount that flows through the basket pipeline - unit prices, line
//! totals, offer discounts, delivery costs, the grand total - is a `Money`.
//! Offers round their own contribution to a whole minor unit via [`Money::half`]
//! or [`Money::calculate_discount`] before the basket sums them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents/pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate values (discounted subtotals) may in
///   principle dip negative and must not wrap
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency symbol**: locale and symbol are presentation-layer
///   concerns; `Display` renders `units.cc` only
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    ///
    /// let price = Money::from_cents(3295); // 32.95
    /// assert_eq!(price.cents(), 3295);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    ///
    /// let price = Money::from_major_minor(32, 95);
    /// assert_eq!(price.cents(), 3295);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units (cents).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    ///
    /// let unit_price = Money::from_cents(795); // 7.95
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 2385); // 23.85
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns half of the amount, rounded half away from zero to a whole
    /// minor unit.
    ///
    /// This is the rounding step of the buy-one-get-one-half-price offer:
    /// an odd number of cents splits upward, so half of 32.95 is 16.48.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    ///
    /// assert_eq!(Money::from_cents(3295).half().cents(), 1648);
    /// assert_eq!(Money::from_cents(3294).half().cents(), 1647);
    /// ```
    #[inline]
    pub const fn half(&self) -> Self {
        // signum pushes the .5 case away from zero before truncating division
        Money((self.0 + self.0.signum()) / 2)
    }

    /// Calculates the discount portion of this amount at the given rate,
    /// rounded half away from zero to a whole minor unit.
    ///
    /// ## Implementation
    /// Integer math over i128: `(amount * bps + 5000) / 10000`. The +5000
    /// provides the half-cent rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{DiscountRate, Money};
    ///
    /// let line = Money::from_cents(2000);        // 20.00
    /// let rate = DiscountRate::from_percentage(20.0);
    /// assert_eq!(line.calculate_discount(rate).cents(), 400); // 4.00
    /// ```
    pub fn calculate_discount(&self, rate: DiscountRate) -> Money {
        // i128 prevents overflow on large amounts
        let discount_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(discount_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `units.cc` with no currency symbol; the presentation layer owns
/// symbol and locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000, so 2000 bps = 20%. Storing bps keeps
/// the percentage arithmetic in integers end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage, quantized to the nearest basis
    /// point.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(3295);
        assert_eq!(money.cents(), 3295);
        assert_eq!(money.units(), 32);
        assert_eq!(money.cents_part(), 95);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(24, 95);
        assert_eq!(money.cents(), 2495);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(3295)), "32.95");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.cents(), 500);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // odd cents round upward
        assert_eq!(Money::from_cents(3295).half().cents(), 1648);
        // even cents split exactly
        assert_eq!(Money::from_cents(3294).half().cents(), 1647);
        assert_eq!(Money::zero().half().cents(), 0);
        // negative odd cents round downward (away from zero)
        assert_eq!(Money::from_cents(-5).half().cents(), -3);
    }

    #[test]
    fn test_calculate_discount_basic() {
        // 20.00 at 20% = 4.00
        let line = Money::from_cents(2000);
        let rate = DiscountRate::from_percentage(20.0);
        assert_eq!(line.calculate_discount(rate).cents(), 400);
    }

    #[test]
    fn test_calculate_discount_with_rounding() {
        // 6.65 at 50% = 3.325 → 3.33 (half cent rounds up)
        let line = Money::from_cents(665);
        let rate = DiscountRate::from_percentage(50.0);
        assert_eq!(line.calculate_discount(rate).cents(), 333);
    }

    #[test]
    fn test_calculate_discount_extremes() {
        let line = Money::from_cents(1000);
        assert_eq!(line.calculate_discount(DiscountRate::zero()).cents(), 0);
        assert_eq!(
            line.calculate_discount(DiscountRate::from_percentage(100.0))
                .cents(),
            1000
        );
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(8.25).bps(), 825);
        assert_eq!(DiscountRate::from_percentage(20.0).percentage(), 20.0);
        assert!(DiscountRate::from_percentage(0.0).is_zero());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_cents(3295)).unwrap();
        assert_eq!(json, "3295");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(3295));
    }
}
