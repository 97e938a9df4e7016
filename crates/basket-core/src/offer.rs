//! # Discount Offers
//!
//! Polymorphic discount rules. An offer is a stateless rule object holding
//! its own configuration; given the current basket contents and the
//! catalog it computes a discount amount.
//!
//! Composition contract: **each offer rounds its own contribution to a
//! whole minor unit before the basket sums contributions**. Two offers of
//! 0.005 each discount 0.02 total, not 0.01 - collapsing this into one
//! final rounding step changes multi-offer totals.

use std::fmt;

use crate::basket::BasketItems;
use crate::catalog::ProductCatalog;
use crate::error::CoreResult;
use crate::money::{DiscountRate, Money};
use crate::validation::{
    validate_discount_percentage, validate_minimum_quantity, validate_product_code,
};

// =============================================================================
// Offer Trait
// =============================================================================

/// A composable discount rule.
///
/// Implementations never mutate anything and hold no hidden state; the
/// discount is a pure function of `(items, catalog)`. Offers are shared
/// read-only across baskets, so they must be `Send + Sync`.
pub trait Offer: fmt::Debug + Send + Sync {
    /// Computes this offer's discount for the given basket contents,
    /// already rounded to a whole minor unit.
    fn calculate_discount(&self, items: &BasketItems, catalog: &ProductCatalog)
        -> CoreResult<Money>;

    /// Human-readable description of the offer.
    fn describe(&self) -> String;
}

// =============================================================================
// Buy One Get One Half Price
// =============================================================================

/// "Buy one, get the second half price" on a single product code.
///
/// For target quantity `q`, every full pair discounts one unit by half:
/// `discount = round(floor(q / 2) × unit_price / 2)`.
#[derive(Debug, Clone)]
pub struct BuyOneGetOneHalfPriceOffer {
    product_code: String,
}

impl BuyOneGetOneHalfPriceOffer {
    /// Creates the offer for a product code. Fails on an empty code.
    pub fn new(product_code: impl Into<String>) -> CoreResult<Self> {
        let product_code = product_code.into();
        validate_product_code(&product_code)?;
        Ok(BuyOneGetOneHalfPriceOffer { product_code })
    }

    /// The targeted product code.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }
}

impl Offer for BuyOneGetOneHalfPriceOffer {
    fn calculate_discount(
        &self,
        items: &BasketItems,
        catalog: &ProductCatalog,
    ) -> CoreResult<Money> {
        let quantity = items.get(&self.product_code).copied().unwrap_or(0);
        if quantity < 2 {
            return Ok(Money::zero());
        }

        let product = catalog.product(&self.product_code)?;
        // for every 2 items, 1 gets half price
        let discounted_items = i64::from(quantity / 2);
        Ok(product.price().multiply_quantity(discounted_items).half())
    }

    fn describe(&self) -> String {
        format!("Buy one {}, get the second half price", self.product_code)
    }
}

// =============================================================================
// Product Percentage Discount
// =============================================================================

/// Percentage discount on a single product code, gated on a minimum
/// quantity.
///
/// If the target quantity reaches `minimum_quantity`, the whole line is
/// discounted: `discount = round(q × unit_price × percentage / 100)`.
#[derive(Debug, Clone)]
pub struct ProductPercentageDiscountOffer {
    product_code: String,
    rate: DiscountRate,
    minimum_quantity: u32,
}

impl ProductPercentageDiscountOffer {
    /// Creates the offer with the default minimum quantity of 1.
    ///
    /// Fails on an empty code or a percentage outside [0, 100].
    pub fn new(product_code: impl Into<String>, percentage: f64) -> CoreResult<Self> {
        Self::with_minimum_quantity(product_code, percentage, 1)
    }

    /// Creates the offer gated on a minimum quantity (at least 1).
    pub fn with_minimum_quantity(
        product_code: impl Into<String>,
        percentage: f64,
        minimum_quantity: u32,
    ) -> CoreResult<Self> {
        let product_code = product_code.into();

        validate_product_code(&product_code)?;
        validate_discount_percentage(percentage)?;
        validate_minimum_quantity(minimum_quantity)?;

        Ok(ProductPercentageDiscountOffer {
            product_code,
            rate: DiscountRate::from_percentage(percentage),
            minimum_quantity,
        })
    }

    /// The targeted product code.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// The configured discount rate.
    pub fn rate(&self) -> DiscountRate {
        self.rate
    }

    /// The quantity required before the offer applies.
    pub fn minimum_quantity(&self) -> u32 {
        self.minimum_quantity
    }
}

impl Offer for ProductPercentageDiscountOffer {
    fn calculate_discount(
        &self,
        items: &BasketItems,
        catalog: &ProductCatalog,
    ) -> CoreResult<Money> {
        let quantity = items.get(&self.product_code).copied().unwrap_or(0);
        if quantity < self.minimum_quantity {
            return Ok(Money::zero());
        }

        let product = catalog.product(&self.product_code)?;
        let line_total = product.price().multiply_quantity(i64::from(quantity));
        Ok(line_total.calculate_discount(self.rate))
    }

    fn describe(&self) -> String {
        format!(
            "{:.1}% off {} (minimum {} item{})",
            self.rate.percentage(),
            self.product_code,
            self.minimum_quantity,
            if self.minimum_quantity > 1 { "s" } else { "" }
        )
    }
}

// =============================================================================
// Standard Promotions
// =============================================================================

/// The standing Acme Widget Co promotion set: buy one Red Widget, get the
/// second half price.
pub(crate) fn acme_default_offers() -> Vec<Box<dyn Offer>> {
    vec![Box::new(BuyOneGetOneHalfPriceOffer {
        product_code: "R01".to_string(),
    })]
}

// =============================================================================
// Unit Tests
// =============================================================================
