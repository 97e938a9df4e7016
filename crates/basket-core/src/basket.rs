//! # Basket
//!
//! The aggregate that ties the pricing pipeline together.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  add(code) ──► catalog check ──► items[code] += 1                   │
//! │                                                                     │
//! │  totals()                                                           │
//! │    subtotal   = Σ price × quantity                                  │
//! │    discount   = Σ offer contributions (each pre-rounded)            │
//! │    discounted = subtotal − discount                                 │
//! │    delivery   = delivery_calculator(discounted)                     │
//! │    total      = discounted + delivery                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A basket exclusively owns its quantity map; catalog, delivery
//! calculator, and offers are shared read-only with every other basket the
//! factory produced.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalog;
use crate::delivery::DeliveryCalculator;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offer::Offer;

/// Basket contents: product code → positive quantity.
///
/// Every key exists in the associated catalog at the time of addition.
pub type BasketItems = BTreeMap<String, u32>;

// =============================================================================
// Totals
// =============================================================================

/// Receipt-style breakdown of one pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of unit price × quantity, before discounts.
    pub subtotal: Money,

    /// Summed offer discounts.
    pub discount: Money,

    /// Delivery charge on the discounted subtotal.
    pub delivery: Money,

    /// Final amount payable.
    pub total: Money,
}

// =============================================================================
// Basket
// =============================================================================

/// A single checkout session.
///
/// Created by [`crate::BasketFactory::create_basket`] (or directly from
/// shared collaborators), mutated via [`Basket::add`]/[`Basket::clear`],
/// priced via [`Basket::totals`].
#[derive(Debug, Clone)]
pub struct Basket {
    catalog: Arc<ProductCatalog>,
    delivery_calculator: Arc<dyn DeliveryCalculator>,
    offers: Arc<Vec<Box<dyn Offer>>>,
    items: BasketItems,
}

impl Basket {
    /// Creates an empty basket over shared collaborators.
    pub fn new(
        catalog: Arc<ProductCatalog>,
        delivery_calculator: Arc<dyn DeliveryCalculator>,
        offers: Arc<Vec<Box<dyn Offer>>>,
    ) -> Self {
        Basket {
            catalog,
            delivery_calculator,
            offers,
            items: BasketItems::new(),
        }
    }

    /// Adds one unit of a product by code.
    ///
    /// Fails with [`CoreError::ProductNotFound`] when the catalog has no
    /// such code; the basket is left unchanged in that case.
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        if !self.catalog.has_product(code) {
            return Err(CoreError::ProductNotFound(code.to_string()));
        }

        *self.items.entry(code.to_string()).or_insert(0) += 1;
        Ok(())
    }

    /// Returns an owned snapshot of the current contents.
    ///
    /// Mutating the returned map never affects the basket.
    pub fn items(&self) -> BasketItems {
        self.items.clone()
    }

    /// Checks if the basket holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the basket; the instance stays usable.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Prices the basket and returns the full breakdown.
    ///
    /// Read-only: pricing either fully succeeds or fails without mutating
    /// anything.
    pub fn totals(&self) -> CoreResult<Totals> {
        let subtotal = self.subtotal()?;
        let discount = self.offer_discounts()?;
        let discounted_subtotal = subtotal - discount;
        let delivery = self
            .delivery_calculator
            .calculate_delivery(discounted_subtotal)?;

        Ok(Totals {
            subtotal,
            discount,
            delivery,
            total: discounted_subtotal + delivery,
        })
    }

    /// Prices the basket and returns the final amount payable.
    pub fn total(&self) -> CoreResult<Money> {
        Ok(self.totals()?.total)
    }

    /// Descriptions of the offers configured on this basket.
    pub fn offer_descriptions(&self) -> Vec<String> {
        self.offers.iter().map(|offer| offer.describe()).collect()
    }

    fn subtotal(&self) -> CoreResult<Money> {
        let mut subtotal = Money::zero();
        for (code, quantity) in &self.items {
            let product = self.catalog.product(code)?;
            subtotal += product.price().multiply_quantity(i64::from(*quantity));
        }

        Ok(subtotal)
    }

    fn offer_discounts(&self) -> CoreResult<Money> {
        let mut total_discount = Money::zero();
        for offer in self.offers.iter() {
            total_discount += offer.calculate_discount(&self.items, &self.catalog)?;
        }

        Ok(total_discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
