//! # Basket Factory
//!
//! Wires the default collaborators (Acme catalog, Acme delivery rules,
//! standing promotions) and produces configured [`Basket`] instances.
//!
//! The factory is the single place configuration lives: collaborators are
//! explicit values created once and shared by `Arc` with every basket the
//! factory subsequently creates. Nothing in the crate reaches for
//! process-wide state.

use std::sync::Arc;

use crate::basket::Basket;
use crate::catalog::ProductCatalog;
use crate::delivery::{DeliveryCalculator, TieredDeliveryCalculator};
use crate::offer::{acme_default_offers, Offer};

/// Produces baskets that share a configured catalog, delivery calculator,
/// and offer set.
///
/// ## Example
/// ```rust
/// use basket_core::BasketFactory;
///
/// let factory = BasketFactory::new();
/// let mut basket = factory.create_basket();
/// basket.add("B01")?;
/// basket.add("G01")?;
/// assert_eq!(basket.total()?.cents(), 3785); // 37.85
/// # Ok::<(), basket_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BasketFactory {
    catalog: Arc<ProductCatalog>,
    delivery_calculator: Arc<dyn DeliveryCalculator>,
    offers: Arc<Vec<Box<dyn Offer>>>,
}

impl BasketFactory {
    /// Creates a factory with the Acme Widget Co defaults: the standard
    /// catalog, the tiered delivery rules, and buy-one-get-one-half-price
    /// on R01.
    pub fn new() -> Self {
        BasketFactory {
            catalog: Arc::new(ProductCatalog::acme_catalog()),
            delivery_calculator: Arc::new(TieredDeliveryCalculator::acme_rules()),
            offers: Arc::new(acme_default_offers()),
        }
    }

    /// Replaces the catalog. Baskets created earlier keep the old one.
    pub fn with_catalog(mut self, catalog: ProductCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Replaces the delivery calculator.
    pub fn with_delivery_calculator(
        mut self,
        calculator: impl DeliveryCalculator + 'static,
    ) -> Self {
        self.delivery_calculator = Arc::new(calculator);
        self
    }

    /// Replaces the offer set. An empty vector disables all offers.
    pub fn with_offers(mut self, offers: Vec<Box<dyn Offer>>) -> Self {
        self.offers = Arc::new(offers);
        self
    }

    /// Creates a new empty basket sharing the currently configured
    /// collaborators by reference.
    pub fn create_basket(&self) -> Basket {
        Basket::new(
            self.catalog.clone(),
            self.delivery_calculator.clone(),
            self.offers.clone(),
        )
    }

    /// The configured catalog.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Descriptions of the configured offers.
    pub fn offer_descriptions(&self) -> Vec<String> {
        self.offers.iter().map(|offer| offer.describe()).collect()
    }
}

impl Default for BasketFactory {
    fn default() -> Self {
        BasketFactory::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
