//! # basket-core: Pure Pricing Logic for the Acme Basket
//!
//! This crate is the **heart** of the Acme basket engine. It prices a
//! shopping basket as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Acme Basket Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │            Presentation shell (apps/demo, any API)            │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ basket-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐ ┌─────────┐ │  │
//! │  │  │  money  │ │ catalog │ │ offer  │ │ delivery │ │ basket  │ │  │
//! │  │  │  Money  │ │ Product │ │ Offer  │ │  Tiered  │ │ Basket  │ │  │
//! │  │  │  Rate   │ │ Catalog │ │ BOGOHP │ │  rules   │ │ Factory │ │  │
//! │  │  └─────────┘ └─────────┘ └────────┘ └──────────┘ └─────────┘ │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Pipeline
//!
//! catalog lookup → subtotal → offer-discount aggregation → tiered
//! delivery lookup → rounding. Each offer rounds its own contribution to a
//! whole minor unit before summation; with amounts stored as integer minor
//! units the final total is exact at two decimal places by construction.
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Product and the in-memory product catalog
//! - [`offer`] - Composable discount offers
//! - [`delivery`] - Tiered delivery charges
//! - [`basket`] - The basket aggregate and totals breakdown
//! - [`factory`] - Default wiring and collaborator overrides
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::BasketFactory;
//!
//! let factory = BasketFactory::new();
//! let mut basket = factory.create_basket();
//!
//! basket.add("R01")?;
//! basket.add("R01")?;
//!
//! // 65.90 subtotal, 16.48 off (second red widget half price),
//! // 4.95 delivery
//! assert_eq!(basket.total()?.cents(), 5437);
//! # Ok::<(), basket_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod delivery;
pub mod error;
pub mod factory;
pub mod money;
pub mod offer;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Basket` instead of
// `use basket_core::basket::Basket`

pub use basket::{Basket, BasketItems, Totals};
pub use catalog::{Product, ProductCatalog};
pub use delivery::{DeliveryCalculator, DeliveryTier, TieredDeliveryCalculator};
pub use error::{CoreError, CoreResult, ValidationError};
pub use factory::BasketFactory;
pub use money::{DiscountRate, Money};
pub use offer::{BuyOneGetOneHalfPriceOffer, Offer, ProductPercentageDiscountOffer};
