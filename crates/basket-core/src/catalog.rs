//! # Product Catalog
//!
//! [`Product`] and [`ProductCatalog`] - the read side of the pricing
//! pipeline. A catalog is built once at configuration time and shared
//! read-only by every basket created afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_code, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable after construction: fields are private and only readable
/// through accessors, and [`Product::new`] refuses an empty code, an empty
/// name, or a negative price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, case-sensitive (e.g. "R01").
    code: String,

    /// Display name shown on receipts.
    name: String,

    /// Unit price in minor units.
    price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Money, Product};
    ///
    /// let widget = Product::new("R01", "Red Widget", Money::from_cents(3295))?;
    /// assert_eq!(widget.code(), "R01");
    /// # Ok::<(), basket_core::CoreError>(())
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> CoreResult<Self> {
        let code = code.into();
        let name = name.into();

        validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product { code, name, price })
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// In-memory mapping from product code to [`Product`].
///
/// Lookups are exact string matches - no case folding, no trimming.
/// Re-adding a code replaces the prior product; there is no removal
/// operation, so a code observed by a basket stays resolvable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    /// Creates a catalog from an initial set of products.
    pub fn new(products: Vec<Product>) -> Self {
        let mut catalog = ProductCatalog::default();
        for product in products {
            catalog.add_product(product);
        }
        catalog
    }

    /// The standard Acme Widget Co catalog.
    ///
    /// | Code | Name         | Price |
    /// |------|--------------|-------|
    /// | R01  | Red Widget   | 32.95 |
    /// | G01  | Green Widget | 24.95 |
    /// | B01  | Blue Widget  |  7.95 |
    pub fn acme_catalog() -> Self {
        ProductCatalog::new(vec![
            Product {
                code: "R01".to_string(),
                name: "Red Widget".to_string(),
                price: Money::from_cents(3295),
            },
            Product {
                code: "G01".to_string(),
                name: "Green Widget".to_string(),
                price: Money::from_cents(2495),
            },
            Product {
                code: "B01".to_string(),
                name: "Blue Widget".to_string(),
                price: Money::from_cents(795),
            },
        ])
    }

    /// Inserts a product, replacing any prior entry with the same code.
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.code.clone(), product);
    }

    /// Checks whether a code has an entry. Exact match, case-sensitive.
    pub fn has_product(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Looks up a product by code.
    pub fn product(&self, code: &str) -> CoreResult<&Product> {
        self.products
            .get(code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))
    }

    /// Returns an owned snapshot of all products, keyed by code.
    ///
    /// Mutating the returned map never affects the catalog.
    pub fn products(&self) -> BTreeMap<String, Product> {
        self.products.clone()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red_widget() -> Product {
        Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap()
    }

    #[test]
    fn test_product_creation() {
        let product = red_widget();
        assert_eq!(product.code(), "R01");
        assert_eq!(product.name(), "Red Widget");
        assert_eq!(product.price(), Money::from_cents(3295));
    }

    #[test]
    fn test_product_rejects_invalid_input() {
        assert!(Product::new("", "Red Widget", Money::from_cents(3295)).is_err());
        assert!(Product::new("R01", "", Money::from_cents(3295)).is_err());
        assert!(Product::new("R01", "Red Widget", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        assert!(Product::new("FREE", "Free Sample", Money::zero()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProductCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.has_product("R01"));
        assert!(matches!(
            catalog.product("R01"),
            Err(CoreError::ProductNotFound(code)) if code == "R01"
        ));
    }

    #[test]
    fn test_lookup() {
        let catalog = ProductCatalog::new(vec![red_widget()]);
        assert!(catalog.has_product("R01"));
        assert!(!catalog.has_product("B01"));

        let product = catalog.product("R01").unwrap();
        assert_eq!(product.name(), "Red Widget");
        assert_eq!(product.price(), Money::from_cents(3295));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let catalog = ProductCatalog::new(vec![
            Product::new("r01", "Lowercase Widget", Money::from_cents(100)).unwrap(),
        ]);
        assert!(catalog.has_product("r01"));
        assert!(!catalog.has_product("R01"));
    }

    #[test]
    fn test_add_product_overwrites() {
        let mut catalog = ProductCatalog::new(vec![red_widget()]);
        catalog
            .add_product(Product::new("R01", "New Red Widget", Money::from_cents(3500)).unwrap());

        assert_eq!(catalog.len(), 1);
        let product = catalog.product("R01").unwrap();
        assert_eq!(product.name(), "New Red Widget");
        assert_eq!(product.price(), Money::from_cents(3500));
    }

    #[test]
    fn test_products_snapshot_is_independent() {
        let catalog = ProductCatalog::new(vec![red_widget()]);
        let mut snapshot = catalog.products();
        snapshot.clear();

        assert!(catalog.has_product("R01"));
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn test_acme_catalog_contents() {
        let catalog = ProductCatalog::acme_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.product("R01").unwrap().price(),
            Money::from_cents(3295)
        );
        assert_eq!(
            catalog.product("G01").unwrap().price(),
            Money::from_cents(2495)
        );
        assert_eq!(
            catalog.product("B01").unwrap().price(),
            Money::from_cents(795)
        );
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(red_widget()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "R01", "name": "Red Widget", "price": 3295 })
        );
    }
}
