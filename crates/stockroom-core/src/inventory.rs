//! # Inventory
//!
//! The in-memory product collection and every operation the menu offers.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Inventory                                       │
//! │                                                                         │
//! │  add_product(new)         ──► assigns next_code(), appends              │
//! │  list_all()               ──► sorted by item code (view only)           │
//! │  update_product(code, Δ)  ──► in place, first match, or NotFound        │
//! │  low_stock(threshold)     ──► stock < threshold, collection order       │
//! │                                                                         │
//! │  Order of `products` = insertion order = order written to disk          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item codes are not checked for uniqueness. A hand-edited data file can
//! contain duplicates; lookups then resolve to the first match.

use crate::error::{CoreError, CoreResult};
use crate::item_code::ItemCode;
use crate::types::{NewProduct, Product, ProductUpdate};
use crate::validation::validate_price;

/// Ordered collection of products owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Wraps products loaded from storage, keeping their order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Inventory { products }
    }

    /// Products in collection order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Derives the next item code.
    ///
    /// ## Rules
    /// - Empty inventory → `ITM001`
    /// - Otherwise the highest `ITM<digits>` suffix + 1
    /// - No conforming code at all → `ITM001`
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Inventory, ItemCode, Money, Product};
    ///
    /// let inventory = Inventory::from_products(vec![Product {
    ///     name: "Pen".into(),
    ///     price: Money::from_cents(250),
    ///     stock: 100,
    ///     item_code: ItemCode::new("ITM007"),
    /// }]);
    /// assert_eq!(inventory.next_code().unwrap().as_str(), "ITM008");
    /// ```
    pub fn next_code(&self) -> CoreResult<ItemCode> {
        let highest = self
            .products
            .iter()
            .filter_map(|p| p.item_code.sequence())
            .max();

        match highest {
            None => Ok(ItemCode::from_sequence(1)),
            Some(n) => n
                .checked_add(1)
                .map(ItemCode::from_sequence)
                .ok_or(CoreError::CodeSequenceExhausted),
        }
    }

    /// Creates a product with the next item code and appends it.
    ///
    /// Callers validate price and stock while reading input; the price check
    /// is repeated here so no path can store a non-positive price.
    pub fn add_product(&mut self, new: NewProduct) -> CoreResult<&Product> {
        validate_price(new.price)?;
        let item_code = self.next_code()?;

        let index = self.products.len();
        self.products.push(Product {
            name: new.name,
            price: new.price,
            stock: new.stock,
            item_code,
        });
        Ok(&self.products[index])
    }

    /// All products sorted ascending by item code.
    ///
    /// Sorting is lexicographic, which matches numeric order while codes
    /// share the same width. The stored order is not changed.
    pub fn list_all(&self) -> Vec<&Product> {
        let mut sorted: Vec<&Product> = self.products.iter().collect();
        sorted.sort_by(|a, b| a.item_code.cmp(&b.item_code));
        sorted
    }

    /// Finds the first product whose code matches `code` after normalization.
    pub fn find(&self, code: &str) -> Option<&Product> {
        let code = ItemCode::normalize(code);
        self.products.iter().find(|p| p.item_code == code)
    }

    /// Applies a partial update to the first product matching `code`.
    ///
    /// ## Returns
    /// * `Ok(&Product)` - The product after the update
    /// * `Err(CoreError::ProductNotFound)` - Nothing matched; nothing changed
    /// * `Err(CoreError::Validation)` - The new price is not positive
    pub fn update_product(&mut self, code: &str, update: ProductUpdate) -> CoreResult<&Product> {
        let code = ItemCode::normalize(code);

        if let Some(price) = update.price {
            validate_price(price)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.item_code == code)
            .ok_or_else(|| CoreError::ProductNotFound(code.to_string()))?;

        if let Some(stock) = update.stock {
            product.stock = stock;
        }
        if let Some(price) = update.price {
            product.price = price;
        }

        Ok(&*product)
    }

    /// Products with stock strictly below `threshold`, in collection order.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
