//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductUpdate  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  stock?         │       │
//! │  │  price (Money)  │   │  price          │   │  price?         │       │
//! │  │  stock          │   │  stock          │   │                 │       │
//! │  │  item_code      │   │  (code assigned │   │  (None = keep)  │       │
//! │  └─────────────────┘   │   on insert)    │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` field order is also the on-disk field order:
//! `name, price, stock, item_code`.

use serde::{Deserialize, Serialize};

use crate::item_code::ItemCode;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name. Expected to be non-empty, not enforced.
    pub name: String,

    /// Unit price; positive for every product created through the app.
    pub price: Money,

    /// Units on hand.
    pub stock: u32,

    /// Business identifier, assigned on creation and never changed.
    pub item_code: ItemCode,
}

impl Product {
    /// Checks if the product is below a low stock threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Everything needed to create a product; the item code is assigned by the
/// inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Money, stock: u32) -> Self {
        NewProduct {
            name: name.into(),
            price,
            stock,
        }
    }
}

/// A partial update to an existing product. `None` leaves the field as is.
///
/// Name and item code are immutable, so they have no slot here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub stock: Option<u32>,
    pub price: Option<Money>,
}

// =============================================================================
// Unit Tests
// =============================================================================
