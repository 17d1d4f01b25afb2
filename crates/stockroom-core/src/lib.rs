//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the inventory rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal menu (apps/terminal)                   │   │
//! │  │     Add ──► View All ──► Update ──► Low Stock ──► Save & Exit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ inventory │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Inventory │  │  parsers  │  │   │
//! │  │   │  ItemCode │  │           │  │ next_code │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (Data File Layer)                │   │
//! │  │               inventory_data.json load / save                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductUpdate)
//! - [`item_code`] - The `ITM###` product identifier
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - The in-memory collection and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Money, NewProduct};
//!
//! let mut inventory = Inventory::new();
//! let pen = inventory
//!     .add_product(NewProduct::new("Pen", Money::from_cents(250), 100))
//!     .unwrap();
//!
//! assert_eq!(pen.item_code.as_str(), "ITM001");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod item_code;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use item_code::ItemCode;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix shared by every generated item code.
pub const ITEM_CODE_PREFIX: &str = "ITM";

/// Minimum number of digits in a generated item code (`ITM001`).
///
/// Sequence numbers above 999 widen the field instead of truncating.
pub const ITEM_CODE_WIDTH: usize = 3;

/// Stock level below which a product shows up in the low stock report.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;
