//! # stockroom-store: Data File Layer for Stockroom
//!
//! This crate persists the inventory to a single JSON file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Session start                         Save & Exit                     │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐          ┌────────────────────┐       │   │
//! │  │   │  InventoryFile     │          │      codec         │       │   │
//! │  │   │  (file.rs)         │─────────►│   (codec.rs)       │       │   │
//! │  │   │                    │          │                    │       │   │
//! │  │   │  load  (recovers)  │          │  JSON array,       │       │   │
//! │  │   │  try_load          │          │  4-space indent    │       │   │
//! │  │   │  save  (overwrite) │          │                    │       │   │
//! │  │   └────────────────────┘          └────────────────────┘       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  inventory_data.json (working directory)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The file is read once when a session starts and written once when the
//! user chooses Save & Exit. Last full save wins.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockroom_store::InventoryFile;
//!
//! let file = InventoryFile::new("inventory_data.json");
//! let report = file.load();
//! if let Some(err) = &report.recovered_from {
//!     eprintln!("Warning: {err}");
//! }
//! file.save(&report.inventory)?;
//! # Ok::<(), stockroom_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod file;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::{InventoryFile, LoadReport};

/// File name used when no other location is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory_data.json";
