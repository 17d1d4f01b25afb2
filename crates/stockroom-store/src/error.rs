//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and categorization      │
//! │       │                                                                 │
//! │       ├── Read / Corrupt → load() swaps in an empty inventory          │
//! │       │                                                                 │
//! │       └── Write / Encode → reported by the terminal, no retry          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Data file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    ///
    /// ## When This Occurs
    /// - Permissions issue
    /// - Path points at a directory
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not a valid product list.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited JSON
    /// - A record is missing `name`, `price`, `stock` or `item_code`
    /// - A field has the wrong type (string price, negative stock, ...)
    #[error("{} is not a valid inventory file: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The inventory could not be written.
    ///
    /// ## When This Occurs
    /// - Parent directory does not exist
    /// - Read-only file system, disk full
    #[error("Could not save inventory to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The inventory could not be serialized.
    #[error("Could not encode inventory: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
