//! # Inventory File
//!
//! Load and save of the whole inventory.
//!
//! ## Load Behaviour
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          load()                                         │
//! │                                                                         │
//! │  file missing?  ──yes──► empty inventory, no warning                    │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  read bytes     ──fail──► StoreError::Read    ─┐                        │
//! │       │                                        ├─► warn!, empty         │
//! │       ▼                                        │   inventory,           │
//! │  decode JSON    ──fail──► StoreError::Corrupt ─┘   error kept in report │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Inventory (file order preserved)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A corrupt file is never partially loaded: one bad record discards all.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use stockroom_core::Inventory;

use crate::codec;
use crate::error::{StoreError, StoreResult};

/// Location of the inventory data file.
///
/// ## Example
/// ```rust,ignore
/// let file = InventoryFile::new("./inventory_data.json");
/// let report = file.load();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFile {
    path: PathBuf,
}

/// Outcome of [`InventoryFile::load`].
#[derive(Debug)]
pub struct LoadReport {
    /// The loaded inventory, or an empty one after recovery.
    pub inventory: Inventory,

    /// The error that forced recovery, if any.
    pub recovered_from: Option<StoreError>,
}

impl InventoryFile {
    /// Creates a handle for the given path. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryFile { path: path.into() }
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the inventory, reporting every failure.
    ///
    /// ## Returns
    /// * `Ok(Inventory)` - File decoded, or file missing (empty inventory)
    /// * `Err(StoreError::Read)` - File exists but could not be read
    /// * `Err(StoreError::Corrupt)` - File is not a valid product list
    pub fn try_load(&self) -> StoreResult<Inventory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No inventory file, starting empty");
                return Ok(Inventory::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let products = codec::decode(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            count = products.len(),
            "Inventory loaded"
        );
        Ok(Inventory::from_products(products))
    }

    /// Loads the inventory, falling back to an empty one on any error.
    ///
    /// Never fails. The caller decides how to show `recovered_from` to the
    /// user.
    pub fn load(&self) -> LoadReport {
        match self.try_load() {
            Ok(inventory) => LoadReport {
                inventory,
                recovered_from: None,
            },
            Err(err) => {
                warn!(error = %err, "Discarding inventory file contents, starting empty");
                LoadReport {
                    inventory: Inventory::new(),
                    recovered_from: Some(err),
                }
            }
        }
    }

    /// Overwrites the file with the full inventory.
    ///
    /// Encoding happens before the file is opened, so a failure there leaves
    /// the previous save intact. There is no retry.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let bytes = codec::encode(inventory.products()).map_err(StoreError::Encode)?;

        fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            count = inventory.len(),
            "Inventory saved"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
