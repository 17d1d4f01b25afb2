//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Inventory operation failures                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Data file read/write failures                  │
//! │                                                                         │
//! │  terminal errors (in app)                                              │
//! │  └── AppError         - Interrupted session, terminal I/O              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item code, field name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No product carries the requested item code.
    ///
    /// ## When This Occurs
    /// - Typo in the item code on the update screen
    /// - Code belongs to a product that was never saved
    ///
    /// The collection is left untouched.
    #[error("Product with ItemCode '{0}' not found")]
    ProductNotFound(String),

    /// The highest existing sequence number is already `u64::MAX`.
    ///
    /// Only reachable with a hand-edited data file.
    #[error("Item code sequence exhausted")]
    CodeSequenceExhausted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are raised by the parsers in [`crate::validation`] and are always
/// recoverable: the terminal prints the message and asks again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input could not be parsed (e.g., "abc" for a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
