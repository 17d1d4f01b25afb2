//! # Validation Module
//!
//! Input parsing and validation for Stockroom.
//!
//! Every function here is pure: it takes the raw line the user typed and
//! returns either the parsed value or a [`ValidationError`]. The terminal's
//! prompt loop decides what to do with a failure (print it, ask again), so
//! these rules can be tested without simulating an input stream.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Enter price (e.g., 19.99): Rs" ◄────────────────────────┐             │
//! │       │                                                    │             │
//! │       ▼                                                    │             │
//! │  parse_price(line)  ← THIS MODULE                          │             │
//! │       │                                                    │             │
//! │       ├── "abc"   → InvalidFormat  ──► print, ask again ───┤             │
//! │       ├── "-2"    → MustBePositive ──► print, ask again ───┘             │
//! │       │                                                                 │
//! │       └── "19.99" → Ok(Money(1999))                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_optional_stock, parse_price};
//!
//! assert_eq!(parse_price("19.99").unwrap().cents(), 1999);
//! assert_eq!(parse_optional_stock("   ").unwrap(), None);
//! ```

use crate::error::ValidationError;
use crate::money::{Money, ParseMoneyError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const PRICE: &str = "Price";
const STOCK: &str = "Stock";

// =============================================================================
// Price
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be positive (> 0); free items are not allowed
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: PRICE.to_string(),
        });
    }

    Ok(())
}

/// Parses a typed price.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_price;
///
/// assert!(parse_price("2.50").is_ok());
/// assert!(parse_price("0").is_err());
/// assert!(parse_price("two").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let price = Money::parse_decimal(input).map_err(|err| match err {
        ParseMoneyError::Empty => ValidationError::Required {
            field: PRICE.to_string(),
        },
        other => ValidationError::InvalidFormat {
            field: PRICE.to_string(),
            reason: other.to_string(),
        },
    })?;

    validate_price(price)?;
    Ok(price)
}

/// Parses an optional price: blank input means "keep the current price".
pub fn parse_optional_price(input: &str) -> ValidationResult<Option<Money>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_price(input).map(Some)
}

// =============================================================================
// Stock
// =============================================================================

/// Parses a typed stock level.
///
/// ## Rules
/// - Must be a whole number
/// - Zero is allowed (sold out)
/// - Must fit in a `u32`
pub fn parse_stock(input: &str) -> ValidationResult<u32> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: STOCK.to_string(),
        });
    }

    let value: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: STOCK.to_string(),
        reason: "expected a whole number".to_string(),
    })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: STOCK.to_string(),
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: STOCK.to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Parses an optional stock level: blank input means "keep the current stock".
pub fn parse_optional_stock(input: &str) -> ValidationResult<Option<u32>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_stock(input).map(Some)
}

// =============================================================================
// Unit Tests
// =============================================================================
