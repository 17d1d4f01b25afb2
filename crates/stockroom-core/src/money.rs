//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" typed at the prompt  ──►  1999 cents                         │
//! │    1999 cents in the data file  ──►  19.99                              │
//! │                                                                         │
//! │  Floats only exist at the JSON boundary, never in memory               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099);
//!
//! // Parse what the user typed
//! let typed = Money::parse_decimal("10.99").unwrap();
//! assert_eq!(price, typed);
//! assert_eq!(price.to_string(), "10.99");
//! ```

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Largest amount, in cents, accepted at the prompt or read from the data file.
///
/// The data file stores major units as JSON floats. Below 10^14 cents the
/// float spacing stays far under half a cent, so every amount in range comes
/// back from the file as exactly the same number of cents.
pub const MAX_CENTS: i64 = 99_999_999_999_999;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing accepts a sign so that "-5" is reported as
///   "must be positive" rather than as garbage
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: Written to the data file as a decimal number in major units
///   (`2.5`), read back by rounding to the nearest cent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// The largest representable price.
    pub const MAX: Money = Money(MAX_CENTS);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. rupees, dollars).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses a plain decimal amount such as `19.99`, `5`, `.5` or `-3`.
    ///
    /// ## Rules
    /// - Optional leading `+` or `-`
    /// - ASCII digits with at most one `.`
    /// - At most two fractional digits (no silent rounding of user input)
    /// - Magnitude at most [`Money::MAX`] (999999999999.99)
    ///
    /// The sign is accepted so that callers can report negative amounts
    /// separately from malformed ones.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
    /// assert!(Money::parse_decimal("2.555").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ParseMoneyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };

        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::NotANumber);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseMoneyError::NotANumber);
        }
        if frac.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }

        // Only digits remain, so a parse failure can only mean overflow
        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::Overflow)?
        };
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| ParseMoneyError::NotANumber)? * 10,
            _ => frac.parse().map_err(|_| ParseMoneyError::NotANumber)?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or(ParseMoneyError::Overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Converts a major-unit float (as found in the data file) to cents.
    fn from_major_f64(major: f64) -> Option<Money> {
        if !major.is_finite() {
            return None;
        }
        let cents = (major * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in major units as a float (data file only).
    fn to_major_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Why a typed amount could not be turned into [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("no amount given")]
    Empty,

    #[error("expected a number like 19.99")]
    NotANumber,

    #[error("at most two decimal places are allowed")]
    TooManyDecimals,

    #[error("amount is too large (at most 999999999999.99)")]
    Overflow,
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimals and no currency symbol.
///
/// The symbol is a display setting of the terminal app.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Money::from_major_f64(major)
            .ok_or_else(|| de::Error::custom(format!("price {major} is out of range")))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
