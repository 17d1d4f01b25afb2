//! # Item Codes
//!
//! The human-readable product identifier: `ITM` followed by a zero-padded
//! sequence number (`ITM001`, `ITM002`, ... `ITM999`, `ITM1000`).
//!
//! Codes read from the data file are kept verbatim, even when they do not
//! follow the pattern. Only pattern-conforming codes take part in sequence
//! generation (see [`crate::Inventory::next_code`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ITEM_CODE_PREFIX, ITEM_CODE_WIDTH};

/// Product identifier, immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(String);

impl ItemCode {
    /// Wraps an existing code without checking its shape.
    pub fn new(code: impl Into<String>) -> Self {
        ItemCode(code.into())
    }

    /// Formats a sequence number as a code.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::ItemCode;
    ///
    /// assert_eq!(ItemCode::from_sequence(7).as_str(), "ITM007");
    /// assert_eq!(ItemCode::from_sequence(1000).as_str(), "ITM1000");
    /// ```
    pub fn from_sequence(sequence: u64) -> Self {
        ItemCode(format!(
            "{ITEM_CODE_PREFIX}{sequence:0width$}",
            width = ITEM_CODE_WIDTH
        ))
    }

    /// Normalizes user input into a lookup key: trimmed and upper-cased.
    pub fn normalize(input: &str) -> Self {
        ItemCode(input.trim().to_uppercase())
    }

    /// Returns the numeric suffix when the code is `ITM` + digits.
    ///
    /// Suffixes too large for `u64` are treated as non-conforming.
    pub fn sequence(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(ITEM_CODE_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_pads_to_three_digits() {
        assert_eq!(ItemCode::from_sequence(1).as_str(), "ITM001");
        assert_eq!(ItemCode::from_sequence(42).as_str(), "ITM042");
        assert_eq!(ItemCode::from_sequence(999).as_str(), "ITM999");
        assert_eq!(ItemCode::from_sequence(1000).as_str(), "ITM1000");
    }

    #[test]
    fn test_sequence() {
        assert_eq!(ItemCode::new("ITM001").sequence(), Some(1));
        assert_eq!(ItemCode::new("ITM1000").sequence(), Some(1000));
        assert_eq!(ItemCode::new("ITM").sequence(), None);
        assert_eq!(ItemCode::new("ITMabc").sequence(), None);
        assert_eq!(ItemCode::new("ITM12x").sequence(), None);
        assert_eq!(ItemCode::new("itm001").sequence(), None);
        assert_eq!(ItemCode::new("SKU001").sequence(), None);
        assert_eq!(ItemCode::new("ITM+5").sequence(), None);
        assert_eq!(ItemCode::new("ITM99999999999999999999999").sequence(), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(ItemCode::normalize("  itm001 "), ItemCode::new("ITM001"));
        assert_eq!(ItemCode::normalize("ITM002"), ItemCode::new("ITM002"));
    }
}
