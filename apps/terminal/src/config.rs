//! # Configuration
//!
//! Settings for one session.
//!
//! The values are fixed at build time; there are no environment variables or
//! command-line flags. Tests build their own `AppConfig` to point the session
//! at a temporary data file or a different threshold.
//!
//! Configuration is read-only after the session starts.

use std::path::PathBuf;

use stockroom_core::{Money, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_store::DEFAULT_INVENTORY_FILE;

/// Currency symbol printed in front of every price.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the inventory is loaded from and saved to.
    pub data_file: PathBuf,

    /// Products with stock strictly below this show up in the low stock report.
    pub low_stock_threshold: u32,

    /// Currency symbol shown in front of prices.
    pub currency_symbol: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Data file: `inventory_data.json` in the working directory
    /// - Low stock threshold: 10
    /// - Currency: Rs
    fn default() -> Self {
        AppConfig {
            data_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::Money;
    /// use stockroom_terminal::config::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "Rs12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.major().abs(),
            amount.minor()
        )
    }
}
