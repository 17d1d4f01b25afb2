//! # Report Lines
//!
//! Fixed-width text rendering of products for the inventory and low stock
//! reports.
//!
//! ```text
//! Code: ITM001 | Name: Pen                  | Price: Rs2.50 | Stock: 100
//! LOW STOCK: Pen                  | Code: ITM001 | Stock: 5
//! ```

use stockroom_core::Product;

use crate::config::AppConfig;

/// One product as shown in the full inventory report and after add/update.
pub fn product_line(product: &Product, config: &AppConfig) -> String {
    format!(
        "Code: {:<6} | Name: {:<20} | Price: {} | Stock: {}",
        product.item_code.as_str(),
        product.name,
        config.format_currency(product.price),
        product.stock
    )
}

/// One product as shown in the low stock report.
pub fn low_stock_line(product: &Product) -> String {
    format!(
        "LOW STOCK: {:<20} | Code: {:<6} | Stock: {}",
        product.name,
        product.item_code.as_str(),
        product.stock
    )
}
