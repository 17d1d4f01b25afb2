//! # Session
//!
//! The context object for one run of the app: configuration, data file and
//! the in-memory inventory, plus the menu loop that drives them.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session::start ── load data file (recover to empty on error)           │
//! │       │            print warning + banner                               │
//! │       ▼                                                                 │
//! │  Session::run ◄──────────────────────────────────────────┐              │
//! │       │  menu ─► choice                                   │              │
//! │       ├── 1 Add ───────────────► Inventory::add_product ──┤              │
//! │       ├── 2 View All ──────────► Inventory::list_all ─────┤              │
//! │       ├── 3 Update ────────────► Inventory::update_product┤              │
//! │       ├── 4 Low Stock ─────────► Inventory::low_stock ────┤              │
//! │       ├── other ───────────────► "Invalid choice" ────────┤              │
//! │       ├── 5 Save fails ────────► print error ─────────────┘              │
//! │       └── 5 Save ok ───────────► Ok(())                                 │
//! │                                                                         │
//! │  End of input at any prompt ──► Err(AppError::Interrupted), no save     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{
    parse_optional_price, parse_optional_stock, parse_price, parse_stock,
};
use stockroom_core::{CoreError, Inventory, ItemCode, NewProduct, ProductUpdate};
use stockroom_store::InventoryFile;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::menu::MenuChoice;
use crate::report::{low_stock_line, product_line};
use crate::terminal::Terminal;

const RULE: &str = "=======================================================";

/// Everything one run of the app works on.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    store: InventoryFile,
    inventory: Inventory,
}

impl Session {
    /// Builds a session around an already loaded inventory.
    pub fn new(config: AppConfig, inventory: Inventory) -> Self {
        let store = InventoryFile::new(config.data_file.clone());
        Session {
            config,
            store,
            inventory,
        }
    }

    /// Loads the data file and prints the startup banner.
    ///
    /// A missing file starts an empty inventory silently; an unreadable or
    /// corrupt one starts empty with a warning.
    pub fn start<R: BufRead, W: Write>(
        config: AppConfig,
        term: &mut Terminal<R, W>,
    ) -> AppResult<Self> {
        let store = InventoryFile::new(config.data_file.clone());
        let report = store.load();

        if let Some(err) = &report.recovered_from {
            term.say(format_args!("Warning: {err}. Starting with an empty inventory."))?;
        }

        let session = Session {
            config,
            store,
            inventory: report.inventory,
        };

        term.say(RULE)?;
        term.say("  Stockroom - Basic Inventory & Price Checker")?;
        term.say(format_args!(
            "  Loaded {} products from {}",
            session.inventory.len(),
            session.store.path().display()
        ))?;
        term.say(RULE)?;

        Ok(session)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the menu until the inventory has been saved.
    ///
    /// ## Returns
    /// * `Ok(())` - Save & Exit succeeded
    /// * `Err(AppError::Interrupted)` - Input ended; nothing was saved
    /// * `Err(AppError::Io)` - The terminal itself failed
    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<()> {
        loop {
            term.say("\n--- Menu ---")?;
            for choice in MenuChoice::ALL {
                term.say(format_args!("{}. {}", choice.key(), choice.label()))?;
            }

            let answer = term.prompt("Enter your choice (1-5): ")?;
            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    term.say(err)?;
                    continue;
                }
            };
            debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::AddProduct => self.add_product(term)?,
                MenuChoice::ViewAll => self.view_all(term)?,
                MenuChoice::UpdateProduct => self.update_product(term)?,
                MenuChoice::LowStock => self.view_low_stock(term)?,
                MenuChoice::SaveAndExit => {
                    if self.save(term)? {
                        term.say("Application closed.")?;
                        return Ok(());
                    }
                }
            }
        }
    }

    fn add_product<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<()> {
        term.say("\n--- Add New Product ---")?;

        let name = term.prompt("Enter product name: ")?.trim().to_string();
        let price_question = format!("Enter price (e.g., 19.99): {}", self.config.currency_symbol);
        let price = term.prompt_until(&price_question, parse_price)?;
        let stock = term.prompt_until("Enter initial stock level: ", parse_stock)?;

        match self.inventory.add_product(NewProduct::new(name, price, stock)) {
            Ok(product) => {
                info!(item_code = %product.item_code, "Product added");
                term.say(format_args!(
                    "\nProduct added: {}",
                    product_line(product, &self.config)
                ))
            }
            Err(err) => {
                error!(error = %err, "Could not add product");
                term.say(format_args!("Could not add product: {err}."))
            }
        }
    }

    fn view_all<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> AppResult<()> {
        term.say("\n\n=============== Full Inventory Report ===============")?;

        let products = self.inventory.list_all();
        if products.is_empty() {
            return term.say("The inventory is currently empty.");
        }

        for product in products {
            term.say(format_args!("| {}", product_line(product, &self.config)))?;
        }
        term.say("=====================================================\n")
    }

    fn update_product<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<()> {
        let code = term.prompt("\nEnter ItemCode of the product to update: ")?;

        let Some(product) = self.inventory.find(&code) else {
            let missing = CoreError::ProductNotFound(ItemCode::normalize(&code).to_string());
            debug!(error = %missing, "Update lookup missed");
            return term.say(format_args!("{missing}."));
        };

        term.say(format_args!(
            "\n--- Updating Product: {} (Current Stock: {}, Price: {}) ---",
            product.name,
            product.stock,
            self.config.format_currency(product.price)
        ))?;

        let stock = term.prompt_until(
            "Enter new stock level (leave blank to skip): ",
            parse_optional_stock,
        )?;
        let price_question = format!(
            "Enter new price (leave blank to skip): {}",
            self.config.currency_symbol
        );
        let price = term.prompt_until(&price_question, parse_optional_price)?;

        match self
            .inventory
            .update_product(&code, ProductUpdate { stock, price })
        {
            Ok(product) => {
                info!(item_code = %product.item_code, "Product updated");
                term.say(format_args!(
                    "\nProduct updated: {}",
                    product_line(product, &self.config)
                ))
            }
            Err(err) => term.say(format_args!("{err}.")),
        }
    }

    fn view_low_stock<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> AppResult<()> {
        let threshold = self.config.low_stock_threshold;
        term.say(format_args!("\n--- Low Stock Alert (Threshold: {threshold}) ---"))?;

        let low = self.inventory.low_stock(threshold);
        if low.is_empty() {
            return term.say("All products are above the low stock threshold.");
        }

        for product in low {
            term.say(low_stock_line(product))?;
        }
        Ok(())
    }

    /// Writes the inventory; returns whether the save took effect.
    fn save<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> AppResult<bool> {
        match self.store.save(&self.inventory) {
            Ok(()) => {
                term.say("Inventory saved successfully.")?;
                Ok(true)
            }
            Err(err) => {
                error!(error = %err, "Save failed");
                term.say(format_args!("Error: {err}"))?;
                Ok(false)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs;
    use std::io::Cursor;
    use stockroom_core::{Money, Product};
    use tempfile::TempDir;

    type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

    fn terminal(input: &str) -> TestTerminal {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn config_in(dir: &TempDir) -> AppConfig {
        AppConfig {
            data_file: dir.path().join("inventory_data.json"),
            ..AppConfig::default()
        }
    }

    fn product(code: &str, stock: u32) -> Product {
        Product {
            name: format!("Item {code}"),
            price: Money::from_cents(500),
            stock,
            item_code: ItemCode::new(code),
        }
    }

    /// Starts a session on `config`, feeds `input`, returns the outcome,
    /// the session and everything printed.
    fn drive(config: AppConfig, input: &str) -> (AppResult<()>, Session, String) {
        let mut term = terminal(input);
        let mut session = Session::start(config, &mut term).unwrap();
        let result = session.run(&mut term);
        let output = String::from_utf8(term.into_output()).unwrap();
        (result, session, output)
    }

    #[test]
    fn test_add_two_products_and_save() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let input = "1\nPen\n2.50\n100\n1\nNotebook\n12\n3\n5\n";
        let (result, session, output) = drive(config.clone(), input);

        assert!(result.is_ok());
        let products = session.inventory().products();
        assert_eq!(
            products[0],
            Product {
                name: "Pen".to_string(),
                price: Money::from_cents(250),
                stock: 100,
                item_code: ItemCode::new("ITM001"),
            }
        );
        assert_eq!(products[1].item_code.as_str(), "ITM002");
        assert!(output.contains("Loaded 0 products from"));
        assert!(output.contains("Product added: Code: ITM001 | Name: Pen"));
        assert!(output.contains("Inventory saved successfully."));
        assert!(output.ends_with("Application closed.\n"));

        let saved = InventoryFile::new(&config.data_file).try_load().unwrap();
        assert_eq!(&saved, session.inventory());
    }

    #[test]
    fn test_add_reprompts_until_valid() {
        let dir = TempDir::new().unwrap();
        let input = "1\nPen\nabc\n0\n2.50\n-5\nlots\n7\n5\n";
        let (result, session, output) = drive(config_in(&dir), input);

        assert!(result.is_ok());
        assert_eq!(session.inventory().products()[0].stock, 7);
        assert!(output.contains("Price has invalid format: expected a number like 19.99."));
        assert!(output.contains("Price must be positive."));
        assert!(output.contains("Stock cannot be negative."));
        assert_eq!(output.matches("Enter price (e.g., 19.99): Rs").count(), 3);
    }

    #[test]
    fn test_price_beyond_limit_reprompts_and_reloads() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let input = "1\nYacht\n100000000000000\n999999999999.99\n1\n5\n";
        let (result, session, output) = drive(config.clone(), input);

        assert!(result.is_ok());
        assert!(output.contains(
            "Price has invalid format: amount is too large (at most 999999999999.99)."
        ));
        assert_eq!(session.inventory().products()[0].price, Money::MAX);

        let report = InventoryFile::new(&config.data_file).load();
        assert!(report.recovered_from.is_none());
        assert_eq!(&report.inventory, session.inventory());
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let dir = TempDir::new().unwrap();
        let (result, _, output) = drive(config_in(&dir), "9\nhello\n5\n");

        assert!(result.is_ok());
        assert_eq!(
            output
                .matches("Invalid choice. Please enter a number between 1 and 5.")
                .count(),
            2
        );
    }

    #[test]
    fn test_view_all_sorted_and_empty() {
        let dir = TempDir::new().unwrap();
        let (_, _, empty) = drive(config_in(&dir), "2\n5\n");
        assert!(empty.contains("The inventory is currently empty."));

        let mut term = terminal("2\n5\n");
        let inventory = Inventory::from_products(vec![product("ITM002", 1), product("ITM001", 1)]);
        let mut session = Session::new(config_in(&dir), inventory);
        session.run(&mut term).unwrap();
        let output = String::from_utf8(term.into_output()).unwrap();

        let first = output.find("| Code: ITM001").unwrap();
        let second = output.find("| Code: ITM002").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_update_stock_keeps_price() {
        let dir = TempDir::new().unwrap();
        let mut term = terminal("3\nitm001\n40\n\n5\n");
        let inventory = Inventory::from_products(vec![product("ITM001", 100)]);
        let mut session = Session::new(config_in(&dir), inventory);

        session.run(&mut term).unwrap();

        let updated = &session.inventory().products()[0];
        assert_eq!(updated.stock, 40);
        assert_eq!(updated.price, Money::from_cents(500));

        let output = String::from_utf8(term.into_output()).unwrap();
        assert!(output.contains(
            "--- Updating Product: Item ITM001 (Current Stock: 100, Price: Rs5.00) ---"
        ));
        assert!(output.contains("Product updated: Code: ITM001"));
    }

    #[test]
    fn test_update_blank_answers_change_nothing() {
        let dir = TempDir::new().unwrap();
        let mut term = terminal("3\nITM001\n\n\n5\n");
        let inventory = Inventory::from_products(vec![product("ITM001", 100)]);
        let before = inventory.clone();
        let mut session = Session::new(config_in(&dir), inventory);

        session.run(&mut term).unwrap();

        assert_eq!(session.inventory(), &before);
    }

    #[test]
    fn test_update_unknown_code() {
        let dir = TempDir::new().unwrap();
        let mut term = terminal("3\nitm999\n5\n");
        let inventory = Inventory::from_products(vec![product("ITM001", 100)]);
        let before = inventory.clone();
        let mut session = Session::new(config_in(&dir), inventory);

        session.run(&mut term).unwrap();

        assert_eq!(session.inventory(), &before);
        let output = String::from_utf8(term.into_output()).unwrap();
        assert!(output.contains("Product with ItemCode 'ITM999' not found."));
    }

    #[test]
    fn test_low_stock_report() {
        let dir = TempDir::new().unwrap();
        let mut term = terminal("4\n5\n");
        let inventory = Inventory::from_products(vec![
            product("ITM001", 5),
            product("ITM002", 15),
            product("ITM003", 9),
        ]);
        let mut session = Session::new(config_in(&dir), inventory);

        session.run(&mut term).unwrap();

        let output = String::from_utf8(term.into_output()).unwrap();
        assert!(output.contains("--- Low Stock Alert (Threshold: 10) ---"));
        let lines: Vec<&str> = output.lines().filter(|l| l.starts_with("LOW STOCK:")).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ITM001"));
        assert!(lines[1].contains("ITM003"));
    }

    #[test]
    fn test_low_stock_uses_configured_threshold() {
        let dir = TempDir::new().unwrap();
        let mut term = terminal("4\n5\n");
        let config = AppConfig {
            low_stock_threshold: 3,
            ..config_in(&dir)
        };
        let inventory = Inventory::from_products(vec![product("ITM001", 5)]);
        let mut session = Session::new(config, inventory);

        session.run(&mut term).unwrap();

        let output = String::from_utf8(term.into_output()).unwrap();
        assert!(output.contains("All products are above the low stock threshold."));
    }

    #[test]
    fn test_end_of_input_skips_save() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let (result, session, _) = drive(config.clone(), "1\nPen\n2.50\n100\n");

        assert!(matches!(result, Err(AppError::Interrupted)));
        assert_eq!(session.inventory().len(), 1);
        assert!(!config.data_file.exists());
    }

    #[test]
    fn test_corrupt_file_warns_and_starts_empty() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(
            &config.data_file,
            r#"[{"name": "Pen", "price": 2.5, "item_code": "ITM001"}]"#,
        )
        .unwrap();

        let (result, session, output) = drive(config, "5\n");

        assert!(result.is_ok());
        assert!(session.inventory().is_empty());
        assert!(output.starts_with("Warning: "));
        assert!(output.contains("Starting with an empty inventory."));
        assert!(output.contains("Loaded 0 products from"));
    }

    #[test]
    fn test_failed_save_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_file: dir.path().join("missing").join("inventory_data.json"),
            ..AppConfig::default()
        };

        let (result, _, output) = drive(config, "5\n");

        assert!(matches!(result, Err(AppError::Interrupted)));
        assert!(output.contains("Error: Could not save inventory to"));
        assert!(!output.contains("Application closed."));
        assert_eq!(output.matches("--- Menu ---").count(), 2);
    }

    #[test]
    fn test_existing_file_round_trips_through_session() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let original = Inventory::from_products(vec![product("ITM004", 2), product("ITM001", 8)]);
        InventoryFile::new(&config.data_file).save(&original).unwrap();

        let (result, session, output) = drive(config.clone(), "1\nInk\n3\n1\n5\n");

        assert!(result.is_ok());
        assert!(output.contains("Loaded 2 products from"));
        assert_eq!(session.inventory().products()[2].item_code.as_str(), "ITM005");

        let saved = InventoryFile::new(&config.data_file).try_load().unwrap();
        assert_eq!(&saved.products()[..2], original.products());
    }
}
