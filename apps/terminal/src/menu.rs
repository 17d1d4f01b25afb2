//! # Main Menu
//!
//! The five numbered actions and parsing of the user's choice.

use std::str::FromStr;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ViewAll,
    UpdateProduct,
    LowStock,
    SaveAndExit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddProduct,
        MenuChoice::ViewAll,
        MenuChoice::UpdateProduct,
        MenuChoice::LowStock,
        MenuChoice::SaveAndExit,
    ];

    /// The number the user types to pick this entry.
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::AddProduct => 1,
            MenuChoice::ViewAll => 2,
            MenuChoice::UpdateProduct => 3,
            MenuChoice::LowStock => 4,
            MenuChoice::SaveAndExit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddProduct => "Add New Product (Create)",
            MenuChoice::ViewAll => "View All Inventory (Read)",
            MenuChoice::UpdateProduct => "Update Stock/Price (Update)",
            MenuChoice::LowStock => "View Low Stock Items",
            MenuChoice::SaveAndExit => "Save & Exit",
        }
    }
}

/// The user typed something other than 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid choice. Please enter a number between 1 and 5.")]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s.trim().parse().map_err(|_| InvalidChoice)?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or(InvalidChoice)
    }
}
