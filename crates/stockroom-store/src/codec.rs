//! # Data File Codec
//!
//! JSON encoding of the product list.
//!
//! ## File Format
//! ```text
//! [
//!     {
//!         "name": "Pen",
//!         "price": 2.5,
//!         "stock": 100,
//!         "item_code": "ITM001"
//!     }
//! ]
//! ```
//!
//! Field order follows the `Product` struct. Unknown fields are ignored on
//! decode; missing or mistyped fields fail the whole file.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use stockroom_core::Product;

const INDENT: &[u8] = b"    ";

/// Encodes products as an indented JSON array.
pub fn encode(products: &[Product]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    products.serialize(&mut serializer)?;
    Ok(buf)
}

/// Decodes a JSON array of products.
pub fn decode(bytes: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{ItemCode, Money};

    fn pen() -> Product {
        Product {
            name: "Pen".to_string(),
            price: Money::from_cents(250),
            stock: 100,
            item_code: ItemCode::new("ITM001"),
        }
    }

    #[test]
    fn test_encode_layout() {
        let json = String::from_utf8(encode(&[pen()]).unwrap()).unwrap();
        let expected = "[\n    {\n        \"name\": \"Pen\",\n        \"price\": 2.5,\n        \"stock\": 100,\n        \"item_code\": \"ITM001\"\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = br#"[{"name": "Pen", "price": 2.5, "stock": 100, "item_code": "ITM001", "colour": "blue"}]"#;
        assert_eq!(decode(json).unwrap(), vec![pen()]);
    }

    #[test]
    fn test_decode_rejects_bad_records() {
        let missing_stock = br#"[{"name": "Pen", "price": 2.5, "item_code": "ITM001"}]"#;
        let string_price = br#"[{"name": "Pen", "price": "2.5", "stock": 1, "item_code": "ITM001"}]"#;
        let negative_stock = br#"[{"name": "Pen", "price": 2.5, "stock": -1, "item_code": "ITM001"}]"#;
        let fractional_stock = br#"[{"name": "Pen", "price": 2.5, "stock": 1.5, "item_code": "ITM001"}]"#;
        let numeric_code = br#"[{"name": "Pen", "price": 2.5, "stock": 1, "item_code": 1}]"#;
        let not_an_array = br#"{"name": "Pen"}"#;

        for bytes in [
            &missing_stock[..],
            &string_price[..],
            &negative_stock[..],
            &fractional_stock[..],
            &numeric_code[..],
            &not_an_array[..],
            &b""[..],
            &b"[{"[..],
        ] {
            assert!(
                decode(bytes).is_err(),
                "accepted {}",
                String::from_utf8_lossy(bytes)
            );
        }
    }
}
