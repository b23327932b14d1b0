use serde::{Deserialize, Serialize};

use super::row::{cell, first_cell};
use crate::api::RawRow;

/// Price columns in priority order. Matched ignoring case and spaces.
const PRICE_HEADERS: [&str; 4] = ["Market Value", "MarketValue", "Price", "Sticker"];

/// Image columns in priority order.
const IMAGE_HEADERS: [&str; 2] = ["image", "imageurl"];

/// One product on the shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Always lowercase
    pub category: String,
    pub name: String,
    /// Display price, "$"-prefixed, or empty when the sheet has none
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub price_value: f64,
    #[serde(default)]
    pub image: String,
}

/// Prefix a sheet price with "$" unless it already has one.
pub fn format_price(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('$') {
        raw.to_string()
    } else {
        format!("${}", raw)
    }
}

/// Numeric value of a display price; 0 when it has no leading number.
/// Trailing text is ignored, so "$15 each" is 15.
pub fn parse_price(price: &str) -> f64 {
    let digits: String = price.chars().filter(|c| *c != '$' && *c != ',').collect();
    numeric_prefix(digits.trim())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Longest prefix of `text` shaped like `[+-]digits[.digits]`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if has_digits {
        &text[..end]
    } else {
        ""
    }
}

impl InventoryItem {
    /// Build an item from a sheet row. Rows without a name or category are rejected.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let name = cell(row, "name")?;
        let category = cell(row, "category")?.to_lowercase();

        let price = first_cell(row, &PRICE_HEADERS)
            .map(|p| format_price(&p))
            .unwrap_or_default();
        let price_value = parse_price(&price);

        Some(Self {
            category,
            name,
            price,
            price_value,
            image: first_cell(row, &IMAGE_HEADERS).unwrap_or_default(),
        })
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Normalize sheet rows into inventory items, in sheet order.
pub fn normalize_inventory(rows: &[RawRow]) -> Vec<InventoryItem> {
    rows.iter().filter_map(InventoryItem::from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows(value: Value) -> Vec<RawRow> {
        value
            .as_array()
            .expect("array")
            .iter()
            .map(|v| v.as_object().expect("object").clone())
            .collect()
    }

    #[test]
    fn test_dragon_shield_row() {
        let r = rows(json!([{
            "name": "Dragon Shield", "category": "Sleeves", "price": "12.99", "image": ""
        }]));
        let items = normalize_inventory(&r);
        assert_eq!(
            items,
            vec![InventoryItem {
                category: "sleeves".to_string(),
                name: "Dragon Shield".to_string(),
                price: "$12.99".to_string(),
                price_value: 12.99,
                image: String::new(),
            }]
        );
    }

    #[test]
    fn test_price_priority() {
        let r = rows(json!([
            {"name": "a", "category": "c", "Price": "5", "market value": "7"},
            {"name": "b", "category": "c", "Sticker": "2", "price": "3"},
            {"name": "c", "category": "c", "STICKER": 9},
            {"name": "d", "category": "c", "MarketValue": "", "Price": "4"},
            {"name": "e", "category": "c"},
        ]));
        let prices: Vec<String> = normalize_inventory(&r).into_iter().map(|i| i.price).collect();
        assert_eq!(prices, vec!["$7", "$3", "$9", "$4", ""]);
    }

    #[test]
    fn test_price_value() {
        assert_eq!(parse_price("$12.99"), 12.99);
        assert_eq!(parse_price("$1,250.00"), 1250.0);
        assert_eq!(parse_price("$ 3"), 3.0);
        assert_eq!(parse_price("Call for price"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("$NaN"), 0.0);
    }

    #[test]
    fn test_price_value_reads_leading_number() {
        assert_eq!(parse_price("$15 each"), 15.0);
        assert_eq!(parse_price("12.99 (used)"), 12.99);
        assert_eq!(parse_price("$.50"), 0.5);
        assert_eq!(parse_price("$7."), 7.0);
        assert_eq!(parse_price("-2 credit"), -2.0);
        assert_eq!(parse_price("$-"), 0.0);
        assert_eq!(parse_price("$.x"), 0.0);
    }

    #[test]
    fn test_price_with_trailing_text_filters_by_value() {
        let r = rows(json!([{"name": "Playmat", "category": "accessories", "price": "15 each"}]));
        let items = normalize_inventory(&r);
        assert_eq!(items[0].price, "$15 each");
        assert_eq!(items[0].price_value, 15.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("12.99"), "$12.99");
        assert_eq!(format_price(" $5 "), "$5");
        assert_eq!(format_price(""), "");
    }

    #[test]
    fn test_image_fallback() {
        let r = rows(json!([
            {"name": "a", "category": "c", "imageurl": "https://img/a.png"},
            {"name": "b", "category": "c", "image": "https://img/b.png", "imageurl": "x"},
        ]));
        let items = normalize_inventory(&r);
        assert_eq!(items[0].image, "https://img/a.png");
        assert_eq!(items[1].image, "https://img/b.png");
        assert!(items[0].has_image());
    }

    #[test]
    fn test_required_fields() {
        let r = rows(json!([
            {"name": "No category"},
            {"category": "dice"},
            {"name": " ", "category": "dice"},
            {"name": "Kept", "category": "DICE"},
        ]));
        let items = normalize_inventory(&r);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "dice");
    }

    #[test]
    fn test_cached_items_without_price_value() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"category":"dice","name":"d20","price":"$1"}"#)
                .expect("older snapshot shape should load");
        assert_eq!(item.price_value, 0.0);
        assert_eq!(item.image, "");
    }
}
