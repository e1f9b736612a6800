//! Parsing of raw form input into draft field values.

use shared::domain::round_price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
    Description,
}

/// Parses a quantity input. Invalid or negative input coerces to 0.
pub fn parse_amount(value: &str) -> i64 {
    value.trim().parse::<i64>().unwrap_or(0).max(0)
}

/// Parses a locale-formatted price with comma as decimal separator
/// ("15,50" -> 15.5). Absent or unparsable input coerces to 0.
pub fn parse_price(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    let normalized = raw.trim().replace(',', ".");
    let price = normalized.parse::<f64>().unwrap_or(0.0);
    round_price(price.max(0.0))
}
