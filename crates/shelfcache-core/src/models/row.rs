//! Cell access for loosely typed sheet rows.

use serde_json::Value;

use crate::api::RawRow;

/// Text of a cell value, or `None` when it is null, blank, or not a scalar.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Render a number the way the sheet shows it: whole floats lose their `.0`.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Header names are matched ignoring case and whitespace.
fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Non-blank text of the column named `header`.
pub fn cell(row: &RawRow, header: &str) -> Option<String> {
    let wanted = header_key(header);
    row.iter()
        .filter(|(key, _)| header_key(key) == wanted)
        .find_map(|(_, value)| value_text(value))
}

/// Non-blank text of the first of `headers` that has one.
pub fn first_cell(row: &RawRow, headers: &[&str]) -> Option<String> {
    headers.iter().find_map(|header| cell(row, header))
}

/// Parse a leading integer the way a lenient spreadsheet reader would:
/// surrounding whitespace and trailing junk ("5th") are ignored.
pub fn leading_int(text: &str) -> Option<i32> {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}
