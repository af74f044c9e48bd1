//! Number formatting for statistics and correlation cells

use serde_json::Value;

/// Placeholder for missing or null values
pub const EMPTY_CELL: &str = "--";

/// Formats a number with a fixed count of decimals, no thousands separator
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(0.72, 2), "0.72");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), value)
}

/// Formats a number the way every table cell of the overview shows it (2 decimals)
pub fn format_number(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Formats a JSON cell coming from the backend.
///
/// Numbers and numeric strings get 2 decimals, `null` or a missing value
/// becomes [`EMPTY_CELL`], any other string (e.g. the `top` category of a
/// text column) is returned as is. The result is not HTML-escaped.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(parsed) => format_number(parsed),
            Err(_) => s.clone(),
        },
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Same as [`format_value`] for an optional plain number
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| EMPTY_CELL.to_string())
}
