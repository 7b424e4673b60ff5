//! SQL literal formatting

use crate::models::SqlValue;

/// Render one value as a MySQL literal
///
/// Floats always carry a decimal point; non-finite floats become `NULL`.
pub fn format_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(flag) => if *flag { "1" } else { "0" }.to_string(),
        SqlValue::Int(number) => number.to_string(),
        SqlValue::Float(number) => format_float(*number),
        SqlValue::Text(text) => format!("'{}'", escape_string(text)),
    }
}

/// Escape backslashes first, then single quotes
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

fn format_float(number: f64) -> String {
    if !number.is_finite() {
        return "NULL".to_string();
    }
    let rendered = number.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{}.0", rendered)
    }
}

/// Render a row as a parenthesised value tuple
pub fn format_row(row: &[SqlValue]) -> String {
    let values: Vec<String> = row.iter().map(format_value).collect();
    format!("({})", values.join(", "))
}
