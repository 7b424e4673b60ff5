//! Field coercion utilities shared by every format parser
//!
//! Each coercion takes a raw token and a default. Empty tokens quietly
//! become the default; tokens that fail conversion become the default and
//! leave a field-level [`ParseIssue`] behind. Nothing here ever fails.

use super::diagnostics::{IssueKind, ParseIssue};
use tracing::trace;

/// Coercion state for one source line
///
/// Collects the field-level issues raised while a record is assembled so
/// they can be returned with the parse outcome.
#[derive(Debug)]
pub struct FieldContext {
    line: usize,
    issues: Vec<ParseIssue>,
}

impl FieldContext {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            issues: Vec::new(),
        }
    }

    /// Integer with default
    pub fn int(&mut self, field: &str, raw: &str, default: i64) -> i64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            trace!("Empty {} on line {}, using {}", field, self.line, default);
            return default;
        }
        match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.invalid(field, trimmed, default, "integer");
                default
            }
        }
    }

    /// Float with default
    pub fn float(&mut self, field: &str, raw: &str, default: f64) -> f64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            trace!("Empty {} on line {}, using {}", field, self.line, default);
            return default;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.invalid(field, trimmed, default, "float");
                default
            }
        }
    }

    /// Decimal token truncated to a whole number, e.g. `57.9` becomes 57
    ///
    /// Values that do not fit an `i64` (including `inf` and `nan`) take the
    /// default like any other failed conversion.
    pub fn truncated_int(&mut self, field: &str, raw: &str, default: i64) -> i64 {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            trace!("Empty {} on line {}, using {}", field, self.line, default);
            return default;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if (i64::MIN as f64..i64::MAX as f64).contains(&value) => value as i64,
            _ => {
                self.invalid(field, trimmed, default, "whole number");
                default
            }
        }
    }

    /// Trimmed string with default
    pub fn string(&self, raw: &str, default: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            default.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Record a problem that does not discard the record
    pub fn warn(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(ParseIssue::field(kind, self.line, message));
    }

    /// Build a record-level issue for this line
    pub fn reject(&self, kind: IssueKind, message: impl Into<String>) -> ParseIssue {
        ParseIssue::record(kind, self.line, message)
    }

    pub fn into_issues(self) -> Vec<ParseIssue> {
        self.issues
    }

    fn invalid(&mut self, field: &str, raw: &str, default: impl std::fmt::Display, expected: &str) {
        self.warn(
            IssueKind::InvalidField,
            format!(
                "cannot convert {} '{}' to {}, using default {}",
                field, raw, expected, default
            ),
        );
    }
}

/// Parse a signed whole-degree token such as `+45` or `-120`
///
/// Returns `None` when the token is not a signed or unsigned integer.
pub fn parse_signed_degrees(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.as_bytes().first()? {
        b'+' => (1, &trimmed[1..]),
        b'-' => (-1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok().map(|value| sign * value)
}

/// Whether a coordinate pair lies within latitude/longitude bounds
pub fn coordinates_in_range(latitude: f64, longitude: f64) -> bool {
    use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
    (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&latitude)
        && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&longitude)
}
