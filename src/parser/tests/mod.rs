//! Test utilities for the navigation data parsers
//!
//! Helpers for writing fixture files and building parsers that keep
//! their issues out of the log.

use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use super::diagnostics::{Diagnostics, SilentDiagnostics};
use super::format_parser::{FormatParser, RecordFormat};

mod fixed_token_tests;
mod line_source_tests;

/// Diagnostics sink for tests; issues are asserted on the outcome instead
pub fn silent() -> Arc<dyn Diagnostics> {
    Arc::new(SilentDiagnostics)
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary file with raw bytes
pub fn create_temp_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Build a silent parser over a fixture file
pub fn parser_for<F: RecordFormat>(file: &NamedTempFile, format: F) -> FormatParser<F> {
    FormatParser::with_diagnostics(file.path(), format, silent()).unwrap()
}

/// Data file wrapped in the usual header and end-of-file marker lines
pub fn wrap_data_file(body: &str) -> String {
    format!(
        "I\n1100 Version - data cycle 2401, build 20240101, metadata AptXP1100.\n\n{}\n99\n",
        body
    )
}

/// Terrain grid line with thirty cell values
pub fn mora_line(latitude: &str, longitude: &str, cell: &str) -> String {
    let cells = vec![cell; 30].join(" ");
    format!("{} {} {}", latitude, longitude, cells)
}
