//! Tests for file decoding and candidate line filtering

use super::*;
use crate::error::NavdataError;
use crate::parser::airport::AirportFormat;
use crate::parser::line_source::{LineSource, SourceEncoding, SourceText, is_data_line};

#[test]
fn test_structural_lines_are_skipped() {
    let file = create_temp_file(&wrap_data_file(
        "# comment line\n00AN PA 59.09 -156.45 80 P 4500 0 18000 FL180\n   \n01AK PA 61.0 -150.0 12 P 0 0 18000 FL180",
    ));
    let source = LineSource::open(file.path()).unwrap();
    let text = source.read().unwrap();

    let lines: Vec<_> = text.data_lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].text.starts_with("00AN"));
    assert!(lines[1].text.starts_with("01AK"));
    assert_eq!(source.count().unwrap(), 2);
}

#[test]
fn test_line_numbers_count_every_physical_line() {
    let file = create_temp_file("I\n\n  A B C  \n99\n");
    let text = SourceText::read(file.path()).unwrap();

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].number, 3);
    assert_eq!(lines[1].text, "A B C");

    let data: Vec<_> = text.data_lines().collect();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].number, 3);
}

#[test]
fn test_carriage_return_line_endings() {
    let file = create_temp_file("I\r\nA B\rC D\n\rE F");
    let text = SourceText::read(file.path()).unwrap();

    let lines: Vec<(usize, &str)> = text.lines().map(|l| (l.number, l.text)).collect();
    assert_eq!(lines, vec![(1, "I"), (2, "A B"), (3, "C D"), (5, "E F")]);
}

#[test]
fn test_lone_carriage_returns_keep_records_apart() {
    let file = create_temp_file(
        "00AN PA 59.0 -156.0 80 P 4500 0 18000 FL180\r01AK PA 61.0 -150.0 12 P 0 0 18000 FL180\r",
    );
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[1].icao_code, "01AK");
    assert_eq!(outcome.records[1].elevation, 12);
    assert!(outcome.issues.is_empty());
}

#[test]
fn test_is_data_line() {
    assert!(is_data_line("00AN PA 59.0 -156.0"));
    assert!(is_data_line("990 something"));
    assert!(!is_data_line(""));
    assert!(!is_data_line("I"));
    assert!(!is_data_line("ILS lines start with I and are skipped too"));
    assert!(!is_data_line("# comment"));
    assert!(!is_data_line("99"));
    assert!(!is_data_line("1100 Version - data cycle 2401"));
}

#[test]
fn test_latin1_fallback_decodes_whole_file_once() {
    // 0xE9 is 'é' in Latin-1 and invalid as a lone UTF-8 byte
    let mut bytes = b"A 1 2\n".to_vec();
    bytes.extend_from_slice(b"CAF\xE9 3 4\n");
    bytes.extend_from_slice(b"B 5 6\n");
    let file = create_temp_file_bytes(&bytes);

    let text = SourceText::read(file.path()).unwrap();
    assert_eq!(text.encoding(), SourceEncoding::Latin1);

    let lines: Vec<&str> = text.data_lines().map(|l| l.text).collect();
    assert_eq!(lines, vec!["A 1 2", "CAFé 3 4", "B 5 6"]);
}

#[test]
fn test_utf8_bom_is_stripped() {
    let file = create_temp_file_bytes(b"\xEF\xBB\xBFA 1 2\n");
    let text = SourceText::read(file.path()).unwrap();

    assert_eq!(text.encoding(), SourceEncoding::Utf8);
    let first = text.data_lines().next().unwrap();
    assert_eq!(first.text, "A 1 2");
}

#[test]
fn test_missing_file_is_source_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("earth_fix.dat");

    match LineSource::open(&missing) {
        Err(NavdataError::SourceNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected SourceNotFound, got {:?}", other),
    }
}

#[test]
fn test_source_can_be_read_repeatedly() {
    let file = create_temp_file("A 1\nB 2\n");
    let source = LineSource::open(file.path()).unwrap();

    let first: Vec<String> = source
        .read()
        .unwrap()
        .data_lines()
        .map(|l| l.text.to_string())
        .collect();
    let second: Vec<String> = source
        .read()
        .unwrap()
        .data_lines()
        .map(|l| l.text.to_string())
        .collect();
    assert_eq!(first, second);
}
