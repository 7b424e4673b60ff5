//! Tests for the whitespace-tokenized record formats

use super::*;
use crate::models::{MsaSector, SqlValue, TableRecord};
use crate::parser::airport::AirportFormat;
use crate::parser::airway::AirwayFormat;
use crate::parser::diagnostics::{IssueKind, Severity};
use crate::parser::holding::HoldingFormat;
use crate::parser::msa::MsaFormat;
use crate::parser::navaid::{NavaidFormat, frequency_plausible};
use crate::parser::waypoint::{WaypointFormat, is_terminal_usage};

#[test]
fn test_airport_basic_record() {
    let file = create_temp_file(&wrap_data_file(
        "00AN PA 59.093472222 -156.455833333 80 P 4500 0 18000 FL180",
    ));
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.issues.is_empty());
    let airport = &outcome.records[0];
    assert_eq!(airport.icao_code, "00AN");
    assert_eq!(airport.region_code, "PA");
    assert_eq!(airport.latitude, 59.093472222);
    assert_eq!(airport.longitude, -156.455833333);
    assert_eq!(airport.elevation, 80);
    assert_eq!(airport.runway_length, 4500);
    assert_eq!(airport.transition_altitude, 18000);
    assert_eq!(airport.transition_level, "FL180");
    assert_eq!(outcome.stats.records_parsed, 1);
    assert_eq!(outcome.stats.lines_read, 1);
}

#[test]
fn test_airport_out_of_range_coordinates_discarded() {
    let file = create_temp_file(&wrap_data_file(
        "BAD1 XX 91.0 10.0 0 P 0 0 0 0\nGOOD XX 45.0 10.0 0 P 0 0 0 0",
    ));
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].icao_code, "GOOD");
    assert_eq!(outcome.stats.records_skipped, 1);
    assert_eq!(outcome.issue_count(Severity::Record), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::CoordinateOutOfRange);
    assert_eq!(outcome.issues[0].line, Some(4));
}

#[test]
fn test_airport_longitude_out_of_range_discarded() {
    let file = create_temp_file(
        "EAST XX 45.0 180.5 0 P 0 0 0 0\nWEST XX 45.0 -180.5 0 P 0 0 0 0\nEDGE XX -90.0 180.0 0 P 0 0 0 0\n",
    );
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].icao_code, "EDGE");
    assert_eq!(outcome.issues.len(), 2);
    assert!(
        outcome
            .issues
            .iter()
            .all(|i| i.kind == IssueKind::CoordinateOutOfRange && i.severity == Severity::Record)
    );
}

#[test]
fn test_airport_short_line_discarded() {
    let file = create_temp_file("00AN PA 59.0 -156.0 80\n");
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::MissingTokens);
}

#[test]
fn test_airport_conversion_failure_defaults_field() {
    let file = create_temp_file("00AN PA 59.0 -156.0 high P 4500 0 abc FL180\n");
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].elevation, 0);
    assert_eq!(outcome.records[0].transition_altitude, -1);
    assert_eq!(outcome.issue_count(Severity::Field), 2);
    assert!(
        outcome
            .issues
            .iter()
            .all(|issue| issue.kind == IssueKind::InvalidField)
    );
}

#[test]
fn test_parsing_is_idempotent() {
    let file = create_temp_file(&wrap_data_file(
        "00AN PA 59.0 -156.0 80 P 4500 0 18000 FL180\nBAD1 XX 95.0 0.0 0 P 0 0 0 0",
    ));
    let parser = parser_for(&file, AirportFormat);

    let first = parser.parse().unwrap();
    let second = parser.parse().unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_airway_record_and_altitude_order_warning() {
    let file = create_temp_file(&wrap_data_file(
        "ABCDE K1 11 FGHIJ K1 11 N 1 18000 45000 J1\nKLMNO K2 11 PQRST K2 11 H 2 30000 20000 Q5",
    ));
    let outcome = parser_for(&file, AirwayFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 2);
    let first = &outcome.records[0];
    assert_eq!(first.from_waypoint, "ABCDE");
    assert_eq!(first.to_waypoint, "FGHIJ");
    assert_eq!(first.airway_name, "J1");
    assert_eq!(first.min_altitude, 18000);
    assert_eq!(first.max_altitude, 45000);

    // kept, but flagged
    assert_eq!(outcome.records[1].airway_name, "Q5");
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::AltitudeOrder);
    assert_eq!(outcome.issues[0].severity, Severity::Field);
}

#[test]
fn test_airway_unlimited_maximum_is_not_flagged() {
    let file = create_temp_file("ABCDE K1 11 FGHIJ K1 11 N 1 18000 0 J1\n");
    let outcome = parser_for(&file, AirwayFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.issues.is_empty());
}

#[test]
fn test_waypoint_terminal_classification() {
    let file = create_temp_file(&wrap_data_file(
        "-1.000000000 -10.000000000 0110W ENRT GO 2115159 01S010W\n\
         47.5 8.5 RIVER LSZH LS 4 RIVER1\n\
         47.6 8.6 DEPFX TERM LS 4 DEPFX1",
    ));
    let outcome = parser_for(&file, WaypointFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.records[0].waypoint_name, "0110W");
    assert_eq!(outcome.records[0].section_code, 2115159);
    assert!(!outcome.records[0].is_terminal);
    assert!(!outcome.records[1].is_terminal);
    assert!(outcome.records[2].is_terminal);
}

#[test]
fn test_is_terminal_usage() {
    assert!(is_terminal_usage("TERM"));
    assert!(is_terminal_usage("app"));
    assert!(is_terminal_usage("XSTARX"));
    assert!(!is_terminal_usage("ENRT"));
    assert!(!is_terminal_usage("enrt"));
    assert!(!is_terminal_usage("LSZH"));
}

#[test]
fn test_waypoint_latitude_out_of_range_discarded() {
    let file = create_temp_file("95.0 10.0 BADFX ENRT XX 2 BADFX1\n");
    let outcome = parser_for(&file, WaypointFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.issues[0].kind, IssueKind::CoordinateOutOfRange);
}

#[test]
fn test_holding_course_warning_keeps_record() {
    let file = create_temp_file(&wrap_data_file(
        "ABCDE K1 KXYZ 3 270.0 1 4.0 R 3000 10000 230\nFGHIJ K1 KXYZ 3 400.0 0 1.0 T 2000 0 200",
    ));
    let outcome = parser_for(&file, HoldingFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 2);
    let first = &outcome.records[0];
    assert_eq!(first.waypoint_name, "ABCDE");
    assert_eq!(first.inbound_course, 270.0);
    assert_eq!(first.turn_direction, 1.0);
    assert_eq!(first.leg_type, "R");
    assert_eq!(first.speed_limit, 230);

    assert_eq!(outcome.records[1].inbound_course, 400.0);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::CourseOutOfRange);
}

#[test]
fn test_holding_altitude_order_warning_keeps_record() {
    let file = create_temp_file("ABCDE K1 KXYZ 3 270.0 1 4.0 R 12000 10000 230\n");
    let outcome = parser_for(&file, HoldingFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].min_altitude, 12000);
    assert_eq!(outcome.records[0].max_altitude, 10000);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::AltitudeOrder);
    assert_eq!(outcome.issues[0].severity, Severity::Field);
}

#[test]
fn test_holding_short_line_discarded() {
    let file = create_temp_file("ABCDE K1 KXYZ 3 270.0 1 4.0 R 3000 10000\n");
    let outcome = parser_for(&file, HoldingFormat).parse().unwrap();

    // ten tokens is one short
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.issues[0].kind, IssueKind::MissingTokens);
}

#[test]
fn test_navaid_name_with_spaces() {
    let file = create_temp_file(&wrap_data_file(
        "3 47.459 8.548 1417 11485 130 2.0 KLO ENRT LS ZURICH EAST VOR/DME",
    ));
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    let navaid = &outcome.records[0];
    assert_eq!(navaid.nav_type, 3);
    assert_eq!(navaid.frequency, 11485);
    assert_eq!(navaid.range_nm, 130);
    assert_eq!(navaid.identifier, "KLO");
    assert_eq!(navaid.name, "ZURICH EAST VOR/DME");
    assert!(outcome.issues.is_empty());
}

#[test]
fn test_navaid_fractional_values_are_truncated() {
    let file = create_temp_file("2 47.0 8.0 0 375.0 50.7 0.0 ABC ENRT LS ABC NDB\n");
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert_eq!(outcome.records[0].frequency, 375);
    assert_eq!(outcome.records[0].range_nm, 50);
}

#[test]
fn test_navaid_implausible_frequency_is_kept() {
    let file = create_temp_file("3 47.0 8.0 0 5000 130 0.0 XYZ ENRT LS XYZ VOR\n");
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].frequency, 5000);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::FrequencyOutOfRange);
    assert_eq!(outcome.issues[0].severity, Severity::Field);
}

#[test]
fn test_navaid_out_of_range_coordinates_discarded() {
    let file = create_temp_file(
        "3 47.0 -181.0 0 11000 130 0.0 XYZ ENRT LS XYZ VOR\n3 -91.0 8.0 0 11000 130 0.0 ABC ENRT LS ABC VOR\n",
    );
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.records_skipped, 2);
    assert_eq!(outcome.issues.len(), 2);
    assert!(outcome.issues.iter().all(|i| i.kind == IssueKind::CoordinateOutOfRange));
    assert_eq!(outcome.issue_count(Severity::Record), 2);
}

#[test]
fn test_navaid_non_finite_frequency_defaults() {
    let file = create_temp_file("3 47.0 8.0 0 inf 1e300 0.0 XYZ ENRT LS XYZ VOR\n");
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].frequency, 0);
    assert_eq!(outcome.records[0].range_nm, 0);
    let invalid = outcome
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::InvalidField)
        .count();
    assert_eq!(invalid, 2);
}

#[test]
fn test_navaid_zero_type_discarded() {
    let file = create_temp_file("0 47.0 8.0 0 11000 130 0.0 XYZ ENRT LS XYZ VOR\n");
    let outcome = parser_for(&file, NavaidFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.issues[0].kind, IssueKind::MissingRequiredField);
}

#[test]
fn test_frequency_plausible() {
    assert!(frequency_plausible(2, 375));
    assert!(!frequency_plausible(2, 5000));
    assert!(frequency_plausible(3, 11485));
    assert!(frequency_plausible(12, 13000));
    assert!(!frequency_plausible(7, 6999));
    // no band known for this type
    assert!(frequency_plausible(9, 1));
}

#[test]
fn test_msa_two_sectors_with_one_triple() {
    let file = create_temp_file(&wrap_data_file("2 ABC K1 KXYZ M 90 3000 25"));
    let outcome = parser_for(&file, MsaFormat).parse().unwrap();

    assert_eq!(outcome.records.len(), 1);
    let msa = &outcome.records[0];
    assert_eq!(msa.sector_count, 2);
    assert_eq!(
        msa.sectors[0],
        Some(MsaSector {
            bearing: 90,
            altitude: 3000,
            radius: 25
        })
    );
    assert_eq!(msa.sectors[1], None);
    assert_eq!(msa.sectors[2], None);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].kind, IssueKind::ShortSectorData);

    let values = msa.values();
    assert_eq!(values[5], SqlValue::Int(90));
    assert!(values[8..].iter().all(|v| *v == SqlValue::Null));
}

#[test]
fn test_msa_three_sectors() {
    let file = create_temp_file("3 ABC K1 KXYZ M 0 3000 25 120 4500 25 240 5000 25\n");
    let outcome = parser_for(&file, MsaFormat).parse().unwrap();

    let msa = &outcome.records[0];
    assert!(msa.sectors.iter().all(Option::is_some));
    assert_eq!(msa.sectors[2].map(|s| s.bearing), Some(240));
    assert!(outcome.issues.is_empty());
}

#[test]
fn test_msa_invalid_sector_count_discarded() {
    let file = create_temp_file("4 ABC K1 KXYZ M 0 3000 25\n0 DEF K1 KXYZ M 0 3000 25\n");
    let outcome = parser_for(&file, MsaFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.records_skipped, 2);
    assert!(
        outcome
            .issues
            .iter()
            .all(|issue| issue.kind == IssueKind::InvalidSectorCount)
    );
}

#[test]
fn test_empty_file_yields_no_records() {
    let file = create_temp_file(&wrap_data_file(""));
    let outcome = parser_for(&file, AirportFormat).parse().unwrap();

    assert!(outcome.records.is_empty());
    assert!(outcome.issues.is_empty());
    assert_eq!(outcome.stats.lines_read, 0);
}
