//! Instrument-procedure (AIRAC 424 style) records
//!
//! Each airport has its own file. A record line ends with `;`, and its
//! body is a comma-separated list whose first token is
//! `PROCEDURE_TYPE:SEQUENCE_NUMBER`, e.g.
//!
//! ```text
//! SID:010,1,TEST1,,TESTWP,ZZ,4,W,,,,D,,,,,,,,;
//! ```
//!
//! Lines without the terminator, auxiliary runway/airport blocks and lines
//! with fewer than ten tokens are not procedure legs and are skipped
//! without complaint. `RWY:` and `AIRPORT:` records are skipped whatever
//! their token count. A leg whose type token is malformed is discarded
//! as an issue.

pub mod layout;
pub mod walker;

pub use layout::{ProcField, ProcedureTokens};
pub use walker::ProcedureWalker;

use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::diagnostics::{Diagnostics, IssueKind, ParseIssue};
use super::field_parsers::FieldContext;
use super::line_source::SourceText;
use super::stats::ParseOutcome;
use crate::constants::{
    PROCEDURE_AUXILIARY_PREFIXES, PROCEDURE_FIELD_DELIMITER, PROCEDURE_RECORD_TERMINATOR,
    min_tokens,
};
use crate::error::Result;
use crate::models::ProcedureLeg;

/// Parser for the procedure file of a single airport
#[derive(Debug, Clone)]
pub struct ProcedureParser {
    diagnostics: Arc<dyn Diagnostics>,
}

impl ProcedureParser {
    pub fn new(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Parse one airport file; every leg is tagged with `airport_icao`
    pub fn parse_file(&self, path: &Path, airport_icao: &str) -> Result<ParseOutcome<ProcedureLeg>> {
        let text = SourceText::read(path)?;
        let mut outcome = ParseOutcome::new();
        outcome.stats.files_read = 1;

        for line in text.lines() {
            let mut ctx = FieldContext::new(line.number);
            let result = parse_procedure_line(line.text, airport_icao, &mut ctx);

            for issue in ctx.into_issues() {
                self.diagnostics.report(airport_icao, &issue);
                outcome.issues.push(issue);
            }

            match result {
                Ok(Some(leg)) => {
                    outcome.stats.lines_read += 1;
                    outcome.stats.records_parsed += 1;
                    outcome.records.push(leg);
                }
                Ok(None) => outcome.stats.lines_ignored += 1,
                Err(issue) => {
                    outcome.stats.lines_read += 1;
                    outcome.stats.records_skipped += 1;
                    self.diagnostics.report(airport_icao, &issue);
                    outcome.issues.push(issue);
                }
            }
        }

        debug!(
            "Parsed {} procedure legs for {} ({} lines ignored)",
            outcome.stats.records_parsed, airport_icao, outcome.stats.lines_ignored
        );
        Ok(outcome)
    }
}

/// Parse one trimmed line of a procedure file
///
/// `Ok(None)` means the line is not a procedure leg at all.
pub fn parse_procedure_line(
    line: &str,
    airport_icao: &str,
    ctx: &mut FieldContext,
) -> std::result::Result<Option<ProcedureLeg>, ParseIssue> {
    let Some(body) = line.strip_suffix(PROCEDURE_RECORD_TERMINATOR) else {
        return Ok(None);
    };

    let tokens = ProcedureTokens::new(
        body.split(PROCEDURE_FIELD_DELIMITER)
            .map(str::trim)
            .collect(),
    );

    let head = tokens.at(0).unwrap_or_default();
    if PROCEDURE_AUXILIARY_PREFIXES
        .iter()
        .any(|prefix| head.starts_with(prefix))
    {
        return Ok(None);
    }
    if tokens.len() < min_tokens::PROCEDURE {
        return Ok(None);
    }

    let mut head_parts = head.split(':');
    let (Some(procedure_type), Some(sequence_number), None) =
        (head_parts.next(), head_parts.next(), head_parts.next())
    else {
        return Err(ctx.reject(
            IssueKind::InvalidProcedureType,
            format!("procedure type token is not TYPE:SEQUENCE: '{}'", head),
        ));
    };

    Ok(Some(ProcedureLeg {
        airport_icao: airport_icao.to_string(),
        procedure_type: procedure_type.to_string(),
        sequence_number: sequence_number.to_string(),
        route_type: tokens.int_or(ctx, ProcField::RouteType, 0),
        procedure_name: tokens.text(ctx, ProcField::ProcedureName),
        transition_name: tokens.text(ctx, ProcField::TransitionName),
        waypoint_name: tokens.text(ctx, ProcField::WaypointName),
        waypoint_region: tokens.text(ctx, ProcField::WaypointRegion),
        waypoint_section: tokens.int_or(ctx, ProcField::WaypointSection, 0),
        waypoint_type: tokens.text(ctx, ProcField::WaypointType),
        waypoint_description: tokens.text(ctx, ProcField::WaypointDescription),
        path_terminator: tokens.text(ctx, ProcField::PathTerminator),
        ref_navaid_identifier: tokens.text(ctx, ProcField::RefNavaidIdentifier),
        ref_navaid_region: tokens.text(ctx, ProcField::RefNavaidRegion),
        ref_navaid_section: tokens.opt_int(ctx, ProcField::RefNavaidSection),
        ref_navaid_type: tokens.text(ctx, ProcField::RefNavaidType),
        theta: tokens.opt_float(ctx, ProcField::Theta),
        rho: tokens.opt_float(ctx, ProcField::Rho),
        magnetic_course: tokens.opt_float(ctx, ProcField::MagneticCourse),
        distance_time: tokens.text(ctx, ProcField::DistanceTime),
        altitude_description: tokens.text(ctx, ProcField::AltitudeDescription),
        altitude1: tokens.text(ctx, ProcField::Altitude1),
        altitude2: tokens.text(ctx, ProcField::Altitude2),
        transition_altitude: tokens.text(ctx, ProcField::TransitionAltitude),
        speed_limit: tokens.text(ctx, ProcField::SpeedLimit),
        vertical_angle: tokens.opt_float(ctx, ProcField::VerticalAngle),
        center_fix: tokens.text(ctx, ProcField::CenterFix),
        multiple_code: tokens.text(ctx, ProcField::MultipleCode),
        gnss_fms_indication: tokens.text(ctx, ProcField::GnssFmsIndication),
    }))
}
