//! Waypoint (fix) records
//!
//! `LAT LON NAME USAGE REGION SECTION ID`, for example
//! `-1.000000000 -10.000000000 0110W ENRT GO 2115159 01S010W`.

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::{FieldContext, coordinates_in_range};
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::{ENROUTE_USAGE_TYPE, TERMINAL_USAGE_KEYWORDS, min_tokens};
use crate::models::Waypoint;

#[derive(Debug, Default, Clone, Copy)]
pub struct WaypointFormat;

pub type WaypointParser = FormatParser<WaypointFormat>;

impl RecordFormat for WaypointFormat {
    type Record = Waypoint;
    const NAME: &'static str = "waypoint";
    const MIN_TOKENS: usize = min_tokens::WAYPOINT;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Waypoint, ParseIssue> {
        let latitude = ctx.float("latitude", t[0], 0.0);
        let longitude = ctx.float("longitude", t[1], 0.0);
        let waypoint_name = ctx.string(t[2], "");
        let usage_type = ctx.string(t[3], "");

        if waypoint_name.is_empty() || usage_type.is_empty() {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "waypoint name or usage type is empty",
            ));
        }

        if !coordinates_in_range(latitude, longitude) {
            return Err(ctx.reject(
                IssueKind::CoordinateOutOfRange,
                format!(
                    "waypoint {} coordinates out of range: lat={}, lon={}",
                    waypoint_name, latitude, longitude
                ),
            ));
        }

        Ok(Waypoint {
            latitude,
            longitude,
            is_terminal: is_terminal_usage(&usage_type),
            waypoint_name,
            usage_type,
            region_code: ctx.string(t[4], ""),
            section_code: ctx.int("section_code", t[5], 0),
            waypoint_id: ctx.string(t[6], ""),
        })
    }
}

/// Whether a usage type denotes a terminal-area waypoint
///
/// Any of the terminal keywords anywhere in the usage type (ignoring case)
/// makes it terminal; `ENRT` and everything else does not.
pub fn is_terminal_usage(usage_type: &str) -> bool {
    let upper = usage_type.to_ascii_uppercase();
    if upper == ENROUTE_USAGE_TYPE {
        return false;
    }
    TERMINAL_USAGE_KEYWORDS
        .iter()
        .any(|keyword| upper.contains(keyword))
}
