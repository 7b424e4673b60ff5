//! Navaid records
//!
//! `TYPE LAT LON ELEV FREQ RANGE MAGVAR IDENT USAGE REGION NAME...`, where
//! the name runs to the end of the line and may contain spaces.

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::{FieldContext, coordinates_in_range};
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::{NAVAID_FREQUENCY_RANGES, min_tokens};
use crate::models::Navaid;

/// Index of the first name token
const NAME_START: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
pub struct NavaidFormat;

pub type NavaidParser = FormatParser<NavaidFormat>;

impl RecordFormat for NavaidFormat {
    type Record = Navaid;
    const NAME: &'static str = "navaid";
    const MIN_TOKENS: usize = min_tokens::NAVAID;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Navaid, ParseIssue> {
        let navaid = Navaid {
            nav_type: ctx.int("nav_type", t[0], 0),
            latitude: ctx.float("latitude", t[1], 0.0),
            longitude: ctx.float("longitude", t[2], 0.0),
            elevation: ctx.int("elevation", t[3], 0),
            // written as e.g. "11630" or "57.0"; truncated to whole units
            frequency: ctx.truncated_int("frequency", t[4], 0),
            range_nm: ctx.truncated_int("range_nm", t[5], 0),
            magnetic_variation: ctx.float("magnetic_variation", t[6], 0.0),
            identifier: ctx.string(t[7], ""),
            usage_type: ctx.string(t[8], ""),
            region_code: ctx.string(t[9], ""),
            name: t[NAME_START..].join(" "),
        };

        if navaid.identifier.is_empty() || navaid.nav_type == 0 {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "navaid identifier is empty or type is zero",
            ));
        }

        if !coordinates_in_range(navaid.latitude, navaid.longitude) {
            return Err(ctx.reject(
                IssueKind::CoordinateOutOfRange,
                format!(
                    "navaid {} coordinates out of range: lat={}, lon={}",
                    navaid.identifier, navaid.latitude, navaid.longitude
                ),
            ));
        }

        if !frequency_plausible(navaid.nav_type, navaid.frequency) {
            ctx.warn(
                IssueKind::FrequencyOutOfRange,
                format!(
                    "navaid {} frequency out of range: type={}, freq={}",
                    navaid.identifier, navaid.nav_type, navaid.frequency
                ),
            );
        }

        Ok(navaid)
    }
}

/// Whether a frequency falls inside the plausible band for its navaid type
///
/// Types without a known band always pass.
pub fn frequency_plausible(nav_type: i64, frequency: i64) -> bool {
    NAVAID_FREQUENCY_RANGES
        .iter()
        .find(|(code, _, _)| *code == nav_type)
        .is_none_or(|(_, min, max)| (*min..=*max).contains(&frequency))
}
