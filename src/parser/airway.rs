//! Airway segment records
//!
//! `FROM REGION SECTION TO REGION SECTION TYPE DIRECTION MIN_ALT MAX_ALT NAME`

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::FieldContext;
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::min_tokens;
use crate::models::Airway;

#[derive(Debug, Default, Clone, Copy)]
pub struct AirwayFormat;

pub type AirwayParser = FormatParser<AirwayFormat>;

impl RecordFormat for AirwayFormat {
    type Record = Airway;
    const NAME: &'static str = "airway";
    const MIN_TOKENS: usize = min_tokens::AIRWAY;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Airway, ParseIssue> {
        let airway = Airway {
            from_waypoint: ctx.string(t[0], ""),
            from_region: ctx.string(t[1], ""),
            from_section: ctx.int("from_section", t[2], 0),
            to_waypoint: ctx.string(t[3], ""),
            to_region: ctx.string(t[4], ""),
            to_section: ctx.int("to_section", t[5], 0),
            airway_type: ctx.string(t[6], "N"),
            direction: ctx.int("direction", t[7], 1),
            min_altitude: ctx.int("min_altitude", t[8], 0),
            max_altitude: ctx.int("max_altitude", t[9], 0),
            airway_name: ctx.string(t[10], ""),
        };

        if airway.from_waypoint.is_empty()
            || airway.to_waypoint.is_empty()
            || airway.airway_name.is_empty()
        {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "airway waypoint or airway name is empty",
            ));
        }

        check_altitude_order(ctx, &airway.airway_name, airway.min_altitude, airway.max_altitude);

        Ok(airway)
    }
}

/// Flag a minimum altitude above a positive maximum; the record is kept
pub(crate) fn check_altitude_order(ctx: &mut FieldContext, name: &str, min: i64, max: i64) {
    if min > max && max > 0 {
        ctx.warn(
            IssueKind::AltitudeOrder,
            format!(
                "{}: minimum altitude above maximum, min={}, max={}",
                name, min, max
            ),
        );
    }
}
