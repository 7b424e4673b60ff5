//! Holding pattern records
//!
//! `FIX REGION AIRPORT SECTION COURSE TURN LEG_LEN LEG_TYPE MIN_ALT MAX_ALT SPEED`

use super::airway::check_altitude_order;
use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::FieldContext;
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::{COURSE_RANGE, min_tokens};
use crate::models::Holding;

#[derive(Debug, Default, Clone, Copy)]
pub struct HoldingFormat;

pub type HoldingParser = FormatParser<HoldingFormat>;

impl RecordFormat for HoldingFormat {
    type Record = Holding;
    const NAME: &'static str = "holding";
    const MIN_TOKENS: usize = min_tokens::HOLDING;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Holding, ParseIssue> {
        let holding = Holding {
            waypoint_name: ctx.string(t[0], ""),
            region_code: ctx.string(t[1], ""),
            airport_icao: ctx.string(t[2], ""),
            section_code: ctx.int("section_code", t[3], 0),
            inbound_course: ctx.float("inbound_course", t[4], 0.0),
            turn_direction: ctx.float("turn_direction", t[5], 0.0),
            leg_length: ctx.float("leg_length", t[6], 0.0),
            leg_type: ctx.string(t[7], "R"),
            min_altitude: ctx.int("min_altitude", t[8], 0),
            max_altitude: ctx.int("max_altitude", t[9], 0),
            speed_limit: ctx.int("speed_limit", t[10], 0),
        };

        if holding.waypoint_name.is_empty() || holding.airport_icao.is_empty() {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "holding waypoint name or airport code is empty",
            ));
        }

        if !(COURSE_RANGE.0..=COURSE_RANGE.1).contains(&holding.inbound_course) {
            ctx.warn(
                IssueKind::CourseOutOfRange,
                format!(
                    "{}: inbound course out of range: {}",
                    holding.waypoint_name, holding.inbound_course
                ),
            );
        }

        check_altitude_order(
            ctx,
            &holding.waypoint_name,
            holding.min_altitude,
            holding.max_altitude,
        );

        Ok(holding)
    }
}
