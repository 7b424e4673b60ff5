//! Airport metadata records
//!
//! `ICAO REGION LAT LON ELEV TYPE RWY_LEN SURFACE TRANS_ALT TRANS_LEVEL`,
//! for example `00AN PA 59.093472222 -156.455833333 80 P 4500 0 18000 FL180`.

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::{FieldContext, coordinates_in_range};
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::min_tokens;
use crate::models::Airport;

#[derive(Debug, Default, Clone, Copy)]
pub struct AirportFormat;

pub type AirportParser = FormatParser<AirportFormat>;

impl RecordFormat for AirportFormat {
    type Record = Airport;
    const NAME: &'static str = "airport";
    const MIN_TOKENS: usize = min_tokens::AIRPORT;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Airport, ParseIssue> {
        let airport = Airport {
            icao_code: ctx.string(t[0], ""),
            region_code: ctx.string(t[1], ""),
            latitude: ctx.float("latitude", t[2], 0.0),
            longitude: ctx.float("longitude", t[3], 0.0),
            elevation: ctx.int("elevation", t[4], 0),
            airport_type: ctx.string(t[5], "P"),
            runway_length: ctx.int("runway_length", t[6], 0),
            runway_surface: ctx.string(t[7], "0"),
            transition_altitude: ctx.int("transition_altitude", t[8], -1),
            transition_level: ctx.string(t[9], "-1"),
        };

        if airport.icao_code.is_empty() || airport.region_code.is_empty() {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "airport ICAO code or region code is empty",
            ));
        }

        if !coordinates_in_range(airport.latitude, airport.longitude) {
            return Err(ctx.reject(
                IssueKind::CoordinateOutOfRange,
                format!(
                    "airport {} coordinates out of range: lat={}, lon={}",
                    airport.icao_code, airport.latitude, airport.longitude
                ),
            ));
        }

        Ok(airport)
    }
}
