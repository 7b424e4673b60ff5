//! Terrain-clearance (MORA) grid records
//!
//! `+LAT -LON` in signed whole degrees followed by exactly thirty digit
//! tokens. The thirty values are kept together as one space-joined string.

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::{FieldContext, coordinates_in_range, parse_signed_degrees};
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::MORA_GRID_CELLS;
use crate::models::MoraCell;

const GRID_START: usize = 2;

#[derive(Debug, Default, Clone, Copy)]
pub struct MoraFormat;

pub type MoraParser = FormatParser<MoraFormat>;

impl RecordFormat for MoraFormat {
    type Record = MoraCell;
    const NAME: &'static str = "MORA";
    const MIN_TOKENS: usize = GRID_START + MORA_GRID_CELLS;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<MoraCell, ParseIssue> {
        if t.len() > Self::MIN_TOKENS {
            return Err(ctx.reject(
                IssueKind::ExtraTokens,
                format!(
                    "MORA line has {} tokens, expected exactly {}",
                    t.len(),
                    Self::MIN_TOKENS
                ),
            ));
        }

        let (Some(latitude_deg), Some(longitude_deg)) =
            (parse_signed_degrees(t[0]), parse_signed_degrees(t[1]))
        else {
            return Err(ctx.reject(
                IssueKind::InvalidCoordinate,
                format!("MORA coordinate format invalid: {}, {}", t[0], t[1]),
            ));
        };

        if !coordinates_in_range(latitude_deg as f64, longitude_deg as f64) {
            return Err(ctx.reject(
                IssueKind::CoordinateOutOfRange,
                format!(
                    "MORA coordinates out of range: lat={}, lon={}",
                    latitude_deg, longitude_deg
                ),
            ));
        }

        let grid = &t[GRID_START..];
        if let Some((position, value)) = grid
            .iter()
            .enumerate()
            .find(|(_, value)| !value.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ctx.reject(
                IssueKind::NonNumericGrid,
                format!(
                    "MORA value at position {} is not numeric: {}",
                    position, value
                ),
            ));
        }

        Ok(MoraCell {
            latitude_deg,
            longitude_deg,
            grid_data: grid.join(" "),
        })
    }
}
