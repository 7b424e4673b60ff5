//! Minimum sector altitude records
//!
//! `SECTORS NAVAID REGION AIRPORT TYPE` followed by one
//! `BEARING ALTITUDE RADIUS` triple per declared sector.

use super::diagnostics::{IssueKind, ParseIssue};
use super::field_parsers::FieldContext;
use super::format_parser::{FormatParser, RecordFormat};
use crate::constants::{MSA_MAX_SECTORS, min_tokens};
use crate::models::{Msa, MsaSector};

/// Index of the first sector triple
const SECTOR_START: usize = 5;

#[derive(Debug, Default, Clone, Copy)]
pub struct MsaFormat;

pub type MsaParser = FormatParser<MsaFormat>;

impl RecordFormat for MsaFormat {
    type Record = Msa;
    const NAME: &'static str = "MSA";
    const MIN_TOKENS: usize = min_tokens::MSA;

    fn parse_tokens(&self, t: &[&str], ctx: &mut FieldContext) -> Result<Msa, ParseIssue> {
        let sector_count = ctx.int("sector_count", t[0], 0);
        let navaid_identifier = ctx.string(t[1], "");
        let region_code = ctx.string(t[2], "");
        let airport_icao = ctx.string(t[3], "");
        let msa_type = ctx.string(t[4], "M");

        if navaid_identifier.is_empty() || airport_icao.is_empty() {
            return Err(ctx.reject(
                IssueKind::MissingRequiredField,
                "MSA navaid identifier or airport code is empty",
            ));
        }

        if !(1..=MSA_MAX_SECTORS as i64).contains(&sector_count) {
            return Err(ctx.reject(
                IssueKind::InvalidSectorCount,
                format!("MSA sector count out of range: {}", sector_count),
            ));
        }

        let mut sectors = [None; MSA_MAX_SECTORS];
        for (index, slot) in sectors.iter_mut().take(sector_count as usize).enumerate() {
            let start = SECTOR_START + index * 3;
            let Some(triple) = t.get(start..start + 3) else {
                ctx.warn(
                    IssueKind::ShortSectorData,
                    format!(
                        "MSA {} at {}: sector {} data missing",
                        navaid_identifier,
                        airport_icao,
                        index + 1
                    ),
                );
                break;
            };
            *slot = Some(MsaSector {
                bearing: ctx.int("sector_bearing", triple[0], 0),
                altitude: ctx.int("sector_altitude", triple[1], 0),
                radius: ctx.int("sector_radius", triple[2], 0),
            });
        }

        Ok(Msa {
            sector_count,
            navaid_identifier,
            region_code,
            airport_icao,
            msa_type,
            sectors,
        })
    }
}
