//! Column layout of comma-delimited procedure records
//!
//! Procedure records are sparse: many columns are always empty, and every
//! used column is identified by its position alone. The layout below is the
//! single place positions are defined, and [`ProcedureTokens`] is the single
//! place they are bounds-checked.

use crate::parser::field_parsers::FieldContext;

/// Logical columns of a procedure record (token 0 is `TYPE:SEQUENCE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcField {
    RouteType,
    ProcedureName,
    TransitionName,
    WaypointName,
    WaypointRegion,
    WaypointSection,
    WaypointType,
    WaypointDescription,
    PathTerminator,
    RefNavaidIdentifier,
    RefNavaidRegion,
    RefNavaidSection,
    RefNavaidType,
    Theta,
    Rho,
    MagneticCourse,
    DistanceTime,
    AltitudeDescription,
    Altitude1,
    Altitude2,
    TransitionAltitude,
    SpeedLimit,
    VerticalAngle,
    CenterFix,
    MultipleCode,
    GnssFmsIndication,
}

impl ProcField {
    /// Token position of the column
    pub const fn index(self) -> usize {
        match self {
            ProcField::RouteType => 1,
            ProcField::ProcedureName => 2,
            ProcField::TransitionName => 3,
            ProcField::WaypointName => 4,
            ProcField::WaypointRegion => 5,
            ProcField::WaypointSection => 6,
            ProcField::WaypointType => 7,
            ProcField::WaypointDescription => 8,
            ProcField::PathTerminator => 12,
            ProcField::RefNavaidIdentifier => 14,
            ProcField::RefNavaidRegion => 15,
            ProcField::RefNavaidSection => 16,
            ProcField::RefNavaidType => 17,
            ProcField::Theta => 19,
            ProcField::Rho => 20,
            ProcField::MagneticCourse => 21,
            ProcField::DistanceTime => 22,
            ProcField::AltitudeDescription => 24,
            ProcField::Altitude1 => 25,
            ProcField::Altitude2 => 26,
            ProcField::TransitionAltitude => 27,
            ProcField::SpeedLimit => 29,
            ProcField::VerticalAngle => 31,
            ProcField::CenterFix => 32,
            ProcField::MultipleCode => 33,
            ProcField::GnssFmsIndication => 34,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ProcField::RouteType => "route_type",
            ProcField::ProcedureName => "procedure_name",
            ProcField::TransitionName => "transition_name",
            ProcField::WaypointName => "waypoint_name",
            ProcField::WaypointRegion => "waypoint_region",
            ProcField::WaypointSection => "waypoint_section",
            ProcField::WaypointType => "waypoint_type",
            ProcField::WaypointDescription => "waypoint_description",
            ProcField::PathTerminator => "path_terminator",
            ProcField::RefNavaidIdentifier => "ref_navaid_identifier",
            ProcField::RefNavaidRegion => "ref_navaid_region",
            ProcField::RefNavaidSection => "ref_navaid_section",
            ProcField::RefNavaidType => "ref_navaid_type",
            ProcField::Theta => "theta",
            ProcField::Rho => "rho",
            ProcField::MagneticCourse => "magnetic_course",
            ProcField::DistanceTime => "distance_time",
            ProcField::AltitudeDescription => "altitude_description",
            ProcField::Altitude1 => "altitude1",
            ProcField::Altitude2 => "altitude2",
            ProcField::TransitionAltitude => "transition_altitude",
            ProcField::SpeedLimit => "speed_limit",
            ProcField::VerticalAngle => "vertical_angle",
            ProcField::CenterFix => "center_fix",
            ProcField::MultipleCode => "multiple_code",
            ProcField::GnssFmsIndication => "gnss_fms_indication",
        }
    }
}

/// Trimmed tokens of one procedure record, read by logical column
#[derive(Debug, Clone)]
pub struct ProcedureTokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ProcedureTokens<'a> {
    pub fn new(tokens: Vec<&'a str>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at a raw position
    pub fn at(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Token for a column, `None` when the record is too short to carry it
    pub fn get(&self, field: ProcField) -> Option<&'a str> {
        self.at(field.index())
    }

    /// Text column; empty when absent
    pub fn text(&self, ctx: &FieldContext, field: ProcField) -> String {
        self.get(field)
            .map(|raw| ctx.string(raw, ""))
            .unwrap_or_default()
    }

    /// Integer column; `absent` when the record is too short
    pub fn int_or(&self, ctx: &mut FieldContext, field: ProcField, absent: i64) -> i64 {
        match self.get(field) {
            Some(raw) => ctx.int(field.name(), raw, 0),
            None => absent,
        }
    }

    /// Integer column; `None` when the record is too short
    pub fn opt_int(&self, ctx: &mut FieldContext, field: ProcField) -> Option<i64> {
        self.get(field).map(|raw| ctx.int(field.name(), raw, 0))
    }

    /// Float column; `None` when the record is too short
    pub fn opt_float(&self, ctx: &mut FieldContext, field: ProcField) -> Option<f64> {
        self.get(field).map(|raw| ctx.float(field.name(), raw, 0.0))
    }
}
