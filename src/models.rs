//! Core data structures for navigation data conversion.
//!
//! Defines the eight target tables, the typed record for each of them,
//! the SQL scalar type rows are made of, and the per-table datasets the
//! serializer consumes.

use crate::error::{NavdataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target tables, declared in output precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
    Airports,
    Waypoints,
    Navaids,
    Airways,
    Holdings,
    Mora,
    Msa,
    TerminalProcedures,
}

impl TableName {
    /// All tables in the order their data is written
    pub const ALL: [TableName; 8] = [
        TableName::Airports,
        TableName::Waypoints,
        TableName::Navaids,
        TableName::Airways,
        TableName::Holdings,
        TableName::Mora,
        TableName::Msa,
        TableName::TerminalProcedures,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Airports => "airports",
            TableName::Waypoints => "waypoints",
            TableName::Navaids => "navaids",
            TableName::Airways => "airways",
            TableName::Holdings => "holdings",
            TableName::Mora => "mora",
            TableName::Msa => "msa",
            TableName::TerminalProcedures => "terminal_procedures",
        }
    }

    /// Declared column set, in insert order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableName::Airports => &[
                "icao_code",
                "region_code",
                "latitude",
                "longitude",
                "elevation",
                "airport_type",
                "runway_length",
                "runway_surface",
                "transition_altitude",
                "transition_level",
            ],
            TableName::Waypoints => &[
                "latitude",
                "longitude",
                "waypoint_name",
                "usage_type",
                "region_code",
                "section_code",
                "waypoint_id",
                "is_terminal",
            ],
            TableName::Navaids => &[
                "nav_type",
                "latitude",
                "longitude",
                "elevation",
                "frequency",
                "range_nm",
                "magnetic_variation",
                "identifier",
                "usage_type",
                "region_code",
                "name",
            ],
            TableName::Airways => &[
                "from_waypoint",
                "from_region",
                "from_section",
                "to_waypoint",
                "to_region",
                "to_section",
                "airway_type",
                "direction",
                "min_altitude",
                "max_altitude",
                "airway_name",
            ],
            TableName::Holdings => &[
                "waypoint_name",
                "region_code",
                "airport_icao",
                "section_code",
                "inbound_course",
                "turn_direction",
                "leg_length",
                "leg_type",
                "min_altitude",
                "max_altitude",
                "speed_limit",
            ],
            TableName::Mora => &["latitude_deg", "longitude_deg", "grid_data"],
            TableName::Msa => &[
                "sector_count",
                "navaid_identifier",
                "region_code",
                "airport_icao",
                "msa_type",
                "sector1_bearing",
                "sector1_altitude",
                "sector1_radius",
                "sector2_bearing",
                "sector2_altitude",
                "sector2_radius",
                "sector3_bearing",
                "sector3_altitude",
                "sector3_radius",
            ],
            TableName::TerminalProcedures => &[
                "airport_icao",
                "procedure_type",
                "sequence_number",
                "route_type",
                "procedure_name",
                "transition_name",
                "waypoint_name",
                "waypoint_region",
                "waypoint_section",
                "waypoint_type",
                "waypoint_description",
                "path_terminator",
                "ref_navaid_identifier",
                "ref_navaid_region",
                "ref_navaid_section",
                "ref_navaid_type",
                "theta",
                "rho",
                "magnetic_course",
                "distance_time",
                "altitude_description",
                "altitude1",
                "altitude2",
                "transition_altitude",
                "speed_limit",
                "vertical_angle",
                "center_fix",
                "multiple_code",
                "gnss_fms_indication",
            ],
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = NavdataError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        TableName::ALL
            .into_iter()
            .find(|table| table.as_str() == name)
            .ok_or(NavdataError::InvalidTable { name })
    }
}

/// A single SQL scalar
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// A typed record that maps onto one row of a table
pub trait TableRecord {
    /// Table this record belongs to
    const TABLE: TableName;

    /// Row values, one per declared column of [`Self::TABLE`]
    fn values(&self) -> Vec<SqlValue>;
}

/// Airport reference point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub icao_code: String,
    pub region_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i64,
    pub airport_type: String,
    pub runway_length: i64,
    pub runway_surface: String,
    /// -1 when not published
    pub transition_altitude: i64,
    pub transition_level: String,
}

impl TableRecord for Airport {
    const TABLE: TableName = TableName::Airports;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            (&self.icao_code).into(),
            (&self.region_code).into(),
            self.latitude.into(),
            self.longitude.into(),
            self.elevation.into(),
            (&self.airport_type).into(),
            self.runway_length.into(),
            (&self.runway_surface).into(),
            self.transition_altitude.into(),
            (&self.transition_level).into(),
        ]
    }
}

/// One airway segment between two fixes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airway {
    pub from_waypoint: String,
    pub from_region: String,
    pub from_section: i64,
    pub to_waypoint: String,
    pub to_region: String,
    pub to_section: i64,
    pub airway_type: String,
    pub direction: i64,
    pub min_altitude: i64,
    pub max_altitude: i64,
    pub airway_name: String,
}

impl TableRecord for Airway {
    const TABLE: TableName = TableName::Airways;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            (&self.from_waypoint).into(),
            (&self.from_region).into(),
            self.from_section.into(),
            (&self.to_waypoint).into(),
            (&self.to_region).into(),
            self.to_section.into(),
            (&self.airway_type).into(),
            self.direction.into(),
            self.min_altitude.into(),
            self.max_altitude.into(),
            (&self.airway_name).into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub waypoint_name: String,
    pub usage_type: String,
    pub region_code: String,
    pub section_code: i64,
    pub waypoint_id: String,
    pub is_terminal: bool,
}

impl TableRecord for Waypoint {
    const TABLE: TableName = TableName::Waypoints;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.latitude.into(),
            self.longitude.into(),
            (&self.waypoint_name).into(),
            (&self.usage_type).into(),
            (&self.region_code).into(),
            self.section_code.into(),
            (&self.waypoint_id).into(),
            self.is_terminal.into(),
        ]
    }
}

/// Holding pattern anchored on a fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub waypoint_name: String,
    pub region_code: String,
    pub airport_icao: String,
    pub section_code: i64,
    pub inbound_course: f64,
    pub turn_direction: f64,
    pub leg_length: f64,
    pub leg_type: String,
    pub min_altitude: i64,
    pub max_altitude: i64,
    pub speed_limit: i64,
}

impl TableRecord for Holding {
    const TABLE: TableName = TableName::Holdings;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            (&self.waypoint_name).into(),
            (&self.region_code).into(),
            (&self.airport_icao).into(),
            self.section_code.into(),
            self.inbound_course.into(),
            self.turn_direction.into(),
            self.leg_length.into(),
            (&self.leg_type).into(),
            self.min_altitude.into(),
            self.max_altitude.into(),
            self.speed_limit.into(),
        ]
    }
}

/// Radio navigation aid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navaid {
    pub nav_type: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i64,
    pub frequency: i64,
    pub range_nm: i64,
    /// Some types store an encoded bearing here instead
    pub magnetic_variation: f64,
    pub identifier: String,
    pub usage_type: String,
    pub region_code: String,
    pub name: String,
}

impl TableRecord for Navaid {
    const TABLE: TableName = TableName::Navaids;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.nav_type.into(),
            self.latitude.into(),
            self.longitude.into(),
            self.elevation.into(),
            self.frequency.into(),
            self.range_nm.into(),
            self.magnetic_variation.into(),
            (&self.identifier).into(),
            (&self.usage_type).into(),
            (&self.region_code).into(),
            (&self.name).into(),
        ]
    }
}

/// One row of the terrain-clearance (MORA) grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoraCell {
    pub latitude_deg: i64,
    pub longitude_deg: i64,
    /// The 30 grid values, space separated
    pub grid_data: String,
}

impl TableRecord for MoraCell {
    const TABLE: TableName = TableName::Mora;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.latitude_deg.into(),
            self.longitude_deg.into(),
            (&self.grid_data).into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MsaSector {
    pub bearing: i64,
    pub altitude: i64,
    pub radius: i64,
}

/// Minimum sector altitude around a navaid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Msa {
    pub sector_count: i64,
    pub navaid_identifier: String,
    pub region_code: String,
    pub airport_icao: String,
    pub msa_type: String,
    /// Sectors in declaration order; `None` when not supplied
    pub sectors: [Option<MsaSector>; 3],
}

impl TableRecord for Msa {
    const TABLE: TableName = TableName::Msa;

    fn values(&self) -> Vec<SqlValue> {
        let mut values: Vec<SqlValue> = vec![
            self.sector_count.into(),
            (&self.navaid_identifier).into(),
            (&self.region_code).into(),
            (&self.airport_icao).into(),
            (&self.msa_type).into(),
        ];
        for sector in &self.sectors {
            values.push(sector.map(|s| s.bearing).into());
            values.push(sector.map(|s| s.altitude).into());
            values.push(sector.map(|s| s.radius).into());
        }
        values
    }
}

/// One leg of an instrument procedure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureLeg {
    pub airport_icao: String,
    pub procedure_type: String,
    pub sequence_number: String,
    pub route_type: i64,
    pub procedure_name: String,
    pub transition_name: String,
    pub waypoint_name: String,
    pub waypoint_region: String,
    pub waypoint_section: i64,
    pub waypoint_type: String,
    pub waypoint_description: String,
    pub path_terminator: String,
    pub ref_navaid_identifier: String,
    pub ref_navaid_region: String,
    pub ref_navaid_section: Option<i64>,
    pub ref_navaid_type: String,
    pub theta: Option<f64>,
    pub rho: Option<f64>,
    pub magnetic_course: Option<f64>,
    pub distance_time: String,
    pub altitude_description: String,
    pub altitude1: String,
    pub altitude2: String,
    pub transition_altitude: String,
    pub speed_limit: String,
    pub vertical_angle: Option<f64>,
    pub center_fix: String,
    pub multiple_code: String,
    pub gnss_fms_indication: String,
}

impl TableRecord for ProcedureLeg {
    const TABLE: TableName = TableName::TerminalProcedures;

    fn values(&self) -> Vec<SqlValue> {
        vec![
            (&self.airport_icao).into(),
            (&self.procedure_type).into(),
            (&self.sequence_number).into(),
            self.route_type.into(),
            (&self.procedure_name).into(),
            (&self.transition_name).into(),
            (&self.waypoint_name).into(),
            (&self.waypoint_region).into(),
            self.waypoint_section.into(),
            (&self.waypoint_type).into(),
            (&self.waypoint_description).into(),
            (&self.path_terminator).into(),
            (&self.ref_navaid_identifier).into(),
            (&self.ref_navaid_region).into(),
            self.ref_navaid_section.into(),
            (&self.ref_navaid_type).into(),
            self.theta.into(),
            self.rho.into(),
            self.magnetic_course.into(),
            (&self.distance_time).into(),
            (&self.altitude_description).into(),
            (&self.altitude1).into(),
            (&self.altitude2).into(),
            (&self.transition_altitude).into(),
            (&self.speed_limit).into(),
            self.vertical_angle.into(),
            (&self.center_fix).into(),
            (&self.multiple_code).into(),
            (&self.gnss_fms_indication).into(),
        ]
    }
}

/// Ordered rows of one table, checked against the declared column set
#[derive(Debug, Clone, PartialEq)]
pub struct TableDataset {
    table: TableName,
    rows: Vec<Vec<SqlValue>>,
}

impl TableDataset {
    /// Create an empty dataset for a table
    pub fn new(table: TableName) -> Self {
        Self {
            table,
            rows: Vec::new(),
        }
    }

    /// Build a dataset from typed records, keeping their order
    pub fn from_records<R: TableRecord>(records: &[R]) -> Result<Self> {
        let mut dataset = Self::new(R::TABLE);
        for record in records {
            dataset.push_row(record.values())?;
        }
        Ok(dataset)
    }

    /// Append a raw row; its width must match the table's column count
    pub fn push_row(&mut self, row: Vec<SqlValue>) -> Result<()> {
        let expected = self.table.columns().len();
        if row.len() != expected {
            return Err(NavdataError::RowShape {
                table: self.table.to_string(),
                expected,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn table(&self) -> TableName {
        self.table
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.table.columns()
    }

    pub fn rows(&self) -> &[Vec<SqlValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All parsed tables, keyed (and therefore iterated) in precedence order
pub type Datasets = BTreeMap<TableName, TableDataset>;

/// Record counts per table plus their total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub per_table: BTreeMap<TableName, usize>,
    pub total: usize,
}

impl Statistics {
    pub fn from_datasets(datasets: &Datasets) -> Self {
        let per_table: BTreeMap<TableName, usize> = datasets
            .iter()
            .map(|(table, dataset)| (*table, dataset.len()))
            .collect();
        let total = per_table.values().sum();
        Self { per_table, total }
    }

    /// Record count for one table, zero when it was not parsed
    pub fn count(&self, table: TableName) -> usize {
        self.per_table.get(&table).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_precedence() {
        let names: Vec<&str> = TableName::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "airports",
                "waypoints",
                "navaids",
                "airways",
                "holdings",
                "mora",
                "msa",
                "terminal_procedures"
            ]
        );
        let mut sorted = TableName::ALL;
        sorted.sort();
        assert_eq!(sorted, TableName::ALL);
    }

    #[test]
    fn test_table_name_from_str() {
        assert_eq!("msa".parse::<TableName>().unwrap(), TableName::Msa);
        assert_eq!(
            " Terminal_Procedures ".parse::<TableName>().unwrap(),
            TableName::TerminalProcedures
        );
        assert!(matches!(
            "runways".parse::<TableName>(),
            Err(NavdataError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_msa_values_flatten_missing_sectors_to_null() {
        let msa = Msa {
            sector_count: 2,
            navaid_identifier: "ABC".to_string(),
            region_code: "K1".to_string(),
            airport_icao: "KXYZ".to_string(),
            msa_type: "M".to_string(),
            sectors: [
                Some(MsaSector {
                    bearing: 90,
                    altitude: 3000,
                    radius: 25,
                }),
                None,
                None,
            ],
        };

        let values = msa.values();
        assert_eq!(values.len(), TableName::Msa.columns().len());
        assert_eq!(values[5], SqlValue::Int(90));
        assert_eq!(values[7], SqlValue::Int(25));
        assert!(values[8..].iter().all(|v| *v == SqlValue::Null));
    }

    #[test]
    fn test_dataset_rejects_wrong_row_width() {
        let mut dataset = TableDataset::new(TableName::Mora);
        let result = dataset.push_row(vec![SqlValue::Int(1)]);
        match result {
            Err(NavdataError::RowShape {
                expected, found, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 1);
            }
            _ => panic!("Expected RowShape error"),
        }
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_statistics_total() {
        let mut datasets = Datasets::new();
        let cells = vec![
            MoraCell {
                latitude_deg: 1,
                longitude_deg: 2,
                grid_data: "0".to_string(),
            };
            3
        ];
        datasets.insert(
            TableName::Mora,
            TableDataset::from_records(&cells).unwrap(),
        );
        datasets.insert(TableName::Airports, TableDataset::new(TableName::Airports));

        let stats = Statistics::from_datasets(&datasets);
        assert_eq!(stats.count(TableName::Mora), 3);
        assert_eq!(stats.count(TableName::Airports), 0);
        assert_eq!(stats.count(TableName::Navaids), 0);
        assert_eq!(stats.total, 3);
    }
}
