//! Table definitions for the generated SQL script.
//!
//! The serializer treats DDL as opaque text looked up by table name through
//! [`SchemaSource`]. [`BuiltinSchema`] carries the MySQL definitions of the
//! eight navigation data tables; each drops and recreates its table with an
//! auto-increment `id` followed by the declared columns and lookup indexes.

use crate::models::TableName;

/// Supplies the DDL text emitted ahead of a table's data
pub trait SchemaSource: Send + Sync {
    /// DDL for one table, or `None` when the source does not define it
    fn ddl(&self, table: TableName) -> Option<&str>;
}

/// The built-in MySQL definitions for every table
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSchema;

impl SchemaSource for BuiltinSchema {
    fn ddl(&self, table: TableName) -> Option<&str> {
        Some(match table {
            TableName::Airports => AIRPORTS_DDL,
            TableName::Waypoints => WAYPOINTS_DDL,
            TableName::Navaids => NAVAIDS_DDL,
            TableName::Airways => AIRWAYS_DDL,
            TableName::Holdings => HOLDINGS_DDL,
            TableName::Mora => MORA_DDL,
            TableName::Msa => MSA_DDL,
            TableName::TerminalProcedures => TERMINAL_PROCEDURES_DDL,
        })
    }
}

const AIRPORTS_DDL: &str = r#"DROP TABLE IF EXISTS airports;
CREATE TABLE airports (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    icao_code VARCHAR(4) NOT NULL,
    region_code VARCHAR(2) NOT NULL,
    latitude DECIMAL(12, 9) NOT NULL,
    longitude DECIMAL(12, 9) NOT NULL,
    elevation INTEGER NOT NULL,                       -- feet
    airport_type CHAR(1) NOT NULL,                    -- P=public, C=civil, R=restricted
    runway_length INTEGER DEFAULT 0,                  -- feet
    runway_surface CHAR(1) DEFAULT '0',               -- 0=unknown
    transition_altitude INTEGER DEFAULT -1,           -- feet, -1 when not published
    transition_level VARCHAR(10) DEFAULT '-1',        -- e.g. FL180

    UNIQUE(icao_code),
    KEY idx_airports_icao (icao_code),
    KEY idx_airports_region (region_code),
    KEY idx_airports_location (latitude, longitude)
);
"#;

const WAYPOINTS_DDL: &str = r#"DROP TABLE IF EXISTS waypoints;
CREATE TABLE waypoints (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    latitude DECIMAL(12, 9) NOT NULL,
    longitude DECIMAL(12, 9) NOT NULL,
    waypoint_name VARCHAR(5) NOT NULL,
    usage_type VARCHAR(4) NOT NULL,                   -- ENRT=enroute, otherwise terminal area code
    region_code VARCHAR(2) NOT NULL,
    section_code INTEGER NOT NULL,
    waypoint_id VARCHAR(100) NOT NULL,
    is_terminal BOOLEAN DEFAULT FALSE,

    KEY idx_waypoints_name (waypoint_name),
    KEY idx_waypoints_region (region_code),
    KEY idx_waypoints_usage (usage_type),
    KEY idx_waypoints_location (latitude, longitude),
    KEY idx_waypoints_terminal (is_terminal)
);
"#;

const NAVAIDS_DDL: &str = r#"DROP TABLE IF EXISTS navaids;
CREATE TABLE navaids (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    nav_type INTEGER NOT NULL,                        -- 2=NDB, 3=VOR, 12=DME, ...
    latitude DECIMAL(12, 9) NOT NULL,
    longitude DECIMAL(12, 9) NOT NULL,
    elevation INTEGER NOT NULL,                       -- feet
    frequency INTEGER NOT NULL,
    range_nm INTEGER NOT NULL,
    magnetic_variation DECIMAL(12, 3) NOT NULL,       -- encoded bearing for some types
    identifier VARCHAR(16) NOT NULL,
    usage_type VARCHAR(4) NOT NULL,
    region_code VARCHAR(2) NOT NULL,
    name VARCHAR(100) NOT NULL,

    KEY idx_navaids_identifier (identifier),
    KEY idx_navaids_type (nav_type),
    KEY idx_navaids_region (region_code),
    KEY idx_navaids_location (latitude, longitude),
    KEY idx_navaids_frequency (frequency)
);
"#;

const AIRWAYS_DDL: &str = r#"DROP TABLE IF EXISTS airways;
CREATE TABLE airways (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    from_waypoint VARCHAR(5) NOT NULL,
    from_region VARCHAR(2) NOT NULL,
    from_section INTEGER NOT NULL,
    to_waypoint VARCHAR(5) NOT NULL,
    to_region VARCHAR(2) NOT NULL,
    to_section INTEGER NOT NULL,
    airway_type CHAR(1) NOT NULL,                     -- N=normal, F=ferry, ...
    direction INTEGER NOT NULL,                       -- 1=one way, 2=both ways
    min_altitude INTEGER NOT NULL,                    -- hundreds of feet
    max_altitude INTEGER NOT NULL,                    -- hundreds of feet
    airway_name VARCHAR(120) NOT NULL,

    KEY idx_airways_from (from_waypoint, from_region),
    KEY idx_airways_to (to_waypoint, to_region),
    KEY idx_airways_name (airway_name),
    KEY idx_airways_type (airway_type)
);
"#;

const HOLDINGS_DDL: &str = r#"DROP TABLE IF EXISTS holdings;
CREATE TABLE holdings (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    waypoint_name VARCHAR(5) NOT NULL,
    region_code VARCHAR(2) NOT NULL,
    airport_icao VARCHAR(4) NOT NULL,
    section_code INTEGER NOT NULL,
    inbound_course DECIMAL(5, 1) NOT NULL,            -- degrees
    turn_direction DECIMAL(3, 1) NOT NULL,            -- 0.0=right, 1.0=left
    leg_length DECIMAL(4, 1) NOT NULL,                -- nautical miles or minutes
    leg_type CHAR(1) NOT NULL,
    min_altitude INTEGER NOT NULL,                    -- feet
    max_altitude INTEGER NOT NULL,                    -- feet
    speed_limit INTEGER NOT NULL,                     -- knots

    KEY idx_holdings_waypoint (waypoint_name),
    KEY idx_holdings_airport (airport_icao),
    KEY idx_holdings_region (region_code)
);
"#;

const MORA_DDL: &str = r#"DROP TABLE IF EXISTS mora;
CREATE TABLE mora (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    latitude_deg INTEGER NOT NULL,
    longitude_deg INTEGER NOT NULL,
    grid_data TEXT NOT NULL,                          -- 30 space-separated values

    KEY idx_mora_location (latitude_deg, longitude_deg)
);
"#;

const MSA_DDL: &str = r#"DROP TABLE IF EXISTS msa;
CREATE TABLE msa (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    sector_count INTEGER NOT NULL,                    -- 1 to 3
    navaid_identifier VARCHAR(16) NOT NULL,
    region_code VARCHAR(2) NOT NULL,
    airport_icao VARCHAR(4) NOT NULL,
    msa_type CHAR(1) NOT NULL,

    sector1_bearing INTEGER,
    sector1_altitude INTEGER,
    sector1_radius INTEGER,

    sector2_bearing INTEGER,
    sector2_altitude INTEGER,
    sector2_radius INTEGER,

    sector3_bearing INTEGER,
    sector3_altitude INTEGER,
    sector3_radius INTEGER,

    KEY idx_msa_navaid (navaid_identifier),
    KEY idx_msa_airport (airport_icao),
    KEY idx_msa_region (region_code)
);
"#;

const TERMINAL_PROCEDURES_DDL: &str = r#"DROP TABLE IF EXISTS terminal_procedures;
CREATE TABLE terminal_procedures (
    id INTEGER PRIMARY KEY AUTO_INCREMENT,
    airport_icao VARCHAR(4) NOT NULL,
    procedure_type VARCHAR(10) NOT NULL,              -- SID, STAR, APPCH
    sequence_number VARCHAR(10) NOT NULL,
    route_type INTEGER NOT NULL,
    procedure_name VARCHAR(20) NOT NULL,
    transition_name VARCHAR(20),
    waypoint_name VARCHAR(5) NOT NULL,
    waypoint_region VARCHAR(16) NOT NULL,
    waypoint_section INTEGER NOT NULL,
    waypoint_type VARCHAR(16) NOT NULL,
    waypoint_description VARCHAR(10),
    path_terminator VARCHAR(16) NOT NULL,

    ref_navaid_identifier VARCHAR(6),
    ref_navaid_region VARCHAR(16),
    ref_navaid_section INTEGER,
    ref_navaid_type VARCHAR(16),

    theta DECIMAL(6, 1),
    rho DECIMAL(6, 2),
    magnetic_course DECIMAL(6, 1),
    distance_time VARCHAR(4),

    altitude_description VARCHAR(16),
    altitude1 VARCHAR(10),
    altitude2 VARCHAR(10),
    transition_altitude VARCHAR(10),

    speed_limit VARCHAR(10),

    vertical_angle DECIMAL(4, 1),
    center_fix VARCHAR(5),
    multiple_code VARCHAR(16),
    gnss_fms_indication VARCHAR(16),

    KEY idx_terminal_airport (airport_icao),
    KEY idx_terminal_type (procedure_type),
    KEY idx_terminal_name (procedure_name),
    KEY idx_terminal_waypoint (waypoint_name),
    KEY idx_terminal_sequence (airport_icao, procedure_type, procedure_name, sequence_number)
);
"#;
