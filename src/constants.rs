//! Application constants for the navdata converter
//!
//! This module contains the default file names, line markers, validation
//! bounds and output settings used throughout the converter.

// =============================================================================
// Source Files
// =============================================================================

/// Default source directory, relative to the working directory
pub const DEFAULT_SOURCE_DIRECTORY: &str = "../source";

/// Directory holding one instrument-procedure file per airport
pub const DEFAULT_PROCEDURE_DIRECTORY: &str = "CIFP";

/// Extension of per-airport procedure files
pub const PROCEDURE_FILE_EXTENSION: &str = "dat";

pub const AIRPORT_FILE: &str = "earth_aptmeta.dat";
pub const AIRWAY_FILE: &str = "earth_awy.dat";
pub const WAYPOINT_FILE: &str = "earth_fix.dat";
pub const HOLDING_FILE: &str = "earth_hold.dat";
pub const NAVAID_FILE: &str = "earth_nav.dat";
pub const MORA_FILE: &str = "earth_mora.dat";
pub const MSA_FILE: &str = "earth_msa.dat";

// =============================================================================
// Line Filtering
// =============================================================================

/// Lines starting with any of these characters carry no record
pub const SKIP_LINE_PREFIXES: &[char] = &['I', '#'];

/// Banner carried by the cycle/version header line
pub const VERSION_BANNER: &str = "Version - data cycle";

/// End-of-file sentinel line
pub const END_OF_FILE_MARKER: &str = "99";

/// Procedure records end with this character
pub const PROCEDURE_RECORD_TERMINATOR: char = ';';

/// Procedure record field delimiter
pub const PROCEDURE_FIELD_DELIMITER: char = ',';

/// First-token prefixes of auxiliary (non-leg) procedure file records
pub const PROCEDURE_AUXILIARY_PREFIXES: &[&str] = &["RWY:", "AIRPORT:"];

// =============================================================================
// Minimum Token Counts
// =============================================================================

pub mod min_tokens {
    pub const AIRPORT: usize = 10;
    pub const AIRWAY: usize = 11;
    pub const WAYPOINT: usize = 7;
    pub const HOLDING: usize = 11;
    pub const NAVAID: usize = 11;
    pub const MSA: usize = 6;
    pub const PROCEDURE: usize = 10;
}

// =============================================================================
// Validation Bounds
// =============================================================================

pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
pub const COURSE_RANGE: (f64, f64) = (0.0, 360.0);

/// Terrain grid rows: two coordinates followed by this many cell values
pub const MORA_GRID_CELLS: usize = 30;

/// Highest number of minimum-sector-altitude sectors per record
pub const MSA_MAX_SECTORS: usize = 3;

/// Usage-type keywords marking a waypoint as terminal-area
pub const TERMINAL_USAGE_KEYWORDS: &[&str] = &["TERM", "APP", "DEP", "SID", "STAR"];

/// Usage type of enroute waypoints
pub const ENROUTE_USAGE_TYPE: &str = "ENRT";

/// Plausible frequency bounds per navaid type code
///
/// Frequencies are stored as integers in the source, e.g. 116.30 MHz is
/// written as 11630.
pub const NAVAID_FREQUENCY_RANGES: &[(i64, i64, i64)] = &[
    (2, 100, 2000),     // NDB
    (3, 10000, 12000),  // VOR
    (4, 10000, 12000),  // ILS localizer
    (5, 10000, 12000),  // localizer
    (6, 10000, 12000),  // glideslope
    (7, 7000, 12000),   // outer marker
    (8, 7000, 12000),   // middle marker
    (12, 10000, 13000), // DME
    (13, 10000, 13000), // standalone DME
];

// =============================================================================
// SQL Output
// =============================================================================

/// Default output script path
pub const DEFAULT_OUTPUT_FILE: &str = "../output/navdata.sql";

/// Records per INSERT statement
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default log file mirrored next to the console output
pub const DEFAULT_LOG_FILE: &str = "conversion.log";

/// Rule line used around the script's comment banners
pub const SQL_BANNER_RULE: &str = "-- =====================================================";
