//! Navdata SQL Library
//!
//! Converts aeronautical navigation data text files into a single MySQL
//! import script.
//!
//! This library provides tools for:
//! - Reading data files with encoding fallback and header/terminator skipping
//! - Parsing airports, airways, waypoints, holdings, navaids, terrain grid
//!   cells, minimum sector altitudes and per-airport procedure legs
//! - Reporting malformed input as recoverable issues without stopping a run
//! - Writing table definitions and batched INSERT statements

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod schema;
pub mod sql;

// Re-export commonly used types
pub use config::NavdataConfig;
pub use error::{NavdataError, Result};
pub use models::{
    Airport, Airway, Datasets, Holding, MoraCell, Msa, MsaSector, Navaid, ProcedureLeg, SqlValue,
    Statistics, TableDataset, TableName, TableRecord, Waypoint,
};
pub use parser::{
    AirportParser, AirwayParser, Diagnostics, HoldingParser, LineSource, MoraParser, MsaParser,
    NavaidParser, ParseIssue, ProcedureParser, ProcedureWalker, Severity, WaypointParser,
};
pub use processor::{ConversionSummary, NavdataConverter};
pub use schema::{BuiltinSchema, SchemaSource};
pub use sql::SqlWriter;
