//! Parsers for the navigation data source files
//!
//! Seven of the eight data families are whitespace-tokenized, one record
//! per line, and share a single engine: [`FormatParser`] drives a
//! [`RecordFormat`] that knows one family's token layout. Instrument
//! procedures are comma-delimited, spread over one file per airport, and
//! have their own parser and directory walker.
//!
//! ## Architecture
//!
//! - [`line_source`] - file decoding and candidate line filtering
//! - [`field_parsers`] - tolerant token coercion shared by every format
//! - [`format_parser`] - the whitespace-tokenized parsing engine
//! - [`airport`], [`airway`], [`waypoint`], [`holding`], [`navaid`],
//!   [`mora`], [`msa`] - one record layout each
//! - [`procedure`] - procedure legs and the per-airport file walker
//! - [`diagnostics`] - parse issues and where they are reported
//! - [`stats`] - parse outcomes and counters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use navdata_sql::parser::AirportParser;
//! use navdata_sql::parser::airport::AirportFormat;
//!
//! # fn example() -> navdata_sql::Result<()> {
//! let parser = AirportParser::open("source/earth_aptmeta.dat", AirportFormat)?;
//! let outcome = parser.parse()?;
//!
//! println!(
//!     "Parsed {} airports, {} issues",
//!     outcome.records.len(),
//!     outcome.issues.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod airport;
pub mod airway;
pub mod diagnostics;
pub mod field_parsers;
pub mod format_parser;
pub mod holding;
pub mod line_source;
pub mod mora;
pub mod msa;
pub mod navaid;
pub mod procedure;
pub mod stats;
pub mod waypoint;

#[cfg(test)]
pub mod tests;

pub use airport::AirportParser;
pub use airway::AirwayParser;
pub use diagnostics::{
    Diagnostics, IssueKind, ParseIssue, Severity, SilentDiagnostics, TracingDiagnostics,
};
pub use field_parsers::FieldContext;
pub use format_parser::{FormatParser, RecordFormat};
pub use holding::HoldingParser;
pub use line_source::{LineSource, SourceEncoding, SourceText};
pub use mora::MoraParser;
pub use msa::MsaParser;
pub use navaid::NavaidParser;
pub use procedure::{ProcedureParser, ProcedureWalker};
pub use stats::{ParseOutcome, ParseStats};
pub use waypoint::WaypointParser;
