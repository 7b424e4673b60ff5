//! Parse issues and the diagnostics sink they are reported to
//!
//! Every problem found while parsing is captured as a [`ParseIssue`] and
//! returned to the caller alongside the parsed records. Parsers also hand
//! each issue to an injected [`Diagnostics`] implementation as it occurs,
//! which by default writes it to the tracing log.

use serde::Serialize;
use std::fmt;
use tracing::{error, warn};

/// How much of the input an issue cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// A field was defaulted or flagged; the record was still produced
    Field,
    /// The line was discarded; parsing of the file continued
    Record,
    /// A whole file contributed nothing; sibling files continued
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// A token could not be converted and was replaced by a default
    InvalidField,
    /// Fewer tokens than the format requires
    MissingTokens,
    /// More tokens than a fixed-width format allows
    ExtraTokens,
    /// A mandatory field was empty or zero
    MissingRequiredField,
    CoordinateOutOfRange,
    /// A signed-degree coordinate token was malformed
    InvalidCoordinate,
    /// A terrain grid value was not a plain digit string
    NonNumericGrid,
    InvalidSectorCount,
    /// Fewer sector triples than the declared sector count
    ShortSectorData,
    /// Minimum altitude above a positive maximum altitude
    AltitudeOrder,
    CourseOutOfRange,
    FrequencyOutOfRange,
    /// Procedure type token not of the form `TYPE:SEQUENCE`
    InvalidProcedureType,
    /// A source file or directory does not exist
    MissingSource,
    /// A source file could not be read or decoded
    UnreadableFile,
}

/// A single problem encountered while parsing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    /// 1-based line number in the source file, when tied to a line
    pub line: Option<usize>,
    pub message: String,
}

impl ParseIssue {
    pub fn field(kind: IssueKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Field,
            kind,
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn record(kind: IssueKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Record,
            kind,
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn file(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::File,
            kind,
            line: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Receives issues as parsers find them
pub trait Diagnostics: Send + Sync + fmt::Debug {
    /// `source` names the file (or airport) the issue came from
    fn report(&self, source: &str, issue: &ParseIssue);
}

/// Writes issues to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, source: &str, issue: &ParseIssue) {
        match issue.severity {
            Severity::Field | Severity::Record => warn!("{}: {}", source, issue),
            Severity::File => error!("{}: {}", source, issue),
        }
    }
}

/// Drops every issue; callers still get them in the parse outcome
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _source: &str, _issue: &ParseIssue) {}
}
