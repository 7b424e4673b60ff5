//! Core parser for whitespace-tokenized navigation data files
//!
//! [`FormatParser`] pulls candidate lines from a [`LineSource`], splits them
//! on whitespace, enforces the format's minimum token count and hands the
//! tokens to a [`RecordFormat`] to build one record per line.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::diagnostics::{Diagnostics, IssueKind, ParseIssue, TracingDiagnostics};
use super::field_parsers::FieldContext;
use super::line_source::LineSource;
use super::stats::ParseOutcome;
use crate::error::Result;
use crate::models::TableRecord;

/// Line layout of one data family
pub trait RecordFormat: Send + Sync {
    type Record: TableRecord;

    /// Human-readable family name for log messages
    const NAME: &'static str;

    /// Lines with fewer whitespace-separated tokens are discarded
    const MIN_TOKENS: usize;

    /// Build a record from a line's tokens
    ///
    /// `tokens` holds at least [`Self::MIN_TOKENS`] entries. Field-level
    /// problems go into `ctx`; an `Err` discards the line.
    fn parse_tokens(
        &self,
        tokens: &[&str],
        ctx: &mut FieldContext,
    ) -> std::result::Result<Self::Record, ParseIssue>;
}

/// Parser for one whitespace-tokenized source file
#[derive(Debug)]
pub struct FormatParser<F> {
    source: LineSource,
    format: F,
    diagnostics: Arc<dyn Diagnostics>,
}

impl<F: RecordFormat> FormatParser<F> {
    /// Create a parser reporting issues to the tracing log
    pub fn open(path: impl Into<PathBuf>, format: F) -> Result<Self> {
        Self::with_diagnostics(path, format, Arc::new(TracingDiagnostics))
    }

    /// Create a parser with an explicit diagnostics sink
    pub fn with_diagnostics(
        path: impl Into<PathBuf>,
        format: F,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self> {
        Ok(Self {
            source: LineSource::open(path)?,
            format,
            diagnostics,
        })
    }

    pub fn path(&self) -> &Path {
        self.source.path()
    }

    /// Parse the whole file
    ///
    /// Only an I/O failure reading the file is an error; every problem with
    /// individual lines is returned in the outcome's issue list.
    pub fn parse(&self) -> Result<ParseOutcome<F::Record>> {
        info!("Parsing {} file: {}", F::NAME, self.path().display());

        let text = self.source.read()?;
        let source_name = self.path().display().to_string();
        let mut outcome = ParseOutcome::new();
        outcome.stats.files_read = 1;

        for line in text.data_lines() {
            outcome.stats.lines_read += 1;

            let tokens: Vec<&str> = line.text.split_whitespace().collect();
            let mut ctx = FieldContext::new(line.number);
            let result = self.parse_line(&tokens, line.text, &mut ctx);

            for issue in ctx.into_issues() {
                self.diagnostics.report(&source_name, &issue);
                outcome.issues.push(issue);
            }

            match result {
                Ok(record) => {
                    outcome.records.push(record);
                    outcome.stats.records_parsed += 1;
                }
                Err(issue) => {
                    outcome.stats.records_skipped += 1;
                    debug!("Skipped line {}: {}", line.number, issue.message);
                    self.diagnostics.report(&source_name, &issue);
                    outcome.issues.push(issue);
                }
            }
        }

        if outcome.records.is_empty() {
            warn!("No {} records parsed from {}", F::NAME, source_name);
        } else {
            info!(
                "Parsed {} {} records ({} skipped)",
                outcome.stats.records_parsed,
                F::NAME,
                outcome.stats.records_skipped
            );
        }

        Ok(outcome)
    }

    fn parse_line(
        &self,
        tokens: &[&str],
        text: &str,
        ctx: &mut FieldContext,
    ) -> std::result::Result<F::Record, ParseIssue> {
        if tokens.len() < F::MIN_TOKENS {
            return Err(ctx.reject(
                IssueKind::MissingTokens,
                format!(
                    "{} line has {} tokens, expected at least {}: {}",
                    F::NAME,
                    tokens.len(),
                    F::MIN_TOKENS,
                    text
                ),
            ));
        }
        self.format.parse_tokens(tokens, ctx)
    }
}
