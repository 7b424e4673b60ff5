//! Directory walk over per-airport procedure files
//!
//! Every file with the procedure extension directly inside the directory
//! belongs to the airport named by its file stem. Files are taken in file
//! name order so the merged output is deterministic.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use walkdir::WalkDir;

use super::ProcedureParser;
use crate::constants::PROCEDURE_FILE_EXTENSION;
use crate::error::{NavdataError, Result};
use crate::models::ProcedureLeg;
use crate::parser::diagnostics::{Diagnostics, IssueKind, ParseIssue, TracingDiagnostics};
use crate::parser::stats::ParseOutcome;

/// One airport's procedure file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportFile {
    pub airport_icao: String,
    pub path: PathBuf,
}

/// Walks a procedure directory and merges every airport's legs
#[derive(Debug)]
pub struct ProcedureWalker {
    directory: PathBuf,
    extension: String,
    airport_limit: usize,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ProcedureWalker {
    /// Create a walker; the directory must exist
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        Self::with_diagnostics(directory, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(
        directory: impl Into<PathBuf>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(NavdataError::SourceNotFound { path: directory });
        }
        Ok(Self {
            directory,
            extension: PROCEDURE_FILE_EXTENSION.to_string(),
            airport_limit: 0,
            diagnostics,
        })
    }

    /// Match files with this extension instead of the default
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Stop after this many airport files; 0 means all of them
    pub fn with_airport_limit(mut self, limit: usize) -> Self {
        self.airport_limit = limit;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Airport files in file name order, honoring the airport limit
    pub fn airport_files(&self) -> Vec<AirportFile> {
        self.scan().0
    }

    /// Parse every airport file and concatenate the legs
    ///
    /// A directory entry or file that cannot be read is reported, counted
    /// as failed and skipped; the walk continues with the next airport.
    pub fn parse_all(&self) -> Result<ParseOutcome<ProcedureLeg>> {
        let (files, scan_issues) = self.scan();
        info!(
            "Parsing procedures for {} airports in {}",
            files.len(),
            self.directory.display()
        );

        let mut outcome = ParseOutcome::new();
        for issue in scan_issues {
            self.diagnostics.report(&self.directory.display().to_string(), &issue);
            outcome.issues.push(issue);
            outcome.stats.files_failed += 1;
        }

        let parser = ProcedureParser::new(Arc::clone(&self.diagnostics));

        for file in &files {
            match parser.parse_file(&file.path, &file.airport_icao) {
                Ok(airport_outcome) => {
                    info!(
                        "Parsed airport {}: {} legs",
                        file.airport_icao, airport_outcome.stats.records_parsed
                    );
                    outcome.merge(airport_outcome);
                }
                Err(e) => {
                    let issue = ParseIssue::file(
                        IssueKind::UnreadableFile,
                        format!("{}: {}", file.path.display(), e),
                    );
                    self.diagnostics.report(&file.airport_icao, &issue);
                    outcome.issues.push(issue);
                    outcome.stats.files_failed += 1;
                }
            }
        }

        info!(
            "Parsed {} procedure legs in total",
            outcome.stats.records_parsed
        );
        Ok(outcome)
    }

    fn scan(&self) -> (Vec<AirportFile>, Vec<ParseIssue>) {
        let mut files = Vec::new();
        let mut issues = Vec::new();

        for entry in WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    issues.push(ParseIssue::file(
                        IssueKind::UnreadableFile,
                        NavdataError::from(e).to_string(),
                    ));
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !self.has_procedure_extension(path) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping procedure file with non UTF-8 name: {}", path.display());
                continue;
            };
            files.push(AirportFile {
                airport_icao: stem.to_string(),
                path: path.to_path_buf(),
            });
            if self.airport_limit > 0 && files.len() >= self.airport_limit {
                break;
            }
        }

        (files, issues)
    }

    fn has_procedure_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}
