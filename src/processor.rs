//! Conversion orchestration.
//!
//! [`NavdataConverter`] maps every selected table to its parser, runs the
//! parsers (concurrently on the blocking pool unless configured otherwise),
//! gathers the datasets in table order and hands them to the SQL writer.

use crate::config::NavdataConfig;
use crate::error::{NavdataError, Result};
use crate::models::{Datasets, Statistics, TableDataset, TableName, TableRecord};
use crate::parser::airport::AirportFormat;
use crate::parser::airway::AirwayFormat;
use crate::parser::holding::HoldingFormat;
use crate::parser::mora::MoraFormat;
use crate::parser::msa::MsaFormat;
use crate::parser::navaid::NavaidFormat;
use crate::parser::waypoint::WaypointFormat;
use crate::parser::{
    Diagnostics, FormatParser, IssueKind, ParseIssue, ParseOutcome, ParseStats, ProcedureWalker,
    RecordFormat, Severity, TracingDiagnostics,
};
use crate::sql::{SqlWriter, table_script_path};

use colored::*;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task;
use tracing::{debug, info};

/// One table's parse result
#[derive(Debug, Clone)]
pub struct TableOutcome {
    pub table: TableName,
    pub dataset: TableDataset,
    pub stats: ParseStats,
    pub issues: Vec<ParseIssue>,
}

impl TableOutcome {
    fn from_outcome<R: TableRecord>(outcome: ParseOutcome<R>) -> Result<Self> {
        Ok(Self {
            table: R::TABLE,
            dataset: TableDataset::from_records(&outcome.records)?,
            stats: outcome.stats,
            issues: outcome.issues,
        })
    }

    /// Empty result for a table whose source could not be used
    fn failed(table: TableName, issue: ParseIssue) -> Self {
        Self {
            table,
            dataset: TableDataset::new(table),
            stats: ParseStats {
                files_failed: 1,
                ..ParseStats::default()
            },
            issues: vec![issue],
        }
    }
}

/// What a conversion produced
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    /// Record counts per table plus their total
    pub statistics: Statistics,
    pub parse_stats: BTreeMap<TableName, ParseStats>,
    pub field_issues: usize,
    pub record_issues: usize,
    pub file_issues: usize,
    /// Main script first, then any per-table scripts
    pub output_files: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl ConversionSummary {
    /// Print a colored summary to stdout
    pub fn print(&self) {
        println!("\n{}", "Conversion Summary".bright_green().bold());
        for (table, count) in &self.statistics.per_table {
            println!(
                "  {:<22} {}",
                format!("{}:", table).bright_cyan(),
                count.to_string().bright_white()
            );
        }
        println!(
            "  {:<22} {}",
            "Total:".bright_cyan(),
            self.statistics.total.to_string().bright_white().bold()
        );

        if self.field_issues + self.record_issues + self.file_issues > 0 {
            println!(
                "  {} {} field, {} record, {} file",
                "Issues:".bright_yellow(),
                self.field_issues.to_string().yellow(),
                self.record_issues.to_string().yellow(),
                self.file_issues.to_string().bright_red().bold()
            );
        }
        for path in &self.output_files {
            println!("  {} {}", "Wrote:".bright_cyan(), path.display());
        }
        println!(
            "  {} {:.2}s",
            "Time elapsed:".bright_cyan(),
            self.elapsed.as_secs_f64()
        );
    }
}

/// Converts navigation data source files into a SQL script
#[derive(Debug)]
pub struct NavdataConverter {
    config: NavdataConfig,
    tables: Vec<TableName>,
    diagnostics: Arc<dyn Diagnostics>,
    show_progress: bool,
}

impl NavdataConverter {
    /// Create a converter for every table; the configuration is validated
    pub fn new(config: NavdataConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tables: TableName::ALL.to_vec(),
            diagnostics: Arc::new(TracingDiagnostics),
            show_progress: false,
        })
    }

    /// Convert only these tables; output order stays fixed
    pub fn with_tables(mut self, tables: Vec<TableName>) -> Self {
        self.tables = tables;
        self.tables.sort();
        self.tables.dedup();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Show a progress bar over tables while parsing
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &NavdataConfig {
        &self.config
    }

    /// Parse every selected table; results are in table order
    pub async fn parse_tables(&self) -> Result<Vec<TableOutcome>> {
        let pb = self.progress_bar();

        let mut outcomes = if self.config.performance.parallel {
            self.parse_concurrently(&pb).await?
        } else {
            self.parse_sequentially(&pb)?
        };
        pb.finish_with_message("Parsing complete");

        outcomes.sort_by_key(|outcome| outcome.table);
        Ok(outcomes)
    }

    /// Parse, write the script(s) and summarize
    pub async fn convert(&self) -> Result<ConversionSummary> {
        let start = Instant::now();
        info!(
            "Converting {} tables from {}",
            self.tables.len(),
            self.config.source.source_directory.display()
        );

        let outcomes = self.parse_tables().await?;

        let mut datasets = Datasets::new();
        let mut parse_stats = BTreeMap::new();
        let (mut field_issues, mut record_issues, mut file_issues) = (0, 0, 0);
        for outcome in outcomes {
            for issue in &outcome.issues {
                match issue.severity {
                    Severity::Field => field_issues += 1,
                    Severity::Record => record_issues += 1,
                    Severity::File => file_issues += 1,
                }
            }
            debug!(
                "{}: {} records, {:.1}% of candidate lines parsed",
                outcome.table,
                outcome.stats.records_parsed,
                outcome.stats.success_rate()
            );
            parse_stats.insert(outcome.table, outcome.stats);
            datasets.insert(outcome.table, outcome.dataset);
        }

        let writer = SqlWriter::new().with_batch_size(self.config.output.batch_size)?;
        let statistics = writer.statistics(&datasets);
        let output_file = self.config.output.output_file.clone();
        let separate_files = self.config.output.separate_files;

        let output_files = task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
            writer.write_script(&output_file, &datasets)?;
            let mut written = vec![output_file.clone()];
            if separate_files {
                for dataset in datasets.values().filter(|d| !d.is_empty()) {
                    let path = table_script_path(&output_file, dataset.table());
                    writer.write_table_script(&path, dataset)?;
                    written.push(path);
                }
            }
            Ok(written)
        })
        .await
        .map_err(|e| NavdataError::processing(format!("SQL writer task failed: {}", e)))??;

        let elapsed = start.elapsed();
        info!(
            "Converted {} records in {:.2}s",
            statistics.total,
            elapsed.as_secs_f64()
        );

        Ok(ConversionSummary {
            statistics,
            parse_stats,
            field_issues,
            record_issues,
            file_issues,
            output_files,
            elapsed,
        })
    }

    fn parse_sequentially(&self, pb: &ProgressBar) -> Result<Vec<TableOutcome>> {
        let mut outcomes = Vec::with_capacity(self.tables.len());
        for &table in &self.tables {
            pb.set_message(format!("Parsing {}", table));
            outcomes.push(parse_table(
                &self.config,
                table,
                Arc::clone(&self.diagnostics),
            )?);
            pb.inc(1);
        }
        Ok(outcomes)
    }

    async fn parse_concurrently(&self, pb: &ProgressBar) -> Result<Vec<TableOutcome>> {
        let semaphore = Arc::new(Semaphore::new(self.config.performance.workers));
        debug!(
            "Parsing {} tables with {} workers",
            self.tables.len(),
            self.config.performance.workers
        );

        let tasks = self.tables.iter().map(|&table| {
            let semaphore = Arc::clone(&semaphore);
            let config = self.config.clone();
            let diagnostics = Arc::clone(&self.diagnostics);
            let pb = pb.clone();
            async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| NavdataError::processing(e.to_string()))?;
                pb.set_message(format!("Parsing {}", table));

                let outcome = task::spawn_blocking(move || parse_table(&config, table, diagnostics))
                    .await
                    .map_err(|e| {
                        NavdataError::processing(format!("parser task for {} failed: {}", table, e))
                    })??;
                pb.inc(1);
                Ok::<_, NavdataError>(outcome)
            }
        });

        join_all(tasks).await.into_iter().collect()
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.tables.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

/// Parse one table from its configured source
///
/// A missing or unreadable source yields an empty dataset and a file-level
/// issue; only a failure to build the dataset itself is an error.
pub fn parse_table(
    config: &NavdataConfig,
    table: TableName,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<TableOutcome> {
    match table {
        TableName::Airports => parse_file(config, AirportFormat, diagnostics),
        TableName::Airways => parse_file(config, AirwayFormat, diagnostics),
        TableName::Waypoints => parse_file(config, WaypointFormat, diagnostics),
        TableName::Holdings => parse_file(config, HoldingFormat, diagnostics),
        TableName::Navaids => parse_file(config, NavaidFormat, diagnostics),
        TableName::Mora => parse_file(config, MoraFormat, diagnostics),
        TableName::Msa => parse_file(config, MsaFormat, diagnostics),
        TableName::TerminalProcedures => parse_procedures(config, diagnostics),
    }
}

fn parse_file<F: RecordFormat>(
    config: &NavdataConfig,
    format: F,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<TableOutcome> {
    let table = <F::Record as TableRecord>::TABLE;
    let Some(path) = config.source_file(table) else {
        return Err(NavdataError::configuration(format!(
            "no source file configured for {}",
            table
        )));
    };

    let result = FormatParser::with_diagnostics(&path, format, Arc::clone(&diagnostics))
        .and_then(|parser| parser.parse());
    match result {
        Ok(outcome) => TableOutcome::from_outcome(outcome),
        Err(e) => Ok(source_failure(table, &path, e, diagnostics.as_ref())),
    }
}

fn parse_procedures(
    config: &NavdataConfig,
    diagnostics: Arc<dyn Diagnostics>,
) -> Result<TableOutcome> {
    let table = TableName::TerminalProcedures;
    if !config.parsing.parse_procedures {
        info!("Procedure parsing disabled, skipping {}", table);
        return Ok(TableOutcome {
            table,
            dataset: TableDataset::new(table),
            stats: ParseStats::default(),
            issues: Vec::new(),
        });
    }

    let directory = config.procedure_directory();
    let result = ProcedureWalker::with_diagnostics(&directory, Arc::clone(&diagnostics))
        .map(|walker| {
            walker
                .with_extension(config.source.procedure_extension.as_str())
                .with_airport_limit(config.parsing.procedure_airport_limit)
        })
        .and_then(|walker| walker.parse_all());
    match result {
        Ok(outcome) => TableOutcome::from_outcome(outcome),
        Err(e) => Ok(source_failure(table, &directory, e, diagnostics.as_ref())),
    }
}

fn source_failure(
    table: TableName,
    path: &std::path::Path,
    error: NavdataError,
    diagnostics: &dyn Diagnostics,
) -> TableOutcome {
    let kind = match error {
        NavdataError::SourceNotFound { .. } => IssueKind::MissingSource,
        _ => IssueKind::UnreadableFile,
    };
    let issue = ParseIssue::file(kind, format!("{}: {}", path.display(), error));
    diagnostics.report(table.as_str(), &issue);
    TableOutcome::failed(table, issue)
}
