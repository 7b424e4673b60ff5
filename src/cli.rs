//! Command-line argument definitions for the navdata converter

use crate::config::NavdataConfig;
use crate::error::{NavdataError, Result};
use crate::models::TableName;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Convert navigation data text files into a MySQL script
#[derive(Debug, Clone, Parser)]
#[command(
    name = "navdata-sql",
    version,
    about = "Convert navigation data text files into a single MySQL import script",
    long_about = "Reads airport, airway, waypoint, holding, navaid, terrain grid, minimum \
                  sector altitude and per-airport instrument procedure files and writes one \
                  SQL script with table definitions and batched INSERT statements."
)]
pub struct Args {
    /// Directory holding the source data files
    #[arg(short = 's', long = "source", value_name = "DIR")]
    pub source_directory: Option<PathBuf>,

    /// Path of the SQL script to write
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Tables to convert (comma-separated list)
    #[arg(
        short = 't',
        long = "tables",
        value_name = "LIST",
        long_help = "Tables to convert as a comma-separated list.\n\
                     Available tables:\n  \
                     airports, waypoints, navaids, airways, holdings, mora, msa,\n  \
                     terminal_procedures\n\n\
                     If not specified, every table is converted."
    )]
    pub tables: Option<TableList>,

    /// Rows per INSERT statement
    #[arg(short = 'b', long = "batch-size", value_name = "ROWS")]
    pub batch_size: Option<usize>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Also write one script per table next to the main script
    #[arg(long = "separate-files")]
    pub separate_files: bool,

    /// Parse one table at a time
    #[arg(long = "sequential")]
    pub sequential: bool,

    /// Skip the instrument procedure directory
    #[arg(long = "no-procedures")]
    pub no_procedures: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Layer the command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, mut config: NavdataConfig) -> NavdataConfig {
        if let Some(dir) = &self.source_directory {
            config = config.with_source_directory(dir);
        }
        if let Some(output) = &self.output_file {
            config = config.with_output_file(output);
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }
        if self.separate_files {
            config = config.with_separate_files();
        }
        if self.sequential {
            config = config.sequential();
        }
        if self.no_procedures {
            config = config.without_procedures();
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        } else if self.quiet {
            config.logging.level = "warn".to_string();
        }
        config
    }

    /// Tables selected on the command line, or every table
    pub fn selected_tables(&self) -> Vec<TableName> {
        self.tables
            .as_ref()
            .map_or_else(|| TableName::ALL.to_vec(), |list| list.tables.clone())
    }
}

/// Wrapper for parsing comma-separated table lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableList {
    pub tables: Vec<TableName>,
}

impl FromStr for TableList {
    type Err = NavdataError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tables = Vec::new();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let table = name.parse::<TableName>().map_err(|_| {
                NavdataError::configuration(format!(
                    "Unknown table '{}'. Available tables: {}",
                    name,
                    TableName::ALL.map(|t| t.as_str()).join(", ")
                ))
            })?;
            if !tables.contains(&table) {
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(NavdataError::configuration("Table list cannot be empty"));
        }

        Ok(TableList { tables })
    }
}
