//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (an explicit path, else `<config dir>/navdata-sql/config.toml` when it
//! exists), then command-line overrides applied through the `with_*`
//! builders.

use crate::constants::{
    AIRPORT_FILE, AIRWAY_FILE, DEFAULT_BATCH_SIZE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_PROCEDURE_DIRECTORY, DEFAULT_SOURCE_DIRECTORY, HOLDING_FILE, MORA_FILE, MSA_FILE,
    NAVAID_FILE, PROCEDURE_FILE_EXTENSION, WAYPOINT_FILE,
};
use crate::error::{NavdataError, Result};
use crate::models::TableName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete converter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavdataConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub parsing: ParsingConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

/// Where the source files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub source_directory: PathBuf,

    /// Procedure directory, relative to the source directory
    pub procedure_directory: PathBuf,

    /// Source file name per table name; missing entries use the defaults
    pub files: BTreeMap<String, String>,

    /// Extension of per-airport procedure files
    pub procedure_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let files = TableName::ALL
            .into_iter()
            .filter_map(|table| {
                default_file_name(table).map(|name| (table.to_string(), name.to_string()))
            })
            .collect();

        Self {
            source_directory: PathBuf::from(DEFAULT_SOURCE_DIRECTORY),
            procedure_directory: PathBuf::from(DEFAULT_PROCEDURE_DIRECTORY),
            files,
            procedure_extension: PROCEDURE_FILE_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_file: PathBuf,

    /// Rows per INSERT statement
    pub batch_size: usize,

    /// Also write one `<stem>_<table>.sql` script per table
    pub separate_files: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            batch_size: DEFAULT_BATCH_SIZE,
            separate_files: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub parse_procedures: bool,

    /// Maximum number of airport procedure files (0 = all)
    pub procedure_airport_limit: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            parse_procedures: true,
            procedure_airport_limit: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Parse tables concurrently
    pub parallel: bool,

    /// Maximum tables parsed at once
    pub workers: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            workers: num_cpus::get(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,

    /// Log file mirrored alongside stderr; empty disables it
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Built-in source file name for a table; procedures come from a directory
pub fn default_file_name(table: TableName) -> Option<&'static str> {
    match table {
        TableName::Airports => Some(AIRPORT_FILE),
        TableName::Airways => Some(AIRWAY_FILE),
        TableName::Waypoints => Some(WAYPOINT_FILE),
        TableName::Holdings => Some(HOLDING_FILE),
        TableName::Navaids => Some(NAVAID_FILE),
        TableName::Mora => Some(MORA_FILE),
        TableName::Msa => Some(MSA_FILE),
        TableName::TerminalProcedures => None,
    }
}

impl NavdataConfig {
    /// Load configuration from an explicit file, else the user config file
    /// when one exists, else the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::user_config_path().filter(|p| p.is_file()) {
            Some(user_path) => Self::from_file(&user_path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NavdataError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// User configuration file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navdata-sql").join("config.toml"))
    }

    /// Reject settings the converter cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.output.batch_size == 0 {
            return Err(NavdataError::configuration(
                "output.batch_size must be at least 1",
            ));
        }
        if self.performance.workers == 0 {
            return Err(NavdataError::configuration(
                "performance.workers must be at least 1",
            ));
        }
        for name in self.source.files.keys() {
            name.parse::<TableName>()?;
        }
        Ok(())
    }

    /// Full path of a table's source file; `None` for procedures
    pub fn source_file(&self, table: TableName) -> Option<PathBuf> {
        let name = self
            .source
            .files
            .get(table.as_str())
            .map(String::as_str)
            .or_else(|| default_file_name(table))?;
        Some(self.source.source_directory.join(name))
    }

    /// Full path of the per-airport procedure directory
    pub fn procedure_directory(&self) -> PathBuf {
        self.source
            .source_directory
            .join(&self.source.procedure_directory)
    }

    /// Set the source directory
    pub fn with_source_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.source.source_directory = directory.into();
        self
    }

    /// Set the output script path
    pub fn with_output_file(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output.output_file = output_file.into();
        self
    }

    /// Set rows per INSERT statement
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.output.batch_size = batch_size;
        self
    }

    /// Also write per-table scripts
    pub fn with_separate_files(mut self) -> Self {
        self.output.separate_files = true;
        self
    }

    /// Set the number of concurrent table parsers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.performance.workers = workers;
        self
    }

    /// Parse one table at a time
    pub fn sequential(mut self) -> Self {
        self.performance.parallel = false;
        self
    }

    /// Skip the procedure directory
    pub fn without_procedures(mut self) -> Self {
        self.parsing.parse_procedures = false;
        self
    }

    /// Limit the number of airport procedure files
    pub fn with_procedure_airport_limit(mut self, limit: usize) -> Self {
        self.parsing.procedure_airport_limit = limit;
        self
    }
}
