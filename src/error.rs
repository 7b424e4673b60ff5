//! Error handling for navigation data conversion.
//!
//! Only conditions that stop a whole operation live here. Problems with
//! individual lines or fields are reported as
//! [`ParseIssue`](crate::parser::ParseIssue) values instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavdataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source not found at path: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Unknown table name: {name}")]
    InvalidTable { name: String },

    #[error("Row shape mismatch for table {table}: expected {expected} values, found {found}")]
    RowShape {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Directory traversal error: {0}")]
    DirectoryWalk(#[from] walkdir::Error),

    #[error("Processing failed: {reason}")]
    Processing { reason: String },
}

impl NavdataError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing error
    pub fn processing(reason: impl Into<String>) -> Self {
        Self::Processing {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavdataError>;
