//! SQL script writer
//!
//! Lays a script out as header, table definitions, batched data and
//! footer. Tables are always visited in precedence order.

use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::format::format_row;
use crate::constants::{DEFAULT_BATCH_SIZE, SQL_BANNER_RULE};
use crate::error::{NavdataError, Result};
use crate::models::{Datasets, Statistics, TableDataset, TableName};
use crate::schema::{BuiltinSchema, SchemaSource};

/// Serializes parsed datasets into a MySQL script
#[derive(Clone)]
pub struct SqlWriter {
    batch_size: usize,
    schema: Arc<dyn SchemaSource>,
}

impl std::fmt::Debug for SqlWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlWriter")
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl Default for SqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter {
    /// Writer using the built-in table definitions and default batch size
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            schema: Arc::new(BuiltinSchema),
        }
    }

    /// Set the number of rows per INSERT statement
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(NavdataError::configuration(
                "batch size must be at least 1",
            ));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Take table definitions from another source
    pub fn with_schema(mut self, schema: Arc<dyn SchemaSource>) -> Self {
        self.schema = schema;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Record counts per table plus their total
    pub fn statistics(&self, datasets: &Datasets) -> Statistics {
        Statistics::from_datasets(datasets)
    }

    /// Write the complete script for every dataset to `path`
    pub fn write_script(&self, path: &Path, datasets: &Datasets) -> Result<()> {
        let mut out = create_output(path)?;
        self.render_script(&mut out, datasets)?;
        out.flush()?;
        info!("SQL script written: {}", path.display());
        Ok(())
    }

    /// Write a script holding one table's definition and data
    pub fn write_table_script(&self, path: &Path, dataset: &TableDataset) -> Result<()> {
        let mut out = create_output(path)?;
        self.write_header(&mut out)?;
        if let Some(ddl) = self.schema.ddl(dataset.table()) {
            writeln!(out, "-- {} table", upper(dataset.table()))?;
            writeln!(out, "{}", ddl)?;
        }
        self.write_table_data(&mut out, dataset)?;
        self.write_footer(&mut out)?;
        out.flush()?;
        info!(
            "Table script for {} written: {}",
            dataset.table(),
            path.display()
        );
        Ok(())
    }

    /// Render the complete script into any writer
    pub fn render_script<W: Write>(&self, out: &mut W, datasets: &Datasets) -> Result<()> {
        self.write_header(out)?;
        self.write_schema(out)?;
        self.write_data(out, datasets)?;
        self.write_footer(out)?;
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", SQL_BANNER_RULE)?;
        writeln!(out, "-- Navigation data SQL script")?;
        writeln!(
            out,
            "-- Generated: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "{}", SQL_BANNER_RULE)?;
        writeln!(out)?;
        writeln!(out, "-- Character set and foreign key checks")?;
        writeln!(out, "SET NAMES utf8mb4;")?;
        writeln!(out, "SET FOREIGN_KEY_CHECKS = 0;")?;
        writeln!(out)?;
        Ok(())
    }

    fn write_schema<W: Write>(&self, out: &mut W) -> Result<()> {
        banner(out, "Table definitions")?;
        for table in TableName::ALL {
            match self.schema.ddl(table) {
                Some(ddl) => {
                    writeln!(out, "-- {} table", upper(table))?;
                    writeln!(out, "{}", ddl)?;
                }
                None => debug!("No table definition for {}", table),
            }
        }
        Ok(())
    }

    fn write_data<W: Write>(&self, out: &mut W, datasets: &Datasets) -> Result<()> {
        banner(out, "Data")?;
        // BTreeMap iteration follows TableName order
        for dataset in datasets.values() {
            self.write_table_data(out, dataset)?;
        }
        Ok(())
    }

    fn write_table_data<W: Write>(&self, out: &mut W, dataset: &TableDataset) -> Result<()> {
        if dataset.is_empty() {
            return Ok(());
        }

        writeln!(
            out,
            "-- {} data ({} records)",
            upper(dataset.table()),
            dataset.len()
        )?;
        let columns = dataset.columns().join(", ");

        for batch in dataset.rows().chunks(self.batch_size) {
            writeln!(out, "INSERT INTO {} ({}) VALUES", dataset.table(), columns)?;
            let tuples: Vec<String> = batch.iter().map(|row| format_row(row)).collect();
            write!(out, "{}", tuples.join(",\n"))?;
            writeln!(out, ";")?;
            writeln!(out)?;
        }

        info!(
            "Wrote {} data: {} records",
            dataset.table(),
            dataset.len()
        );
        Ok(())
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> Result<()> {
        banner(out, "End of data")?;
        writeln!(out, "SET FOREIGN_KEY_CHECKS = 1;")?;
        Ok(())
    }
}

/// Path of the per-table script next to the main script: `<stem>_<table>.sql`
pub fn table_script_path(output_file: &Path, table: TableName) -> PathBuf {
    let stem = output_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("navdata");
    output_file.with_file_name(format!("{}_{}.sql", stem, table))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

fn banner<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", SQL_BANNER_RULE)?;
    writeln!(out, "-- {}", title)?;
    writeln!(out, "{}", SQL_BANNER_RULE)?;
    writeln!(out)?;
    Ok(())
}

fn upper(table: TableName) -> String {
    table.as_str().to_ascii_uppercase()
}
