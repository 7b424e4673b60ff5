//! SQL script generation
//!
//! - [`format`] - literal rendering and string escaping
//! - [`writer`] - script layout, batching and per-table scripts

pub mod format;
pub mod writer;

#[cfg(test)]
mod tests;

pub use format::{escape_string, format_value};
pub use writer::{SqlWriter, table_script_path};
