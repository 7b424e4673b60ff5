//! Line acquisition for navigation data files
//!
//! Decodes a source file (UTF-8 first, Latin-1 when that fails) and yields
//! its candidate data lines: trimmed, non-empty, and free of comment,
//! version banner and end-of-file marker lines.

use crate::constants::{END_OF_FILE_MARKER, SKIP_LINE_PREFIXES, VERSION_BANNER};
use crate::error::{NavdataError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Text encoding a file was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Single-byte fallback used when the file is not valid UTF-8
    Latin1,
}

/// One trimmed line and its 1-based position in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Decoded contents of one source file
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    encoding: SourceEncoding,
}

impl SourceText {
    /// Read and decode a file
    ///
    /// Invalid UTF-8 anywhere in the file switches the whole file to
    /// Latin-1, so lines are never produced twice.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::decode(bytes, path))
    }

    fn decode(bytes: Vec<u8>, path: &Path) -> Self {
        match String::from_utf8(bytes) {
            Ok(mut text) => {
                if text.starts_with('\u{feff}') {
                    text.remove(0);
                }
                Self {
                    text,
                    encoding: SourceEncoding::Utf8,
                }
            }
            Err(err) => {
                warn!(
                    "UTF-8 decoding failed for {}, falling back to Latin-1",
                    path.display()
                );
                let text = err.into_bytes().into_iter().map(char::from).collect();
                Self {
                    text,
                    encoding: SourceEncoding::Latin1,
                }
            }
        }
    }

    pub fn encoding(&self) -> SourceEncoding {
        self.encoding
    }

    /// Every non-empty line, trimmed, without structural filtering
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn lines(&self) -> impl Iterator<Item = SourceLine<'_>> {
        physical_lines(&self.text)
            .enumerate()
            .map(|(index, line)| SourceLine {
                number: index + 1,
                text: line.trim(),
            })
            .filter(|line| !line.text.is_empty())
    }

    /// Lines that can carry a record
    pub fn data_lines(&self) -> impl Iterator<Item = SourceLine<'_>> {
        self.lines().filter(|line| is_data_line(line.text))
    }
}

fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(pos) => {
                let ending = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + ending..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

/// Whether a trimmed line can carry a record
pub fn is_data_line(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with(SKIP_LINE_PREFIXES)
        && !line.contains(VERSION_BANNER)
        && line != END_OF_FILE_MARKER
}

/// A navigation data file that can be read any number of times
#[derive(Debug, Clone)]
pub struct LineSource {
    path: PathBuf,
}

impl LineSource {
    /// Create a line source; the file must exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(NavdataError::SourceNotFound { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the file afresh; iterate the result with [`SourceText::data_lines`]
    pub fn read(&self) -> Result<SourceText> {
        let text = SourceText::read(&self.path)?;
        debug!("Read {} ({:?})", self.path.display(), text.encoding());
        Ok(text)
    }

    /// Number of candidate data lines in the file
    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.data_lines().count())
    }
}
