//! Roster file parsing.
//!
//! A roster file is plain text, one record per line, no header row:
//!
//! ```text
//! Harry|Potter|Gryffindor|McGonagall|Fall 2015
//! Nearly Headless|Nick|||G
//! ```
//!
//! Lines may end in `\n`, `\r\n` or a lone `\r`, mixed freely; a single
//! terminator after the last line is optional. There is no escaping: a literal
//! `|` inside a field is not representable. A line that does not carry exactly
//! five fields, blank lines included, fails the whole load.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RosterError;
use crate::Result;

use super::record::Record;

/// Field delimiter.
pub const DELIMITER: char = '|';

/// Number of fields every line must carry.
pub const FIELD_COUNT: usize = 5;

/// An immutable, ordered sequence of parsed records.
///
/// Load once and run as many queries as needed against it; queries only
/// borrow the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Roster {
    /// File the roster was loaded from, if any
    pub source: Option<PathBuf>,
    /// Records in file order
    pub records: Vec<Record>,
}

impl Roster {
    /// Read and parse a roster file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rosterlib::Roster;
    /// use std::fs;
    /// use tempfile::tempdir;
    ///
    /// let dir = tempdir().unwrap();
    /// let path = dir.path().join("cohort_data.txt");
    /// fs::write(&path, "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n").unwrap();
    ///
    /// let roster = Roster::load(&path).unwrap();
    /// assert_eq!(roster.len(), 1);
    /// assert_eq!(roster.records[0].full_name(), "Harry Potter");
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RosterError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let records = parse_str(&contents)?;

        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            "Loaded roster"
        );

        Ok(Self {
            source: Some(path.to_path_buf()),
            records,
        })
    }

    /// Parse roster text that did not come from a file.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            source: None,
            records: parse_str(input)?,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parse roster text into records, in input order.
pub fn parse_str(input: &str) -> Result<Vec<Record>> {
    split_lines(input)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Split on `\r\n`, `\n` and lone `\r`.
///
/// One trailing terminator does not produce an empty last line; any other
/// empty line is kept so the parser can reject it.
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input
        .split("\r\n")
        .flat_map(|chunk| chunk.split(&['\n', '\r'][..]))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Parse a single line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Record> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RosterError::MalformedRecord {
            line: line_no,
            fields: fields.len(),
        });
    }

    Ok(Record::new(
        fields[0], fields[1], fields[2], fields[3], fields[4],
    ))
}
