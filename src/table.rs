/*!
 * Tabular input model and the delimited-file reader.
 *
 * A `Table` is an ordered list of rows of optional string cells, addressed by
 * column name. Empty cells are null. The analysis never mutates a table; it
 * derives records from it.
 */

use std::path::Path;

use encoding_rs::WINDOWS_1252;
use log::{debug, warn};

use crate::errors::TableError;

/// An ordered sequence of named-field rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table; short rows are padded with nulls, long rows truncated
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = rows.into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Build a table from string literals, treating empty strings as null
    pub fn from_strings(columns: &[&str], rows: &[&[&str]]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows.iter()
            .map(|row| row.iter().map(|cell| non_empty(cell)).collect())
            .collect();

        Self::new(columns, rows)
    }

    /// Column names in declared order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Non-null values of one column, in row order
    pub fn column_values(&self, name: &str) -> impl Iterator<Item = &str> {
        let index = self.column_index(name);
        self.rows.iter()
            .filter_map(move |row| index.and_then(|i| row[i].as_deref()))
    }
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Reads delimited text files into a `Table`
pub struct TableReader {
    delimiter: u8,
}

impl Default for TableReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another field delimiter, e.g. `b';'`
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse a file from disk
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Table, TableError> {
        let bytes = std::fs::read(path.as_ref())?;
        debug!("Read {} bytes from {:?}", bytes.len(), path.as_ref());
        self.read_bytes(&bytes)
    }

    /// Decode (UTF-8, falling back to Latin-1) and parse raw bytes
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Table, TableError> {
        let text = decode_text(bytes);
        self.read_str(&text)
    }

    /// Parse already-decoded text
    pub fn read_str(&self, text: &str) -> Result<Table, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader.headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if columns.is_empty() || columns.iter().all(|c| c.trim().is_empty()) {
            return Err(TableError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(non_empty).collect());
        }

        Ok(Table::new(columns, rows))
    }
}

/// Decode bytes as UTF-8, or as Windows-1252 when they are not valid UTF-8
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            warn!("Input is not valid UTF-8, decoding as Latin-1");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}
