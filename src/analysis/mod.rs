/*!
 * Analysis of academic listings.
 *
 * - `classifier`: decides validity and picks title/author columns
 * - `records`: builds records and canonical keys from table rows
 * - `duplicates`: exact duplicate grouping
 *
 * `analyze` runs the three in sequence and either produces a complete
 * `AnalysisResult` or rejects the table.
 */

pub mod classifier;
pub mod duplicates;
pub mod records;

pub use self::classifier::{Classification, ColumnClassifier, ColumnRole};
pub use self::duplicates::{DuplicateReport, detect_duplicates};
pub use self::records::{AuthorField, CanonicalKey, Record, build_records};

use log::{debug, info};

use crate::errors::AnalysisError;
use crate::table::Table;

/// Result of one successful analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Rows with a non-blank title
    pub total_count: usize,
    /// Display entries for every counted row, in row order
    pub all_entries: Vec<String>,
    /// Display entries belonging to a duplicate group, in row order
    pub duplicate_entries: Vec<String>,
    /// Column used for titles
    pub title_column: String,
    /// Column used for authors, if one was found
    pub author_column: Option<String>,
}

impl AnalysisResult {
    /// Records outside any duplicate group
    pub fn unique_count(&self) -> usize {
        self.total_count.saturating_sub(self.duplicate_entries.len())
    }

    /// Share of records in a duplicate group, in percent
    pub fn duplication_rate(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.duplicate_entries.len() as f64 / self.total_count as f64 * 100.0
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_entries.is_empty()
    }
}

/// Classify, canonicalize and detect duplicates in a table
pub fn analyze(table: &Table) -> Result<AnalysisResult, AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyTable);
    }

    let classification = ColumnClassifier::new().classify(table);
    if !classification.is_valid {
        return Err(AnalysisError::NotAcademic);
    }

    let title_column = classification.title_column.ok_or_else(|| AnalysisError::NoTitleColumn {
        columns: table.columns().to_vec(),
    })?;
    let author_column = classification.author_column;

    debug!(
        "Using title column '{}' and author column {:?}",
        title_column, author_column
    );

    let records = build_records(table, &title_column, author_column.as_deref());
    let report = detect_duplicates(&records);

    info!(
        "Analyzed {} records, {} in duplicate groups",
        records.len(),
        report.duplicate_entries.len()
    );

    Ok(AnalysisResult {
        total_count: records.len(),
        all_entries: report.all_entries,
        duplicate_entries: report.duplicate_entries,
        title_column,
        author_column,
    })
}
