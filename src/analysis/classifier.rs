/*!
 * Column classification.
 *
 * Decides whether a table looks like a list of academic records and which
 * columns carry titles and authors, using column-name keywords (English and
 * Portuguese) and the length of sample title values.
 */

use crate::table::Table;

/// Keywords whose presence in any column name marks academic content
const ACADEMIC_KEYWORDS: &[&str] = &[
    "title", "titulo", "título", "article", "artigo", "book", "livro",
    "paper", "journal", "author", "autor", "publication", "publicação",
    "doi", "isbn", "volume", "issue", "year", "ano", "name", "nome",
];

/// Keywords identifying a title column
const TITLE_KEYWORDS: &[&str] = &["title", "titulo", "título", "nome", "name"];

/// Keywords identifying an author column
const AUTHOR_KEYWORDS: &[&str] = &["author", "autor", "autores", "authors"];

/// Number of non-null values sampled from a title candidate
const SAMPLE_SIZE: usize = 10;

/// Minimum mean sample length (in characters) for a real title column
const MIN_MEAN_TITLE_LENGTH: f64 = 10.0;

/// Role a column plays in the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Title,
    Author,
    Unclassified,
}

/// Outcome of classifying a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Whether the table looks like academic input
    pub is_valid: bool,
    /// First column named like a title, if any
    pub title_column: Option<String>,
    /// First column named like an author, if any
    pub author_column: Option<String>,
}

impl Classification {
    /// Role assigned to a column in this classification
    pub fn role_of(&self, column: &str) -> ColumnRole {
        if self.title_column.as_deref() == Some(column) {
            ColumnRole::Title
        } else if self.author_column.as_deref() == Some(column) {
            ColumnRole::Author
        } else {
            ColumnRole::Unclassified
        }
    }
}

/// Stateless column classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnClassifier;

impl ColumnClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a table's columns. Pure and deterministic.
    pub fn classify(&self, table: &Table) -> Classification {
        Classification {
            is_valid: self.is_valid_academic_content(table),
            title_column: find_column(table, TITLE_KEYWORDS),
            author_column: find_column(table, AUTHOR_KEYWORDS),
        }
    }

    /// Keyword signal in column names plus at least one title candidate
    /// whose sampled values are long enough to be titles
    pub fn is_valid_academic_content(&self, table: &Table) -> bool {
        if table.is_empty() {
            return false;
        }

        let columns_text = table.columns().join(" ").to_lowercase();
        if !contains_any(&columns_text, ACADEMIC_KEYWORDS) {
            return false;
        }

        table.columns().iter()
            .filter(|col| contains_any(&col.to_lowercase(), TITLE_KEYWORDS))
            .any(|col| {
                mean_sample_length(table, col)
                    .is_some_and(|mean| mean > MIN_MEAN_TITLE_LENGTH)
            })
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn find_column(table: &Table, keywords: &[&str]) -> Option<String> {
    table.columns().iter()
        .find(|col| contains_any(&col.trim().to_lowercase(), keywords))
        .cloned()
}

/// Mean character length of the first non-null values of a column
fn mean_sample_length(table: &Table, column: &str) -> Option<f64> {
    let lengths: Vec<usize> = table.column_values(column)
        .take(SAMPLE_SIZE)
        .map(|value| value.chars().count())
        .collect();

    if lengths.is_empty() {
        return None;
    }

    Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
}
