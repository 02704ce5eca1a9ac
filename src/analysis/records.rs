/*!
 * Records derived from table rows and their canonical comparison keys.
 */

use std::fmt;

use crate::table::Table;

/// Separator between title and author in a display entry
pub const DISPLAY_SEPARATOR: &str = " — ";

/// Placeholder for a missing author value
pub const AUTHOR_NOT_INFORMED: &str = "Author not informed";

/// Separator between title and author inside a canonical key
const KEY_SEPARATOR: &str = "|";

/// Author information carried by a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorField {
    /// No author column was selected for the table
    NotTracked,
    /// The author column exists but this row has no value
    Missing,
    /// Trimmed author value
    Present(String),
}

/// Normalized key used only for equality grouping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A title with optional author, derived from one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    author: AuthorField,
}

impl Record {
    /// Build a record, trimming both fields. Returns `None` for a blank title.
    pub fn new(title: &str, author: AuthorField) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let author = match author {
            AuthorField::Present(value) => {
                let value = value.trim();
                if value.is_empty() {
                    AuthorField::Missing
                } else {
                    AuthorField::Present(value.to_string())
                }
            }
            other => other,
        };

        Some(Self { title: title.to_string(), author })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &AuthorField {
        &self.author
    }

    /// Title, plus the author (or placeholder) when an author column is used
    pub fn canonical_key(&self) -> CanonicalKey {
        match &self.author {
            AuthorField::NotTracked => CanonicalKey(self.title.clone()),
            AuthorField::Missing => {
                CanonicalKey(format!("{}{}{}", self.title, KEY_SEPARATOR, AUTHOR_NOT_INFORMED))
            }
            AuthorField::Present(author) => {
                CanonicalKey(format!("{}{}{}", self.title, KEY_SEPARATOR, author))
            }
        }
    }

    /// Listing rendering: the bare title unless an author value is present
    pub fn display(&self) -> String {
        match &self.author {
            AuthorField::Present(author) => format!("{}{}{}", self.title, DISPLAY_SEPARATOR, author),
            _ => self.title.clone(),
        }
    }

    /// Duplicate-list rendering: a missing author shows the placeholder
    pub fn duplicate_display(&self) -> String {
        match &self.author {
            AuthorField::Missing => format!("{}{}{}", self.title, DISPLAY_SEPARATOR, AUTHOR_NOT_INFORMED),
            _ => self.display(),
        }
    }
}

/// Derive records from a table, dropping rows whose title is null or blank.
///
/// The table is not modified. Unknown column names yield no records
/// (title) or untracked authors (author).
pub fn build_records(table: &Table, title_column: &str, author_column: Option<&str>) -> Vec<Record> {
    let Some(title_index) = table.column_index(title_column) else {
        return Vec::new();
    };
    let author_index = author_column.and_then(|name| table.column_index(name));

    table.rows()
        .filter_map(|row| {
            let title = row[title_index].as_deref()?;
            let author = match author_index {
                None => AuthorField::NotTracked,
                Some(i) => match &row[i] {
                    Some(value) => AuthorField::Present(value.clone()),
                    None => AuthorField::Missing,
                },
            };
            Record::new(title, author)
        })
        .collect()
}
