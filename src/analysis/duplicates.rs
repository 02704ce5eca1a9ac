/*!
 * Exact duplicate detection over records.
 */

use std::collections::HashMap;

use super::records::{CanonicalKey, Record};

/// Full listing and the entries that belong to a duplicate group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Every record rendered for the listing, in input order
    pub all_entries: Vec<String>,
    /// Every member of every group of size >= 2, in input order
    pub duplicate_entries: Vec<String>,
}

/// Group records by canonical key and collect members of repeated groups.
///
/// Grouping is exact string equality on the key. All members of a group are
/// reported, including the first occurrence.
pub fn detect_duplicates(records: &[Record]) -> DuplicateReport {
    let keys: Vec<CanonicalKey> = records.iter().map(Record::canonical_key).collect();

    let mut group_sizes: HashMap<&CanonicalKey, usize> = HashMap::with_capacity(keys.len());
    for key in &keys {
        *group_sizes.entry(key).or_insert(0) += 1;
    }

    let duplicate_entries = records.iter()
        .zip(&keys)
        .filter(|(_, key)| group_sizes.get(key).copied().unwrap_or(0) >= 2)
        .map(|(record, _)| record.duplicate_display())
        .collect();

    DuplicateReport {
        all_entries: records.iter().map(Record::display).collect(),
        duplicate_entries,
    }
}
