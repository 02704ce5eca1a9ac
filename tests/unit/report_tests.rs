/*!
 * Tests for the text report and CSV export
 */

use anyhow::Result;
use bibscan::analysis;
use bibscan::report::{export_all, export_duplicates, render_report};
use bibscan::table::Table;
use crate::common;

fn listing_with_duplicates() -> analysis::AnalysisResult {
    let table = Table::from_strings(
        &["Title", "Author"],
        &[
            &["Deep Learning", "Smith"],
            &["Deep Learning", "Smith"],
            &["Shallow Learning", "Jones"],
        ],
    );
    analysis::analyze(&table).unwrap()
}

#[test]
fn test_render_report_withDuplicates_shouldListThemWithRate() {
    let report = render_report(&listing_with_duplicates());

    assert!(report.contains("• Records analyzed: 3"));
    assert!(report.contains("• Duplicates found: 2"));
    assert!(report.contains("• Duplication rate: 66.7%"));
    assert!(report.contains("DUPLICATE RECORDS"));
    assert!(report.contains("   1. Deep Learning — Smith"));
    assert!(report.contains("   3. Shallow Learning — Jones"));
    assert!(report.contains("Total duplicates: 2 records"));
}

#[test]
fn test_render_report_withoutDuplicates_shouldSaySo() {
    let table = Table::from_strings(&["Title"], &[&["Deep Learning Survey"], &["Shallow Learning Survey"]]);
    let report = render_report(&analysis::analyze(&table).unwrap());

    assert!(report.contains("NO DUPLICATES FOUND"));
    assert!(!report.contains("Duplication rate"));
    assert!(!report.contains("Author column"));
    assert!(report.contains("Total listed: 2 records"));
}

#[test]
fn test_export_all_shouldWriteBomRowsAndSummary() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("all.csv");

    export_all(&listing_with_duplicates().all_entries, &path)?;

    let bytes = std::fs::read(&path)?;
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

    let text = String::from_utf8(bytes[3..].to_vec())?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Number,Full Title");
    assert_eq!(lines[1], "1,Deep Learning — Smith");
    assert_eq!(lines[3], "3,Shallow Learning — Jones");
    assert_eq!(lines[5], "SUMMARY:,Total of 3 records");
    Ok(())
}

#[test]
fn test_export_duplicates_intoMissingDirectory_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("exports").join("duplicates.csv");

    export_duplicates(&listing_with_duplicates().duplicate_entries, &path)?;

    let text = std::fs::read_to_string(&path)?;
    assert!(text.contains("Number,Duplicate Record"));
    assert!(text.contains("SUMMARY:,Total of 2 duplicates"));
    Ok(())
}

#[test]
fn test_export_withNoEntries_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("empty.csv");

    assert!(export_all(&[], &path).is_err());
    assert!(export_duplicates(&[], &path).is_err());
    assert!(!path.exists());
    Ok(())
}
