/*!
 * Text report and CSV export of an analysis.
 */

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::analysis::AnalysisResult;

const HEAVY_RULE_WIDTH: usize = 70;
const LIGHT_RULE_WIDTH: usize = 40;

/// Render the analysis as a human-readable report
pub fn render_report(result: &AnalysisResult) -> String {
    let heavy = "═".repeat(HEAVY_RULE_WIDTH);
    let light = "─".repeat(LIGHT_RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\nACADEMIC LISTING ANALYSIS\n{}\n\n", heavy, heavy));

    out.push_str(&format!("SUMMARY\n{}\n", light));
    out.push_str(&format!("• Records analyzed: {}\n", result.total_count));
    out.push_str(&format!("• Unique records: {}\n", result.unique_count()));
    out.push_str(&format!("• Duplicates found: {}\n", result.duplicate_entries.len()));
    if result.has_duplicates() {
        out.push_str(&format!("• Duplication rate: {:.1}%\n", result.duplication_rate()));
    }
    out.push_str(&format!("• Title column: '{}'\n", result.title_column));
    if let Some(author_column) = &result.author_column {
        out.push_str(&format!("• Author column: '{}'\n", author_column));
    }
    out.push_str(&format!("\n{}\n\n", heavy));

    out.push_str(&format!("FULL LISTING\n{}\n", light));
    push_numbered(&mut out, &result.all_entries);
    out.push_str(&format!("\nTotal listed: {} records\n\n", result.all_entries.len()));

    if result.has_duplicates() {
        out.push_str(&format!("DUPLICATE RECORDS\n{}\n", light));
        push_numbered(&mut out, &result.duplicate_entries);
        out.push_str(&format!("\nTotal duplicates: {} records\n", result.duplicate_entries.len()));
        out.push_str("\nReview the duplicates before proceeding.\n");
    } else {
        out.push_str(&format!("NO DUPLICATES FOUND\n{}\n", light));
        out.push_str("The listing contains no duplicate records.\n");
    }

    out.push_str(&format!("\n{}\n", heavy));
    out
}

fn push_numbered(out: &mut String, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:4}. {}\n", i + 1, entry));
    }
}

/// Export the full listing as CSV
pub fn export_all<P: AsRef<Path>>(entries: &[String], path: P) -> Result<()> {
    if entries.is_empty() {
        return Err(anyhow!("There is no data to export"));
    }
    write_listing(path.as_ref(), "Full Title", entries, &format!("Total of {} records", entries.len()))
}

/// Export only the duplicate entries as CSV
pub fn export_duplicates<P: AsRef<Path>>(entries: &[String], path: P) -> Result<()> {
    if entries.is_empty() {
        return Err(anyhow!("There are no duplicate records to export"));
    }
    write_listing(path.as_ref(), "Duplicate Record", entries, &format!("Total of {} duplicates", entries.len()))
}

/// Numbered rows, a blank row, then a summary row; UTF-8 with BOM
fn write_listing(path: &Path, value_header: &str, entries: &[String], summary: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create export file: {:?}", path))?;
    file.write_all(b"\xEF\xBB\xBF")
        .with_context(|| format!("Failed to write to file: {:?}", path))?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["Number", value_header])?;
    for (i, entry) in entries.iter().enumerate() {
        writer.write_record([(i + 1).to_string().as_str(), entry.as_str()])?;
    }
    writer.write_record(["", ""])?;
    writer.write_record(["SUMMARY:", summary])?;
    writer.flush()
        .with_context(|| format!("Failed to write to file: {:?}", path))?;

    Ok(())
}
