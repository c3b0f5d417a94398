//! CSV output formatting for the mask table.

use crate::models::MaskEntry;

use super::terminal::format_field;

/// CSV header line.
pub const CSV_HEADER: &str = r#""cidr",           "value",                    "label""#;

/// Format a single CSV row.
pub fn format_csv_row(entry: &MaskEntry) -> String {
    format!(
        r#"{cidr},{value},{label}"#,
        cidr = format_field(entry.cidr, 6),
        value = format_field(escape_csv_field(&entry.value), 18),
        label = format_field(escape_csv_field(&entry.label), 26),
    )
}

/// Print entries as CSV to stdout.
pub fn print_csv(entries: &[&MaskEntry]) {
    log::info!("#Start print_csv() rows={}", entries.len());
    println!("{CSV_HEADER}");
    for entry in entries {
        println!("{}", format_csv_row(entry));
    }
}

fn escape_csv_field(input: &str) -> String {
    // Fields are always quoted by format_field, only embedded quotes need doubling.
    input.replace('"', "\"\"")
}
