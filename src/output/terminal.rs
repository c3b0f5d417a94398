//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::MaskEntry;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render one entry as an aligned, coloured terminal line.
pub fn format_terminal_row(entry: &MaskEntry) -> String {
    let cidr = format!("/{}", entry.cidr);
    format!(
        "{cidr:>4} — {value:<15}  {bits:032b}",
        cidr = cidr.green(),
        value = entry.value,
        bits = entry.mask()
    )
}

/// Print entries to stdout, one per line.
pub fn print_terminal(entries: &[&MaskEntry]) {
    log::info!("# Printing {} masks", entries.len());
    for entry in entries {
        println!("{}", format_terminal_row(entry));
    }
}
