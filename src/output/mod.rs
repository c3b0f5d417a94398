//! Output formatting for the mask table.
//!
//! - [`csv`] - CSV output
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{format_csv_row, print_csv, CSV_HEADER};
pub use json::{print_json, to_json};
pub use terminal::{format_field, format_terminal_row, print_terminal};
