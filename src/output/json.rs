//! JSON output for the mask table.

use crate::models::MaskEntry;
use std::error::Error;

/// Serialize entries as a pretty-printed JSON array.
pub fn to_json(entries: &[&MaskEntry]) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(entries).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print entries as JSON to stdout.
pub fn print_json(entries: &[&MaskEntry]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_json() entries={}", entries.len());
    println!("{}", to_json(entries)?);
    Ok(())
}
