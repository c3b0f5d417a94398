//! Subnet mask lookup table.
//!
//! [`SUBNET_MASKS`] maps every IPv4 prefix length to its dotted-decimal mask,
//! ordered /32 first and /0 last.
//!
//! Module organization:
//! - [`models`] - [`MaskEntry`] and mask arithmetic
//! - [`processing`] - table generation and lookups
//! - [`output`] - terminal, CSV and JSON rendering
//! - [`config`] - environment settings for the binary

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputFormat};
use std::error::Error;

pub use models::MaskEntry;
pub use processing::{generate_masks, SUBNET_MASKS};

/// Entries inside the configured prefix range, still in table order.
pub fn select_masks(config: &Config) -> Vec<&'static MaskEntry> {
    SUBNET_MASKS
        .iter()
        .filter(|m| config.includes(m.cidr))
        .collect()
}

/// Print the selected entries in the configured format.
pub fn print_masks(config: &Config) -> Result<(), Box<dyn Error>> {
    let masks = select_masks(config);
    log::info!(
        "#Start print_masks() format={:?} /{}../{} count={}",
        config.format,
        config.min_cidr,
        config.max_cidr,
        masks.len()
    );
    match config.format {
        OutputFormat::Terminal => output::print_terminal(&masks),
        OutputFormat::Csv => output::print_csv(&masks),
        OutputFormat::Json => output::print_json(&masks)?,
    }
    Ok(())
}
