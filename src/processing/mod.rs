//! Mask table generation and lookups.
//!
//! - [`mask_table`] - the [`SUBNET_MASKS`] table and helpers to search it

pub mod mask_table;

// Re-export public functions
pub use mask_table::{cidr_index, find_by_cidr, find_by_value, generate_masks, SUBNET_MASKS};
