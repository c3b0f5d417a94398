//! Domain models for the subnet mask table.
//!
//! - [`MaskEntry`] - one prefix length with its dotted mask and label
//! - [`get_cidr_mask`] and friends - mask arithmetic on `u32`

mod ipv4;
mod mask_entry;

// Re-export public types
pub use ipv4::{
    get_cidr_mask, mask_octets, mask_prefix_len, mask_to_dotted, parse_dotted_mask, MAX_LENGTH,
};
pub use mask_entry::MaskEntry;
