//! IPv4 subnet mask arithmetic.
//!
//! Converts between CIDR prefix lengths, 32-bit mask values and the
//! dotted-decimal form shown to users.

use itertools::Itertools;
use std::error::Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask with the high `len` bits set. `len` above [`MAX_LENGTH`] saturates.
pub(crate) fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len) as u32;
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_mask_table::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(prefix_mask(len))
    }
}

/// Split a mask into its four octets, most significant first.
pub fn mask_octets(mask: u32) -> [u8; 4] {
    [
        (mask >> 24) as u8,
        (mask >> 16) as u8,
        (mask >> 8) as u8,
        mask as u8,
    ]
}

/// Render a mask as four dot-separated decimal octets.
pub fn mask_to_dotted(mask: u32) -> String {
    mask_octets(mask).iter().join(".")
}

/// Parse a dotted-decimal mask such as `"255.255.240.0"` back to its bits.
pub fn parse_dotted_mask(input: &str) -> Result<u32, Box<dyn Error>> {
    let input = input.trim();
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("Invalid mask {input}: expected 4 octets").into());
    }
    let mut mask: u32 = 0;
    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid octet '{part}' in mask {input}").into());
        }
        let octet: u8 = part
            .parse()
            .map_err(|_| format!("Octet out of range '{part}' in mask {input}"))?;
        mask = (mask << 8) | octet as u32;
    }
    Ok(mask)
}

/// Count the prefix length of a mask.
///
/// Fails when a one-bit follows a zero-bit, i.e. the mask is not contiguous.
pub fn mask_prefix_len(mask: u32) -> Result<u8, Box<dyn Error>> {
    let len = mask.leading_ones() as u8;
    if prefix_mask(len) != mask {
        return Err(format!("Mask {} is not contiguous", mask_to_dotted(mask)).into());
    }
    Ok(len)
}
