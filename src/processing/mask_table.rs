//! The subnet mask table.
//!
//! [`SUBNET_MASKS`] holds one [`MaskEntry`] per prefix length, /32 first and
//! /0 last. It is built on first access and never changes afterwards.

use crate::models::{MaskEntry, MAX_LENGTH};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// All 33 masks, ordered by descending prefix length.
    pub static ref SUBNET_MASKS: Vec<MaskEntry> = generate_masks();
}

/// Build the mask table, ordered by descending prefix length.
pub fn generate_masks() -> Vec<MaskEntry> {
    log::debug!("#Start generate_masks()");
    let mut masks: Vec<MaskEntry> = (0..=MAX_LENGTH).map(MaskEntry::new).collect();
    masks.reverse();
    log::trace!("generate_masks() built {} entries", masks.len());
    masks
}

/// Look up the entry for a prefix length.
pub fn find_by_cidr(cidr: u8) -> Option<&'static MaskEntry> {
    SUBNET_MASKS.iter().find(|m| m.cidr == cidr)
}

/// Look up the entry for a dotted-decimal mask such as `255.255.255.0`.
pub fn find_by_value(value: &str) -> Option<&'static MaskEntry> {
    let value = value.trim();
    SUBNET_MASKS.iter().find(|m| m.value == value)
}

/// Index the table by prefix length.
pub fn cidr_index() -> HashMap<u8, &'static MaskEntry> {
    SUBNET_MASKS.iter().map(|m| (m.cidr, m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{get_cidr_mask, mask_prefix_len, parse_dotted_mask};
    use std::collections::HashSet;

    #[test]
    fn test_table_size_and_order() {
        assert_eq!(SUBNET_MASKS.len(), 33);
        assert_eq!(SUBNET_MASKS[0].cidr, 32);
        assert_eq!(SUBNET_MASKS[32].cidr, 0);
        for pair in SUBNET_MASKS.windows(2) {
            assert!(
                pair[0].cidr > pair[1].cidr,
                "Not descending: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_every_cidr_once() {
        let seen: HashSet<u8> = SUBNET_MASKS.iter().map(|m| m.cidr).collect();
        assert_eq!(seen.len(), 33);
        assert!((0..=32).all(|c| seen.contains(&c)));
    }

    #[test]
    fn test_values_round_trip() {
        for entry in SUBNET_MASKS.iter() {
            let mask = parse_dotted_mask(&entry.value).unwrap();
            assert_eq!(mask, get_cidr_mask(entry.cidr).unwrap());
            assert_eq!(mask_prefix_len(mask).unwrap(), entry.cidr, "{entry}");
            assert_eq!(entry.label, format!("/{} — {}", entry.cidr, entry.value));
        }
    }

    #[test]
    fn test_known_masks() {
        let cases = [
            (32, "255.255.255.255"),
            (24, "255.255.255.0"),
            (16, "255.255.0.0"),
            (8, "255.0.0.0"),
            (1, "128.0.0.0"),
            (0, "0.0.0.0"),
        ];
        for (cidr, value) in cases {
            let entry = find_by_cidr(cidr).unwrap();
            assert_eq!(entry.value, value);
            assert_eq!(entry.label, format!("/{cidr} — {value}"));
            assert_eq!(SUBNET_MASKS[(32 - cidr) as usize], *entry);
        }
    }

    #[test]
    fn test_generate_matches_global() {
        assert_eq!(generate_masks(), *SUBNET_MASKS);
    }

    #[test]
    fn test_find_by_value() {
        assert_eq!(find_by_value("255.255.252.0").unwrap().cidr, 22);
        assert_eq!(find_by_value(" 0.0.0.0 ").unwrap().cidr, 0);
        assert!(find_by_value("255.0.255.0").is_none());
        assert!(find_by_cidr(33).is_none());
    }

    #[test]
    fn test_cidr_index() {
        let index = cidr_index();
        assert_eq!(index.len(), 33);
        assert_eq!(index[&27].value, "255.255.255.224");
        assert!(std::ptr::eq(index[&27], find_by_cidr(27).unwrap()));
    }
}
