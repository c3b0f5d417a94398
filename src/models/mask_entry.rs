//! Subnet mask table entry.

use super::ipv4::{mask_to_dotted, prefix_mask, MAX_LENGTH};
use serde::{Deserialize, Serialize};

/// One row of the subnet mask table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskEntry {
    /// Prefix length (0-32).
    pub cidr: u8,
    /// Mask as dotted-decimal octets, e.g. `255.255.255.0`.
    pub value: String,
    /// Display text, e.g. `/24 — 255.255.255.0`.
    pub label: String,
}

impl MaskEntry {
    /// Build the entry for a prefix length. Lengths above 32 are clamped.
    pub fn new(cidr: u8) -> MaskEntry {
        let cidr = cidr.min(MAX_LENGTH);
        let value = mask_to_dotted(prefix_mask(cidr));
        let label = format!("/{cidr} — {value}");
        MaskEntry { cidr, value, label }
    }

    /// The mask bits for this entry.
    pub fn mask(&self) -> u32 {
        prefix_mask(self.cidr)
    }
}

impl std::fmt::Display for MaskEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_entry_new() {
        let entry = MaskEntry::new(20);
        assert_eq!(entry.cidr, 20);
        assert_eq!(entry.value, "255.255.240.0");
        assert_eq!(entry.label, "/20 — 255.255.240.0");
        assert_eq!(entry.mask(), 0xFFFFF000);
        assert_eq!(entry.to_string(), entry.label);
    }

    #[test]
    fn test_mask_entry_clamped() {
        assert_eq!(MaskEntry::new(40), MaskEntry::new(32));
    }

    #[test]
    fn test_mask_entry_serde() {
        let json = serde_json::to_string(&MaskEntry::new(8)).unwrap();
        assert_eq!(
            json,
            r#"{"cidr":8,"value":"255.0.0.0","label":"/8 — 255.0.0.0"}"#
        );
        let back: MaskEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MaskEntry::new(8));
    }
}
