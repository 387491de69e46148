//! Static IPv4 assignment table.
//!
//! Each entry maps a network/mask pair to the registry that administers it.
//! Entries may nest; the resolver picks the most specific match. The table
//! is read-only and shared by every lookup.

use crate::registry::Registry::{self, Afrinic, Apnic, Arin, Iana, Lacnic, Reserved, RipeNcc};
use crate::scope::mask_for;

/// One row of the assignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Network address (already masked).
    pub network: u32,
    /// Network mask.
    pub mask: u32,
    /// Administering registry.
    pub registry: Registry,
}

impl Assignment {
    const fn new(a: u8, b: u8, c: u8, d: u8, prefix_length: u8, registry: Registry) -> Self {
        let mask = mask_for(prefix_length);
        let network = u32::from_be_bytes([a, b, c, d]) & mask;
        Self {
            network,
            mask,
            registry,
        }
    }

    /// Whether `value` lies in this assignment.
    #[inline]
    pub const fn matches(&self, value: u32) -> bool {
        value & self.mask == self.network
    }
}

const fn e(a: u8, b: u8, c: u8, d: u8, len: u8, registry: Registry) -> Assignment {
    Assignment::new(a, b, c, d, len, registry)
}

/// The assignment table, ordered by network address.
pub static ASSIGNMENTS: &[Assignment] = &[
    e(0, 0, 0, 0, 8, Reserved("RFC1700")),
    e(1, 0, 0, 0, 8, Apnic),
    e(2, 0, 0, 0, 8, RipeNcc),
    e(3, 0, 0, 0, 8, Arin),
    e(4, 0, 0, 0, 8, Arin),
    e(5, 0, 0, 0, 8, RipeNcc),
    e(6, 0, 0, 0, 8, Arin),
    e(7, 0, 0, 0, 8, Arin),
    e(8, 0, 0, 0, 8, Arin),
    e(9, 0, 0, 0, 8, Arin),
    e(11, 0, 0, 0, 8, Arin),
    e(12, 0, 0, 0, 8, Arin),
    e(13, 0, 0, 0, 8, Arin),
    e(14, 0, 0, 0, 8, Apnic),
    e(15, 0, 0, 0, 8, Arin),
    e(16, 0, 0, 0, 8, Arin),
    e(17, 0, 0, 0, 8, Arin),
    e(18, 0, 0, 0, 8, Arin),
    e(19, 0, 0, 0, 8, Arin),
    e(20, 0, 0, 0, 8, Arin),
    e(24, 0, 0, 0, 8, Arin),
    e(24, 132, 0, 0, 14, RipeNcc),
    e(25, 0, 0, 0, 8, RipeNcc),
    e(27, 0, 0, 0, 8, Apnic),
    e(31, 0, 0, 0, 8, RipeNcc),
    e(36, 0, 0, 0, 8, Apnic),
    e(37, 0, 0, 0, 8, RipeNcc),
    e(39, 0, 0, 0, 8, Apnic),
    e(41, 0, 0, 0, 8, Afrinic),
    e(42, 0, 0, 0, 8, Apnic),
    e(43, 0, 0, 0, 8, Apnic),
    e(46, 0, 0, 0, 8, RipeNcc),
    e(49, 0, 0, 0, 8, Apnic),
    e(58, 0, 0, 0, 7, Apnic),
    e(60, 0, 0, 0, 7, Apnic),
    e(62, 0, 0, 0, 8, RipeNcc),
    e(77, 0, 0, 0, 8, RipeNcc),
    e(78, 0, 0, 0, 7, RipeNcc),
    e(80, 0, 0, 0, 4, RipeNcc),
    e(102, 0, 0, 0, 8, Afrinic),
    e(105, 0, 0, 0, 8, Afrinic),
    e(110, 0, 0, 0, 7, Apnic),
    e(112, 0, 0, 0, 5, Apnic),
    e(120, 0, 0, 0, 6, Apnic),
    e(124, 0, 0, 0, 7, Apnic),
    e(126, 0, 0, 0, 8, Apnic),
    e(127, 0, 0, 0, 8, Reserved("RFC1122")),
    e(128, 0, 0, 0, 3, Arin),
    e(133, 0, 0, 0, 8, Apnic),
    e(139, 0, 0, 0, 8, Apnic),
    e(141, 0, 0, 0, 8, RipeNcc),
    e(145, 0, 0, 0, 8, RipeNcc),
    e(150, 0, 0, 0, 8, Apnic),
    e(169, 254, 0, 0, 16, Reserved("RFC3927")),
    e(172, 0, 0, 0, 8, Arin),
    e(177, 0, 0, 0, 8, Lacnic),
    e(179, 0, 0, 0, 8, Lacnic),
    e(181, 0, 0, 0, 8, Lacnic),
    e(186, 0, 0, 0, 7, Lacnic),
    e(188, 0, 0, 0, 8, RipeNcc),
    e(189, 0, 0, 0, 8, Lacnic),
    e(190, 0, 0, 0, 7, Lacnic),
    e(192, 0, 0, 0, 8, Arin),
    e(192, 88, 99, 0, 24, Reserved("RFC3068")),
    e(192, 106, 0, 0, 15, RipeNcc),
    e(193, 0, 0, 0, 8, RipeNcc),
    e(194, 0, 0, 0, 7, RipeNcc),
    e(196, 0, 0, 0, 7, Afrinic),
    e(198, 0, 0, 0, 7, Arin),
    e(198, 18, 0, 0, 15, Reserved("RFC2544")),
    e(200, 0, 0, 0, 7, Lacnic),
    e(202, 0, 0, 0, 7, Apnic),
    e(204, 0, 0, 0, 6, Arin),
    e(210, 0, 0, 0, 7, Apnic),
    e(212, 0, 0, 0, 7, RipeNcc),
    e(214, 0, 0, 0, 7, Arin),
    e(216, 0, 0, 0, 8, Arin),
    e(217, 0, 0, 0, 8, RipeNcc),
    e(218, 0, 0, 0, 7, Apnic),
    e(220, 0, 0, 0, 7, Apnic),
    e(222, 0, 0, 0, 7, Apnic),
    e(224, 0, 0, 0, 4, Reserved("RFC3171")),
    e(240, 0, 0, 0, 4, Reserved("RFC1112")),
    e(255, 255, 255, 255, 32, Iana),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_networks_are_masked() {
        for entry in ASSIGNMENTS {
            assert_eq!(entry.network & entry.mask, entry.network, "{entry:?}");
        }
    }

    #[test]
    fn test_table_is_ordered() {
        for pair in ASSIGNMENTS.windows(2) {
            assert!(pair[0].network <= pair[1].network, "{pair:?}");
        }
    }

    #[test]
    fn test_matches() {
        let entry = Assignment::new(24, 132, 0, 0, 14, RipeNcc);
        assert!(entry.matches(0x1884_0001));
        assert!(entry.matches(0x1887_ffff));
        assert!(!entry.matches(0x1888_0000));
    }
}
