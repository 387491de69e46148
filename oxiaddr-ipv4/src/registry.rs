//! IPv4 registry resolver.
//!
//! Resolution order:
//!
//! 1. The RFC 1918 private ranges and the RFC 3330 TEST-NET short-circuit to
//!    a reserved result.
//! 2. Otherwise a longest-prefix match runs over [`ASSIGNMENTS`]. Among all
//!    matching entries the one with the largest mask wins; on a tie the
//!    first entry found is kept.
//!
//! A per-first-octet hint table narrows the scan to the slice of the table
//! that can match. It is built once on first use and never changes the
//! result of a lookup.

use crate::address::Ipv4Address;
use crate::scope::{DOCUMENTATION, PRIVATE_10, PRIVATE_172, PRIVATE_192};
use crate::table::{ASSIGNMENTS, Assignment};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Registry administering an IPv4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registry {
    /// Internet Assigned Numbers Authority.
    Iana,
    /// American Registry for Internet Numbers.
    Arin,
    /// RIPE Network Coordination Centre.
    RipeNcc,
    /// Asia-Pacific Network Information Centre.
    Apnic,
    /// Latin America and Caribbean Network Information Centre.
    Lacnic,
    /// African Network Information Centre.
    Afrinic,
    /// Reserved by the named RFC.
    Reserved(&'static str),
    /// No table entry matched.
    Unknown,
}

impl Registry {
    /// Whether a registry was found.
    pub fn is_known(&self) -> bool {
        !matches!(self, Registry::Unknown)
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registry::Iana => f.write_str("IANA"),
            Registry::Arin => f.write_str("ARIN"),
            Registry::RipeNcc => f.write_str("RIPENCC"),
            Registry::Apnic => f.write_str("APNIC"),
            Registry::Lacnic => f.write_str("LACNIC"),
            Registry::Afrinic => f.write_str("AFRINIC"),
            Registry::Reserved(rfc) => write!(f, "reserved({rfc})"),
            Registry::Unknown => f.write_str("unknown"),
        }
    }
}

/// Hint table: for each first octet, the index range of [`ASSIGNMENTS`]
/// holding every entry that can match an address starting with that octet.
fn hint_table() -> &'static [Option<RangeInclusive<usize>>; 256] {
    static HINTS: OnceLock<[Option<RangeInclusive<usize>>; 256]> = OnceLock::new();

    HINTS.get_or_init(|| {
        let mut hints: [Option<RangeInclusive<usize>>; 256] = std::array::from_fn(|_| None);
        for (octet, hint) in hints.iter_mut().enumerate() {
            let base = (octet as u32) << 24;
            let mut first = None;
            let mut last = 0;
            for (i, entry) in ASSIGNMENTS.iter().enumerate() {
                if covers_octet(entry, base) {
                    first.get_or_insert(i);
                    last = i;
                }
            }
            *hint = first.map(|start| start..=last);
        }
        hints
    })
}

/// Whether `entry` overlaps the /8 starting at `base`.
fn covers_octet(entry: &Assignment, base: u32) -> bool {
    let top = entry.mask & 0xff00_0000;
    base & top == entry.network & top
}

/// Scan `candidates` for the most specific match of `value`.
fn best_match(
    value: u32,
    candidates: impl Iterator<Item = (usize, &'static Assignment)>,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, entry) in candidates {
        if !entry.matches(value) {
            continue;
        }
        trace!(index = i, "registry candidate");
        match best {
            Some((current, mask)) if entry.mask <= mask => {
                trace!(index = i, kept = current, "candidate not more specific");
            }
            _ => best = Some((i, entry.mask)),
        }
    }
    best.map(|(i, _)| i)
}

fn reserved_shortcut(value: u32) -> Option<Registry> {
    if PRIVATE_10.contains(value) || PRIVATE_172.contains(value) || PRIVATE_192.contains(value) {
        Some(Registry::Reserved("RFC1918"))
    } else if DOCUMENTATION.contains(value) {
        Some(Registry::Reserved("RFC3330"))
    } else {
        None
    }
}

/// Resolve the registry of a 32-bit address value.
///
/// ```
/// use oxiaddr_ipv4::{Registry, registry};
///
/// assert_eq!(registry::lookup_u32(0x0a01_0203), Registry::Reserved("RFC1918"));
/// assert_eq!(registry::lookup_u32(0x0a01_0203).to_string(), "reserved(RFC1918)");
/// ```
pub fn lookup_u32(value: u32) -> Registry {
    debug!(value = %format!("{value:08x}"), "registry lookup");

    if let Some(reserved) = reserved_shortcut(value) {
        return reserved;
    }

    let table: &'static [Assignment] = ASSIGNMENTS;
    let octet = (value >> 24) as usize;
    let found = hint_table()[octet].clone().and_then(|range| {
        let start = *range.start();
        let candidates = table[range].iter().enumerate();
        best_match(value, candidates.map(move |(i, entry)| (start + i, entry)))
    });

    resolve(found)
}

/// Resolve the registry with a full table scan, ignoring the hint table.
pub fn lookup_u32_unhinted(value: u32) -> Registry {
    if let Some(reserved) = reserved_shortcut(value) {
        return reserved;
    }
    resolve(best_match(value, ASSIGNMENTS.iter().enumerate()))
}

/// Resolve the registry of an address.
pub fn lookup(addr: &Ipv4Address) -> Registry {
    lookup_u32(addr.to_u32())
}

fn resolve(found: Option<usize>) -> Registry {
    debug!(found = ?found, "final registry match");
    found.map_or(Registry::Unknown, |i| ASSIGNMENTS[i].registry)
}

impl Ipv4Address {
    /// Registry administering this address.
    pub fn registry(&self) -> Registry {
        lookup(self)
    }
}
