//! IPv6 address type classification.
//!
//! [`classify`] derives a set of non-exclusive [`Ipv6Scope`] flags from the
//! four 32-bit dwords of an address. Rules are evaluated in a fixed order;
//! the informational prefix/suffix rules add flags and continue, while the
//! unicast, multicast, link-local and site-local rules return as soon as
//! they match.

use bitflags::bitflags;
use tracing::trace;

bitflags! {
    /// Derived classification of an IPv6 address.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Ipv6Scope: u32 {
        /// `::`
        const UNSPECIFIED = 1 << 0;
        /// Unicast address space.
        const UNICAST = 1 << 1;
        /// `ff00::/8`
        const MULTICAST = 1 << 2;
        /// Catch-all for the all-zero high bits case.
        const ANY = 1 << 3;
        /// `::1`, or the interface-local multicast scope.
        const LOOPBACK = 1 << 4;
        /// `fe80::/10`, or the link-local multicast scope.
        const LINK_LOCAL = 1 << 5;
        /// `fec0::/10`, or the site-local multicast scope.
        const SITE_LOCAL = 1 << 6;
        /// `::a.b.c.d`
        const COMPAT_V4 = 1 << 7;
        /// `::ffff:a.b.c.d`
        const MAPPED = 1 << 8;
        /// Not assigned to any other class.
        const RESERVED = 1 << 9;
        /// `3ffe::/16`, the experimental 6bone.
        const SIX_BONE = 1 << 10;
        /// `2002::/16`
        const SIX_TO_FOUR = 1 << 11;
        /// `2001::/16`
        const PRODUCTIVE = 1 << 12;
        /// `...:0:1:ffxx:xxxx`
        const SOLICITED_NODE = 1 << 13;
        /// `...:0:5efe:a.b.c.d`
        const ISATAP = 1 << 14;
    }
}

impl Ipv6Scope {
    /// Scopes whose last 32 bits are rendered as dotted decimal.
    pub const HYBRID: Self = Self::COMPAT_V4.union(Self::MAPPED);

    /// Scopes that carry an embedded IPv4 address.
    pub const EMBEDS_IPV4: Self = Self::HYBRID.union(Self::ISATAP);

    /// Whether the last 32 bits are rendered as dotted decimal.
    pub fn is_hybrid(&self) -> bool {
        self.intersects(Self::HYBRID)
    }

    /// Human-readable names of the set flags.
    pub fn labels(&self) -> Vec<&'static str> {
        LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

const LABELS: [(Ipv6Scope, &str); 15] = [
    (Ipv6Scope::UNSPECIFIED, "unspecified"),
    (Ipv6Scope::ANY, "any"),
    (Ipv6Scope::UNICAST, "unicast"),
    (Ipv6Scope::MULTICAST, "multicast"),
    (Ipv6Scope::LOOPBACK, "loopback"),
    (Ipv6Scope::LINK_LOCAL, "link-local"),
    (Ipv6Scope::SITE_LOCAL, "site-local"),
    (Ipv6Scope::COMPAT_V4, "compat-v4"),
    (Ipv6Scope::MAPPED, "mapped"),
    (Ipv6Scope::ISATAP, "isatap"),
    (Ipv6Scope::SOLICITED_NODE, "solicited-node"),
    (Ipv6Scope::SIX_BONE, "6bone"),
    (Ipv6Scope::SIX_TO_FOUR, "6to4"),
    (Ipv6Scope::PRODUCTIVE, "productive"),
    (Ipv6Scope::RESERVED, "reserved"),
];

/// A value/mask pattern over one 32-bit dword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwordPattern {
    /// Expected bits (already masked).
    pub value: u32,
    /// Significant bits.
    pub mask: u32,
}

impl DwordPattern {
    /// Pattern matching the top `bits` bits of `value`.
    pub const fn prefix(value: u32, bits: u32) -> Self {
        let mask = if bits == 0 { 0 } else { u32::MAX << (32 - bits) };
        Self {
            value: value & mask,
            mask,
        }
    }

    /// Whether `dword` matches.
    #[inline]
    pub const fn matches(&self, dword: u32) -> bool {
        dword & self.mask == self.value
    }
}

/// `3ffe::/16`
pub const SIX_BONE: DwordPattern = DwordPattern::prefix(0x3ffe_0000, 16);
/// `2002::/16`
pub const SIX_TO_FOUR: DwordPattern = DwordPattern::prefix(0x2002_0000, 16);
/// `2001::/16`
pub const PRODUCTIVE: DwordPattern = DwordPattern::prefix(0x2001_0000, 16);
/// `ff00::/8`
pub const MULTICAST: DwordPattern = DwordPattern::prefix(0xff00_0000, 8);
/// `fe80::/10`
pub const LINK_LOCAL: DwordPattern = DwordPattern::prefix(0xfe80_0000, 10);
/// `fec0::/10`
pub const SITE_LOCAL: DwordPattern = DwordPattern::prefix(0xfec0_0000, 10);
/// Top byte of the last dword of a solicited-node address.
pub const SOLICITED_NODE_TAIL: DwordPattern = DwordPattern::prefix(0xff00_0000, 8);
/// Third dword of a solicited-node address.
pub const SOLICITED_NODE_DWORD2: u32 = 0x0000_0001;
/// Third dword of an ISATAP address.
pub const ISATAP_DWORD2: u32 = 0x0000_5efe;
/// Third dword of an IPv4-mapped address.
pub const MAPPED_DWORD2: u32 = 0x0000_ffff;

const TOP3_ZERO: DwordPattern = DwordPattern::prefix(0x0000_0000, 3);
const TOP3_ONES: DwordPattern = DwordPattern::prefix(0xe000_0000, 3);

/// Multicast scope nibble values (second byte of the first dword).
const MCAST_INTERFACE_LOCAL: u32 = 0x01;
const MCAST_LINK_LOCAL: u32 = 0x02;
const MCAST_SITE_LOCAL: u32 = 0x05;

/// Classify an address given as four dwords, most significant first.
///
/// ```
/// use oxiaddr_ipv6::{Ipv6Scope, classify};
///
/// assert_eq!(classify([0, 0, 0, 0]), Ipv6Scope::UNSPECIFIED);
/// assert_eq!(
///     classify([0xfe80_0000, 0, 0, 1]),
///     Ipv6Scope::LINK_LOCAL | Ipv6Scope::UNICAST
/// );
/// ```
pub fn classify(dwords: [u32; 4]) -> Ipv6Scope {
    let [st0, st1, st2, st3] = dwords;
    let mut scope = Ipv6Scope::empty();

    if dwords == [0; 4] {
        return Ipv6Scope::UNSPECIFIED;
    }

    if SIX_BONE.matches(st0) {
        scope |= Ipv6Scope::SIX_BONE;
    }
    if SIX_TO_FOUR.matches(st0) {
        scope |= Ipv6Scope::SIX_TO_FOUR;
    }
    if PRODUCTIVE.matches(st0) {
        scope |= Ipv6Scope::PRODUCTIVE;
    }
    if st2 == SOLICITED_NODE_DWORD2 && SOLICITED_NODE_TAIL.matches(st3) {
        scope |= Ipv6Scope::SOLICITED_NODE;
    }
    if st2 == ISATAP_DWORD2 {
        scope |= Ipv6Scope::ISATAP;
    }
    trace!(?scope, "informational flags");

    if !TOP3_ZERO.matches(st0) && !TOP3_ONES.matches(st0) {
        return scope | Ipv6Scope::UNICAST;
    }

    if MULTICAST.matches(st0) {
        scope |= Ipv6Scope::MULTICAST;
        match (st0 >> 16) & 0xff {
            MCAST_INTERFACE_LOCAL => scope |= Ipv6Scope::LOOPBACK,
            MCAST_LINK_LOCAL => scope |= Ipv6Scope::LINK_LOCAL,
            MCAST_SITE_LOCAL => scope |= Ipv6Scope::SITE_LOCAL,
            _ => {}
        }
        return scope;
    }

    if LINK_LOCAL.matches(st0) {
        return scope | Ipv6Scope::LINK_LOCAL | Ipv6Scope::UNICAST;
    }
    if SITE_LOCAL.matches(st0) {
        return scope | Ipv6Scope::SITE_LOCAL | Ipv6Scope::UNICAST;
    }

    if st0 == 0 && st1 == 0 {
        if st2 == 0 {
            return match st3 {
                0 => scope | Ipv6Scope::ANY,
                1 => scope | Ipv6Scope::LOOPBACK | Ipv6Scope::UNICAST,
                _ => scope | Ipv6Scope::COMPAT_V4 | Ipv6Scope::UNICAST,
            };
        }
        if st2 == MAPPED_DWORD2 {
            return scope | Ipv6Scope::MAPPED;
        }
    }

    scope | Ipv6Scope::RESERVED
}
