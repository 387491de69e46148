//! IPv4 address ranges and scope classification.

use bitflags::bitflags;

/// A network/mask pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Range {
    /// Network address (already masked).
    pub network: u32,
    /// Network mask.
    pub mask: u32,
}

impl Ipv4Range {
    /// Create a range from a network address and a prefix length.
    pub const fn new(network: u32, prefix_length: u8) -> Self {
        let mask = mask_for(prefix_length);
        Self {
            network: network & mask,
            mask,
        }
    }

    /// Whether `value` lies in this range.
    #[inline]
    pub const fn contains(&self, value: u32) -> bool {
        value & self.mask == self.network
    }

    /// Prefix length of the mask.
    pub const fn prefix_length(&self) -> u32 {
        self.mask.leading_ones()
    }
}

/// Mask with the top `prefix_length` bits set.
pub const fn mask_for(prefix_length: u8) -> u32 {
    if prefix_length == 0 {
        0
    } else if prefix_length >= 32 {
        u32::MAX
    } else {
        u32::MAX << (32 - prefix_length)
    }
}

/// 10.0.0.0/8 (RFC 1918).
pub const PRIVATE_10: Ipv4Range = Ipv4Range::new(0x0a00_0000, 8);
/// 172.16.0.0/12 (RFC 1918).
pub const PRIVATE_172: Ipv4Range = Ipv4Range::new(0xac10_0000, 12);
/// 192.168.0.0/16 (RFC 1918).
pub const PRIVATE_192: Ipv4Range = Ipv4Range::new(0xc0a8_0000, 16);
/// 192.0.2.0/24 (RFC 3330 TEST-NET).
pub const DOCUMENTATION: Ipv4Range = Ipv4Range::new(0xc000_0200, 24);
/// 127.0.0.0/8.
pub const LOOPBACK: Ipv4Range = Ipv4Range::new(0x7f00_0000, 8);
/// 169.254.0.0/16.
pub const LINK_LOCAL: Ipv4Range = Ipv4Range::new(0xa9fe_0000, 16);
/// 224.0.0.0/4.
pub const MULTICAST: Ipv4Range = Ipv4Range::new(0xe000_0000, 4);
/// 240.0.0.0/4.
pub const FUTURE_USE: Ipv4Range = Ipv4Range::new(0xf000_0000, 4);

bitflags! {
    /// Derived classification of an IPv4 address.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Ipv4Scope: u32 {
        /// 0.0.0.0
        const UNSPECIFIED = 1 << 0;
        /// Globally routed or otherwise assignable unicast space.
        const UNICAST = 1 << 1;
        /// 224.0.0.0/4
        const MULTICAST = 1 << 2;
        /// 127.0.0.0/8
        const LOOPBACK = 1 << 3;
        /// 169.254.0.0/16
        const LINK_LOCAL = 1 << 4;
        /// RFC 1918 private space.
        const PRIVATE = 1 << 5;
        /// 192.0.2.0/24
        const DOCUMENTATION = 1 << 6;
        /// 240.0.0.0/4
        const RESERVED = 1 << 7;
    }
}

/// Classify a 32-bit address value.
pub fn classify(value: u32) -> Ipv4Scope {
    if value == 0 {
        return Ipv4Scope::UNSPECIFIED;
    }
    if MULTICAST.contains(value) {
        return Ipv4Scope::MULTICAST;
    }
    if FUTURE_USE.contains(value) {
        return Ipv4Scope::RESERVED;
    }

    let mut scope = Ipv4Scope::UNICAST;
    if LOOPBACK.contains(value) {
        scope |= Ipv4Scope::LOOPBACK;
    } else if LINK_LOCAL.contains(value) {
        scope |= Ipv4Scope::LINK_LOCAL;
    } else if [PRIVATE_10, PRIVATE_172, PRIVATE_192]
        .iter()
        .any(|r| r.contains(value))
    {
        scope |= Ipv4Scope::PRIVATE;
    } else if DOCUMENTATION.contains(value) {
        scope |= Ipv4Scope::DOCUMENTATION;
    }
    scope
}
