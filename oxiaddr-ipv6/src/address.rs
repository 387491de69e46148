//! The IPv6 address structure.

use crate::scope::{self, Ipv6Scope, MAPPED_DWORD2};
use oxiaddr_core::bits::BitAccess;
use oxiaddr_core::error::{AddrError, Result};
use oxiaddr_ipv4::Ipv4Address;
use tracing::debug;

/// Largest IPv6 prefix length.
pub const MAX_PREFIX_LENGTH: u8 = 128;

/// Bits in front of an embedded IPv4 address.
const EMBEDDED_IPV4_OFFSET: u8 = 96;

/// An IPv6 address with optional prefix length, a start/end bit range for
/// partial renderings, and derived scope.
///
/// Created zeroed, populated by the parser in one pass and classified once.
/// Only the mask operations change the bits afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Address {
    octets: [u8; 16],
    prefix_length: Option<u8>,
    bit_start: u8,
    bit_end: u8,
    scope: Ipv6Scope,
    valid: bool,
}

impl Default for Ipv6Address {
    fn default() -> Self {
        Self {
            octets: [0; 16],
            prefix_length: None,
            bit_start: 1,
            bit_end: MAX_PREFIX_LENGTH,
            scope: Ipv6Scope::empty(),
            valid: false,
        }
    }
}

impl Ipv6Address {
    /// Create a zeroed, not yet valid address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classified, valid address from sixteen octets (MSB first).
    pub fn from_octets(octets: [u8; 16]) -> Self {
        let mut addr = Self {
            octets,
            ..Self::default()
        };
        addr.mark_valid();
        addr
    }

    /// Create a classified, valid address from its 128-bit value.
    pub fn from_u128(value: u128) -> Self {
        Self::from_octets(value.to_be_bytes())
    }

    /// Build `::ffff:a.b.c.d` from an IPv4 address.
    ///
    /// An IPv4 prefix length `n` becomes `96 + n`.
    ///
    /// ```
    /// use oxiaddr_ipv4::{Ipv4Address, parse};
    /// use oxiaddr_ipv6::{Ipv6Address, Ipv6Scope};
    ///
    /// let v6 = Ipv6Address::from_ipv4_mapped(&Ipv4Address::from_u32(0x0102_0304));
    /// assert_eq!(v6.scope(), Ipv6Scope::MAPPED);
    /// assert_eq!(v6.to_string(), "::ffff:1.2.3.4");
    ///
    /// let net = Ipv6Address::from_ipv4_mapped(&parse("192.0.2.0/24").unwrap());
    /// assert_eq!(net.to_string(), "::ffff:192.0.2.0/120");
    /// ```
    pub fn from_ipv4_mapped(ipv4: &Ipv4Address) -> Self {
        let value = (u128::from(MAPPED_DWORD2) << 32) | u128::from(ipv4.to_u32());
        Self::from_u128(value).with_ipv4_prefix(ipv4)
    }

    /// Build `::a.b.c.d` from an IPv4 address.
    ///
    /// `0.0.0.0` and `0.0.0.1` classify as the unspecified and loopback
    /// addresses rather than as compat-v4. An IPv4 prefix length `n` becomes
    /// `96 + n`.
    pub fn from_ipv4_compat(ipv4: &Ipv4Address) -> Self {
        Self::from_u128(u128::from(ipv4.to_u32())).with_ipv4_prefix(ipv4)
    }

    fn with_ipv4_prefix(mut self, ipv4: &Ipv4Address) -> Self {
        // at most 32, so the sum stays within 128
        self.prefix_length = ipv4.prefix_length().map(|len| len + EMBEDDED_IPV4_OFFSET);
        self
    }

    /// The 128-bit value of the address.
    pub fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.octets)
    }

    /// The sixteen octets, MSB first.
    pub fn to_octets(&self) -> [u8; 16] {
        self.octets
    }

    /// The four dwords, MSB first.
    pub fn dwords(&self) -> [u32; 4] {
        let value = self.to_u128();
        [
            (value >> 96) as u32,
            (value >> 64) as u32,
            (value >> 32) as u32,
            value as u32,
        ]
    }

    /// The eight words, MSB first.
    pub fn words(&self) -> [u16; 8] {
        std::array::from_fn(|i| u16::from_be_bytes([self.octets[2 * i], self.octets[2 * i + 1]]))
    }

    /// Prefix length, if one was given.
    pub fn prefix_length(&self) -> Option<u8> {
        self.prefix_length
    }

    /// Set the prefix length (0-128).
    pub fn set_prefix_length(&mut self, prefix_length: u8) -> Result<()> {
        if prefix_length > MAX_PREFIX_LENGTH {
            return Err(AddrError::invalid_prefix_length(format!(
                "'{prefix_length}' exceeds {MAX_PREFIX_LENGTH}"
            )));
        }
        self.prefix_length = Some(prefix_length);
        Ok(())
    }

    /// Drop the prefix length.
    pub fn clear_prefix_length(&mut self) {
        self.prefix_length = None;
    }

    /// Start and end bit (1-based, inclusive) used by partial renderings.
    pub fn bit_range(&self) -> (u8, u8) {
        (self.bit_start, self.bit_end)
    }

    /// Set the start and end bit, requiring `1 <= start <= end <= 128`.
    pub fn set_bit_range(&mut self, start: u8, end: u8) -> Result<()> {
        if start < 1 || start > end || end > MAX_PREFIX_LENGTH {
            return Err(AddrError::invalid_prefix_length(format!(
                "bit range {start}-{end} is not within 1-{MAX_PREFIX_LENGTH}"
            )));
        }
        self.bit_start = start;
        self.bit_end = end;
        Ok(())
    }

    /// Derived scope flags.
    pub fn scope(&self) -> Ipv6Scope {
        self.scope
    }

    /// Whether the structure holds a parsed or constructed address.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The IPv4 address carried in the last 32 bits of compat-v4, mapped
    /// and ISATAP addresses.
    pub fn embedded_ipv4(&self) -> Option<Ipv4Address> {
        if self.scope.intersects(Ipv6Scope::EMBEDS_IPV4) {
            Some(Ipv4Address::from_u32(self.dwords()[3]))
        } else {
            None
        }
    }

    /// Zero the address bits, scope and validity.
    pub fn clear(&mut self) {
        self.octets = [0; 16];
        self.scope = Ipv6Scope::empty();
        self.valid = false;
    }

    /// [`clear`](Self::clear) and additionally reset the prefix length and
    /// bit range.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Zero every bit at or beyond the prefix length, keeping the prefix.
    ///
    /// Does nothing when no prefix length is set. The scope is not
    /// re-derived, except that the compat-v4, mapped and ISATAP flags are
    /// dropped once the masked bits no longer carry them, so the result
    /// always renders as text the parser accepts.
    ///
    /// ```
    /// use oxiaddr_ipv6::parse;
    ///
    /// let mut addr = parse("2001:db8:1:2:3:4:5:6/48").unwrap();
    /// addr.mask_prefix();
    /// assert_eq!(addr.to_string(), "2001:db8:1::/48");
    /// ```
    pub fn mask_prefix(&mut self) {
        if let Some(len) = self.prefix_length {
            self.apply_mask(prefix_mask(len), "prefix");
        }
    }

    /// Zero every bit before the prefix length, keeping the suffix.
    ///
    /// Does nothing when no prefix length is set. Scope flags are kept as
    /// for [`mask_prefix`](Self::mask_prefix).
    pub fn mask_suffix(&mut self) {
        if let Some(len) = self.prefix_length {
            self.apply_mask(!prefix_mask(len), "suffix");
        }
    }

    fn apply_mask(&mut self, mask: u128, kept: &str) {
        let before = self.to_u128();
        let after = before & mask;
        debug!(
            kept,
            before = %format!("{before:032x}"),
            after = %format!("{after:032x}"),
            "masked address"
        );
        self.octets = after.to_be_bytes();

        let embeds = scope::classify(self.dwords()) & Ipv6Scope::EMBEDS_IPV4;
        let lost = self.scope & Ipv6Scope::EMBEDS_IPV4 & !embeds;
        if !lost.is_empty() {
            debug!(?lost, "masked address no longer embeds IPv4");
            self.scope.remove(lost);
        }
    }

    /// Classify the current bits and flag the structure valid.
    pub(crate) fn mark_valid(&mut self) {
        self.scope = scope::classify(self.dwords());
        self.valid = true;
    }
}

/// Mask with the top `prefix_length` bits set.
pub(crate) fn prefix_mask(prefix_length: u8) -> u128 {
    match prefix_length {
        0 => 0,
        len if len >= MAX_PREFIX_LENGTH => u128::MAX,
        len => u128::MAX << (MAX_PREFIX_LENGTH - len),
    }
}

impl BitAccess for Ipv6Address {
    fn octets(&self) -> &[u8] {
        &self.octets
    }

    fn octets_mut(&mut self) -> &mut [u8] {
        &mut self.octets
    }
}

impl From<std::net::Ipv6Addr> for Ipv6Address {
    fn from(addr: std::net::Ipv6Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv6Address> for std::net::Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        std::net::Ipv6Addr::from(addr.octets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let addr = Ipv6Address::new();
        assert_eq!(addr.to_u128(), 0);
        assert!(!addr.is_valid());
        assert_eq!(addr.bit_range(), (1, 128));
        assert_eq!(addr.prefix_length(), None);
    }

    #[test]
    fn test_accessors() {
        let mut addr = Ipv6Address::from_u128(0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert_eq!(addr.get_word(0).unwrap(), 0x2001);
        assert_eq!(addr.get_word(1).unwrap(), 0x0db8);
        assert_eq!(addr.get_octet(15).unwrap(), 1);
        assert_eq!(addr.get_dword(0).unwrap(), 0x2001_0db8);
        assert_eq!(addr.dwords(), [0x2001_0db8, 0, 0, 1]);
        assert_eq!(addr.words(), [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);

        addr.set_dword(3, 0xdead_beef).unwrap();
        assert_eq!(addr.get_word(6).unwrap(), 0xdead);
        assert_eq!(addr.get_word(7).unwrap(), 0xbeef);
    }

    #[test]
    fn test_accessor_bounds() {
        let mut addr = Ipv6Address::new();
        assert_eq!(
            addr.get_octet(16),
            Err(AddrError::index_out_of_range(16, 15))
        );
        assert_eq!(addr.get_word(8), Err(AddrError::index_out_of_range(8, 7)));
        assert_eq!(addr.get_dword(4), Err(AddrError::index_out_of_range(4, 3)));
        assert_eq!(
            addr.set_octet(0, 0x100),
            Err(AddrError::value_out_of_range(0x100, 0xff))
        );
        assert!(addr.set_dword(0, 0x1_0000_0000).is_err());
        assert_eq!(addr, Ipv6Address::new());
    }

    #[test]
    fn test_bit_range() {
        let mut addr = Ipv6Address::new();
        addr.set_bit_range(17, 64).unwrap();
        assert_eq!(addr.bit_range(), (17, 64));
        assert!(addr.set_bit_range(0, 64).is_err());
        assert!(addr.set_bit_range(65, 64).is_err());
        assert!(addr.set_bit_range(1, 129).is_err());
        assert_eq!(addr.bit_range(), (17, 64));

        addr.clear_all();
        assert_eq!(addr.bit_range(), (1, 128));
    }

    #[test]
    fn test_mask_operations() {
        let mut addr = Ipv6Address::from_u128(u128::MAX);
        addr.set_prefix_length(20).unwrap();

        let mut prefix = addr;
        prefix.mask_prefix();
        assert_eq!(prefix.to_u128(), 0xffff_f000_u128 << 96);
        let once = prefix;
        prefix.mask_prefix();
        assert_eq!(prefix, once);

        let mut suffix = addr;
        suffix.mask_suffix();
        assert_eq!(suffix.to_u128(), u128::MAX >> 20);

        prefix.mask_suffix();
        assert_eq!(prefix.to_u128(), 0);
    }

    #[test]
    fn test_mask_without_prefix_is_noop() {
        let mut addr = Ipv6Address::from_u128(0x1234);
        addr.mask_prefix();
        addr.mask_suffix();
        assert_eq!(addr.to_u128(), 0x1234);
    }

    #[test]
    fn test_mask_edges() {
        let mut addr = Ipv6Address::from_u128(u128::MAX);
        addr.set_prefix_length(0).unwrap();
        addr.mask_prefix();
        assert_eq!(addr.to_u128(), 0);

        let mut addr = Ipv6Address::from_u128(u128::MAX);
        addr.set_prefix_length(128).unwrap();
        addr.mask_prefix();
        assert_eq!(addr.to_u128(), u128::MAX);
        addr.mask_suffix();
        assert_eq!(addr.to_u128(), 0);
    }

    #[test]
    fn test_embedded_ipv4() {
        let v4 = Ipv4Address::from_u32(0xc000_0201);
        let mapped = Ipv6Address::from_ipv4_mapped(&v4);
        assert_eq!(mapped.embedded_ipv4(), Some(v4));

        let compat = Ipv6Address::from_ipv4_compat(&v4);
        assert!(compat.scope().contains(Ipv6Scope::COMPAT_V4));
        assert_eq!(compat.embedded_ipv4(), Some(v4));

        let plain = Ipv6Address::from_u128(0x2001_0db8 << 96);
        assert_eq!(plain.embedded_ipv4(), None);
    }

    #[test]
    fn test_embedding_carries_prefix_length() {
        let net = oxiaddr_ipv4::parse("192.0.2.0/24").unwrap();
        assert_eq!(Ipv6Address::from_ipv4_mapped(&net).prefix_length(), Some(120));
        assert_eq!(Ipv6Address::from_ipv4_compat(&net).prefix_length(), Some(120));

        let host = oxiaddr_ipv4::parse("192.0.2.1/32").unwrap();
        assert_eq!(Ipv6Address::from_ipv4_mapped(&host).prefix_length(), Some(128));

        let bare = Ipv4Address::from_u32(0xc000_0201);
        assert_eq!(Ipv6Address::from_ipv4_mapped(&bare).prefix_length(), None);
    }

    #[test]
    fn test_mask_drops_lost_ipv4_embedding() {
        let mut addr = crate::parse("::ffff:1.2.3.4/64").unwrap();
        addr.mask_prefix();
        assert_eq!(addr.to_u128(), 0);
        assert!(!addr.scope().intersects(Ipv6Scope::EMBEDS_IPV4));
        assert_eq!(addr.embedded_ipv4(), None);
        assert_eq!(addr.to_string(), "::/64");
        assert!(crate::parse(&addr.to_string()).is_ok());

        // the marker survives a mask inside the IPv4 part
        let mut addr = crate::parse("::ffff:1.2.3.4/112").unwrap();
        addr.mask_prefix();
        assert_eq!(addr.scope(), Ipv6Scope::MAPPED);
        assert_eq!(addr.to_string(), "::ffff:1.2.0.0/112");

        let mut addr = crate::parse("fe80::5efe:10.0.0.1/64").unwrap();
        addr.mask_prefix();
        assert!(!addr.scope().contains(Ipv6Scope::ISATAP));
        assert!(addr.scope().contains(Ipv6Scope::LINK_LOCAL));
    }

    #[test]
    fn test_std_conversion() {
        let addr = Ipv6Address::from(std::net::Ipv6Addr::LOCALHOST);
        assert!(addr.scope().contains(Ipv6Scope::LOOPBACK));
        let back: std::net::Ipv6Addr = addr.into();
        assert_eq!(back, std::net::Ipv6Addr::LOCALHOST);
    }
}
