//! The IPv4 address structure.

use crate::scope::{self, Ipv4Scope};
use oxiaddr_core::bits::BitAccess;
use oxiaddr_core::error::{AddrError, Result};

/// Largest IPv4 prefix length.
pub const MAX_PREFIX_LENGTH: u8 = 32;

/// An IPv4 address with optional prefix length and derived scope.
///
/// Created zeroed, populated by the parser in one pass, then treated as a
/// value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ipv4Address {
    octets: [u8; 4],
    prefix_length: Option<u8>,
    scope: Ipv4Scope,
    valid: bool,
}

impl Ipv4Address {
    /// Create a zeroed, not yet valid address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classified, valid address from its 32-bit value.
    pub fn from_u32(value: u32) -> Self {
        Self::from_octets(value.to_be_bytes())
    }

    /// Create a classified, valid address from four octets (MSB first).
    pub fn from_octets(octets: [u8; 4]) -> Self {
        let mut addr = Self {
            octets,
            ..Self::default()
        };
        addr.mark_valid();
        addr
    }

    /// The 32-bit value of the address.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The four octets, MSB first.
    pub fn to_octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Prefix length, if one was given.
    pub fn prefix_length(&self) -> Option<u8> {
        self.prefix_length
    }

    /// Set the prefix length (0-32).
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

    /// Derived scope flags.
    pub fn scope(&self) -> Ipv4Scope {
        self.scope
    }

    /// Whether the structure holds a parsed or constructed address.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Zero the address bits, scope and validity.
    pub fn clear(&mut self) {
        self.octets = [0; 4];
        self.scope = Ipv4Scope::empty();
        self.valid = false;
    }

    /// [`clear`](Self::clear) and additionally drop the prefix length.
    pub fn clear_all(&mut self) {
        self.clear();
        self.prefix_length = None;
    }

    /// Classify the current bits and flag the structure valid.
    pub(crate) fn mark_valid(&mut self) {
        self.scope = scope::classify(self.to_u32());
        self.valid = true;
    }
}

impl BitAccess for Ipv4Address {
    fn octets(&self) -> &[u8] {
        &self.octets
    }

    fn octets_mut(&mut self) -> &mut [u8] {
        &mut self.octets
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<std::net::Ipv4Addr> for Ipv4Address {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv4Address> for std::net::Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        std::net::Ipv4Addr::from(addr.octets)
    }
}
