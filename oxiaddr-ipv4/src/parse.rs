//! IPv4 text parsers.
//!
//! Two input forms are accepted:
//!
//! - dotted decimal, `d.d.d.d[/prefix]`
//! - eight hex digits, `xxxxxxxx[/prefix]`, optionally byte-reversed as
//!   found in some reverse-DNS hex forms

use crate::address::{Ipv4Address, MAX_PREFIX_LENGTH};
use oxiaddr_core::bits::BitAccess;
use oxiaddr_core::config::{HEX_IPV4_LEN, check_input_len};
use oxiaddr_core::error::{AddrError, Result};
use std::str::FromStr;
use tracing::{debug, trace};

/// Parse a dotted-decimal IPv4 address with optional `/prefix`.
///
/// ```
/// use oxiaddr_ipv4::parse;
///
/// let addr = parse("192.168.1.1/24").unwrap();
/// assert_eq!(addr.to_u32(), 0xc0a8_0101);
/// assert_eq!(addr.prefix_length(), Some(24));
/// assert!(parse("1.2.3.256").is_err());
/// ```
pub fn parse(input: &str) -> Result<Ipv4Address> {
    check_input_len(input)?;
    debug!(input, "parsing dotted IPv4 address");

    let (addr_part, prefix_length) = split_prefix(input)?;

    let dots = addr_part.matches('.').count();
    if dots != 3 {
        return Err(AddrError::invalid_format(format!(
            "given address '{addr_part}' is not valid (only {dots} dots)"
        )));
    }

    let mut octets = [0u32; 4];
    for (i, field) in addr_part.split('.').enumerate() {
        octets[i] = parse_decimal_octet(field).ok_or_else(|| {
            AddrError::invalid_format(format!(
                "given IPv4 address '{addr_part}' is not valid ('{field}' on position {})",
                i + 1
            ))
        })?;
    }

    build(&octets, prefix_length)
}

/// Parse an eight-digit hexadecimal IPv4 address with optional `/prefix`.
///
/// With `reverse` set the bytes are read least significant first.
///
/// ```
/// use oxiaddr_ipv4::parse_hex;
///
/// assert_eq!(parse_hex("c0a80101", false).unwrap().to_u32(), 0xc0a8_0101);
/// assert_eq!(parse_hex("0101a8c0", true).unwrap().to_u32(), 0xc0a8_0101);
/// ```
pub fn parse_hex(input: &str, reverse: bool) -> Result<Ipv4Address> {
    check_input_len(input)?;
    debug!(input, reverse, "parsing hexadecimal IPv4 address");

    let (addr_part, prefix_length) = split_prefix(input)?;

    if addr_part.len() != HEX_IPV4_LEN || !addr_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddrError::invalid_format(format!(
            "given hexadecimal IPv4 address '{addr_part}' is not valid (not proper length)"
        )));
    }

    let mut octets = [0u32; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let digits = &addr_part[i * 2..i * 2 + 2];
        *octet = u32::from_str_radix(digits, 16)
            .map_err(|e| AddrError::invalid_format(format!("'{digits}': {e}")))?;
    }
    if reverse {
        octets.reverse();
    }

    build(&octets, prefix_length)
}

/// Split `addr[/prefix]` and validate the prefix length.
fn split_prefix(input: &str) -> Result<(&str, Option<u8>)> {
    let Some((addr_part, prefix)) = input.split_once('/') else {
        return Ok((input, None));
    };

    let prefix_length = prefix
        .parse::<u8>()
        .ok()
        .filter(|len| *len <= MAX_PREFIX_LENGTH)
        .ok_or_else(|| {
            AddrError::invalid_prefix_length(format!("illegal prefix length: '{prefix}'"))
        })?;

    trace!(prefix_length, "prefix length");
    Ok((addr_part, Some(prefix_length)))
}

fn parse_decimal_octet(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|v| *v <= 0xff)
}

fn build(octets: &[u32; 4], prefix_length: Option<u8>) -> Result<Ipv4Address> {
    let mut addr = Ipv4Address::new();
    for (i, octet) in octets.iter().enumerate() {
        addr.set_octet(i, *octet)?;
    }
    if let Some(len) = prefix_length {
        addr.set_prefix_length(len)?;
    }
    addr.mark_valid();

    debug!(
        value = %format!("{:08x}", addr.to_u32()),
        scope = ?addr.scope(),
        "parsed IPv4 address"
    );
    Ok(addr)
}

impl FromStr for Ipv4Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
