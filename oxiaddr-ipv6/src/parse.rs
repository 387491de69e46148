//! IPv6 text parsers.
//!
//! The general parser accepts the colon-hex forms, optionally compressed with
//! `::`, optionally with a dotted IPv4 tail, and an optional `/prefix`. The
//! token and identifier parsers rewrite their input into that form and
//! delegate to it.

use crate::address::{Ipv6Address, MAX_PREFIX_LENGTH};
use crate::rfc1884;
use crate::scope::Ipv6Scope;
use oxiaddr_core::bits::BitAccess;
use oxiaddr_core::config::{MAX_IDENTIFIER_LEN, TOKEN_LEN, check_input_len, check_len};
use oxiaddr_core::error::{AddrError, Result};
use std::str::FromStr;
use tracing::{debug, trace};

/// Parse an IPv6 address with optional `/prefix`.
///
/// ```
/// use oxiaddr_ipv6::{Ipv6Scope, parse};
///
/// let addr = parse("fe80::1/64").unwrap();
/// assert_eq!(addr.dwords(), [0xfe80_0000, 0, 0, 1]);
/// assert_eq!(addr.prefix_length(), Some(64));
/// assert_eq!(addr.scope(), Ipv6Scope::LINK_LOCAL | Ipv6Scope::UNICAST);
///
/// assert!(parse("1::2::3").is_err());
/// assert!(parse("fe80::1/200").is_err());
/// ```
pub fn parse(input: &str) -> Result<Ipv6Address> {
    check_input_len(input)?;
    debug!(input, "parsing IPv6 address");

    let (addr_part, prefix_length) = split_prefix(input)?;

    let expanded = if addr_part.contains("::") {
        rfc1884::expand(addr_part)?
    } else {
        addr_part.to_string()
    };

    let colons = expanded.matches(':').count();
    let dots = expanded.matches('.').count();
    let hybrid = match (colons, dots) {
        (7, 0) => false,
        (6, 3) => true,
        _ => {
            let message = if expanded != addr_part {
                format!("given address expanded to '{expanded}' is not valid")
            } else {
                format!("given address '{addr_part}' is not valid")
            };
            return Err(AddrError::invalid_format(message));
        }
    };

    let mut words = [0u32; 8];
    let mut groups = expanded.split(':');
    let hex_groups = if hybrid { 6 } else { 8 };
    for (i, word) in words.iter_mut().take(hex_groups).enumerate() {
        let group = groups.next().unwrap_or_default();
        *word = parse_hex_group(group).ok_or_else(|| {
            AddrError::invalid_format(format!(
                "given address '{addr_part}' is not valid on position {i} ('{group}')"
            ))
        })?;
    }
    if hybrid {
        let tail = groups.next().unwrap_or_default();
        let ipv4 = oxiaddr_ipv4::parse(tail).map_err(|_| {
            AddrError::invalid_format(format!(
                "given compatv4/mapped address '{addr_part}' is not valid ('{tail}')"
            ))
        })?;
        let value = ipv4.to_u32();
        words[6] = value >> 16;
        words[7] = value & 0xffff;
    }
    trace!(?words, "words");

    let mut addr = Ipv6Address::new();
    for (i, word) in words.iter().enumerate() {
        addr.set_word(i, *word)?;
    }
    if let Some(len) = prefix_length {
        addr.set_prefix_length(len)?;
    }
    addr.mark_valid();
    debug!(scope = ?addr.scope(), "classified IPv6 address");

    if hybrid && !addr.scope().intersects(Ipv6Scope::EMBEDS_IPV4) {
        return Err(AddrError::inconsistent_form(addr_part));
    }

    Ok(addr)
}

/// Parse a 16-hex-digit token as the low 64 bits of an address.
///
/// ```
/// use oxiaddr_ipv6::parse_token;
///
/// let addr = parse_token("0200c0fffe000001").unwrap();
/// assert_eq!(addr.dwords(), [0, 0, 0x0200_c0ff, 0xfe00_0001]);
/// ```
pub fn parse_token(input: &str) -> Result<Ipv6Address> {
    debug!(input, "parsing token");
    if input.len() != TOKEN_LEN || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddrError::invalid_format(format!(
            "given token '{input}' is not valid (need {TOKEN_LEN} hex digits)"
        )));
    }

    let expanded = format!(
        "0:0:0:0:{}:{}:{}:{}",
        &input[0..4],
        &input[4..8],
        &input[8..12],
        &input[12..16]
    );
    parse(&expanded)
}

/// Parse an interface identifier (the colon-hex low 64 bits of an address).
///
/// ```
/// use oxiaddr_ipv6::parse_identifier;
///
/// let addr = parse_identifier("200:c0ff:fe00:1").unwrap();
/// assert_eq!(addr.dwords(), [0, 0, 0x0200_c0ff, 0xfe00_0001]);
/// ```
pub fn parse_identifier(input: &str) -> Result<Ipv6Address> {
    debug!(input, "parsing identifier");
    check_len(input, MAX_IDENTIFIER_LEN)?;
    parse(&format!("0:0:0:0:{input}"))
}

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

/// Hex digits whose value fits in 16 bits; extra leading zeros are accepted.
fn parse_hex_group(group: &str) -> Option<u32> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(group, 16).ok().filter(|word| *word <= 0xffff)
}

impl FromStr for Ipv6Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
