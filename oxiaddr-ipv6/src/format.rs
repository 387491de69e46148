//! IPv6 text renderings.
//!
//! Every renderer builds the structural text first and then hands it to
//! [`FormatOptions::finish`] for the case and mirror pass.

use crate::address::{Ipv6Address, MAX_PREFIX_LENGTH, prefix_mask};
use oxiaddr_core::error::{AddrError, Result};
use oxiaddr_core::options::FormatOptions;
use std::fmt;
use tracing::{debug, trace};

/// Reverse-DNS zone appended to nibble names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReverseZone {
    /// `ip6.int.` (RFC 1886)
    Ip6Int,
    /// `ip6.arpa.` (RFC 3152)
    #[default]
    Ip6Arpa,
}

impl ReverseZone {
    /// The zone suffix, with trailing root dot.
    pub fn suffix(&self) -> &'static str {
        match self {
            ReverseZone::Ip6Int => "ip6.int.",
            ReverseZone::Ip6Arpa => "ip6.arpa.",
        }
    }
}

/// IPv6 output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ipv6Format {
    /// `2001:db8::1`
    Compressed,
    /// `2001:db8:0:0:0:0:0:1`
    Uncompressed,
    /// `2001:0db8:0000:0000:0000:0000:0000:0001`
    FullUncompressed,
    /// The low 64 bits as 16 hex digits.
    TokenLsb64,
    /// Dot-separated nibbles in the given zone.
    ReverseNibble(ReverseZone),
    /// `\[x<hex>/<bits>].ip6.arpa.`
    Bitstring,
}

impl Ipv6Address {
    /// Render in the given style.
    pub fn format(&self, style: Ipv6Format, options: FormatOptions) -> Result<String> {
        debug!(?style, ?options, "formatting IPv6 address");
        match style {
            Ipv6Format::Compressed => self.to_compressed(options),
            Ipv6Format::Uncompressed => self.to_uncompressed(options),
            Ipv6Format::FullUncompressed => self.to_full_uncompressed(options),
            Ipv6Format::TokenLsb64 => Ok(self.to_token_lsb64(options)),
            Ipv6Format::ReverseNibble(zone) => self.to_reverse_nibbles(zone, options),
            Ipv6Format::Bitstring => self.to_bitstring(options),
        }
    }

    /// Shortest `::` form, with `/prefix` appended when set.
    ///
    /// Prefix-only and suffix-only selections are not available here.
    pub fn to_compressed(&self, options: FormatOptions) -> Result<String> {
        if options.intersects(FormatOptions::PRINT_PREFIX | FormatOptions::PRINT_SUFFIX) {
            return Err(AddrError::invalid_format(
                "prefix/suffix selection requires the uncompressed format",
            ));
        }
        let compressed = crate::rfc1884::compress(&self.render_groups(false))?;
        Ok(options.finish(self.append_prefix_length(compressed), false))
    }

    /// Eight groups without leading zeros.
    ///
    /// ```
    /// use oxiaddr_core::FormatOptions;
    /// use oxiaddr_ipv6::parse;
    ///
    /// let addr = parse("2001:db8::1/64").unwrap();
    /// assert_eq!(
    ///     addr.to_uncompressed(FormatOptions::DEFAULT).unwrap(),
    ///     "2001:db8:0:0:0:0:0:1/64"
    /// );
    /// assert_eq!(
    ///     addr.to_uncompressed(FormatOptions::PRINT_PREFIX).unwrap(),
    ///     "2001:db8:0:0"
    /// );
    /// assert_eq!(
    ///     addr.to_uncompressed(FormatOptions::PRINT_SUFFIX).unwrap(),
    ///     "0:0:0:1"
    /// );
    /// ```
    pub fn to_uncompressed(&self, options: FormatOptions) -> Result<String> {
        self.render_uncompressed(options, false)
    }

    /// Eight groups, each zero-padded to four hex digits.
    pub fn to_full_uncompressed(&self, options: FormatOptions) -> Result<String> {
        self.render_uncompressed(options, true)
    }

    /// Words 4 to 7 as sixteen hex digits.
    pub fn to_token_lsb64(&self, options: FormatOptions) -> String {
        let w = self.words();
        let token = format!("{:04x}{:04x}{:04x}{:04x}", w[4], w[5], w[6], w[7]);
        options.finish(token, false)
    }

    /// Reverse-DNS nibble name.
    ///
    /// The rendered bit range defaults to the whole address. A set prefix
    /// length ends the range unless `PRINT_SUFFIX` asks for the bits after
    /// it; `PRINT_START`/`PRINT_END` use the address's explicit bit range
    /// instead. Range boundaries must fall on nibbles. The zone is appended
    /// only when the range starts at the first bit.
    ///
    /// ```
    /// use oxiaddr_core::FormatOptions;
    /// use oxiaddr_ipv6::{ReverseZone, parse};
    ///
    /// let addr = parse("2001:db8::/32").unwrap();
    /// assert_eq!(
    ///     addr.to_reverse_nibbles(ReverseZone::Ip6Arpa, FormatOptions::DEFAULT).unwrap(),
    ///     "8.b.d.0.1.0.0.2.ip6.arpa."
    /// );
    /// ```
    pub fn to_reverse_nibbles(&self, zone: ReverseZone, options: FormatOptions) -> Result<String> {
        let (start, end) = self.nibble_range(options)?;
        trace!(start, end, "reverse nibble bit range");

        let octets = self.to_octets();
        let mut out = String::new();
        for nibble in ((start - 1) / 4..end / 4).rev() {
            let octet = octets[usize::from(nibble / 2)];
            let digit = if nibble % 2 == 0 { octet >> 4 } else { octet & 0x0f };
            out.push_str(&format!("{digit:x}."));
        }
        if start == 1 {
            out.push_str(zone.suffix());
        } else {
            out.pop();
        }

        Ok(options.finish(out, true))
    }

    /// Bitstring label `\[x<hex>/<bits>].ip6.arpa.` over the prefix bits
    /// (all 128 when no prefix length is set).
    ///
    /// ```
    /// use oxiaddr_core::FormatOptions;
    /// use oxiaddr_ipv6::parse;
    ///
    /// let addr = parse("3ffe:ffff::/32").unwrap();
    /// assert_eq!(
    ///     addr.to_bitstring(FormatOptions::DEFAULT).unwrap(),
    ///     r"\[x3ffeffff/32].ip6.arpa."
    /// );
    /// ```
    pub fn to_bitstring(&self, options: FormatOptions) -> Result<String> {
        let bits = self.prefix_length().unwrap_or(MAX_PREFIX_LENGTH);
        if bits == 0 {
            return Err(AddrError::invalid_prefix_length(
                "cannot build a bitstring label for prefix length 0",
            ));
        }
        let digits = usize::from(bits).div_ceil(4);
        let hex = format!("{:032x}", self.to_u128() & prefix_mask(bits));
        let label = format!("\\[x{}/{bits}].ip6.arpa.", &hex[..digits]);
        Ok(options.finish(label, false))
    }

    fn render_uncompressed(&self, options: FormatOptions, padded: bool) -> Result<String> {
        let text = if options.contains(FormatOptions::PRINT_PREFIX) {
            self.render_prefix(padded)?
        } else if options.contains(FormatOptions::PRINT_SUFFIX) {
            self.render_suffix(padded)?
        } else {
            self.append_prefix_length(self.render_groups(padded))
        };
        Ok(options.finish(text, false))
    }

    /// All groups; hybrid scopes end in dotted decimal.
    fn render_groups(&self, padded: bool) -> String {
        let words = self.words();
        let mut groups: Vec<String> = words[..6].iter().map(|w| hex_group(*w, padded)).collect();
        if self.scope().is_hybrid() {
            groups.push(self.dotted_tail());
        } else {
            groups.extend(words[6..].iter().map(|w| hex_group(*w, padded)));
        }
        groups.join(":")
    }

    /// Groups holding prefix bits.
    fn render_prefix(&self, padded: bool) -> Result<String> {
        let len = self.selection_prefix_length("prefix")?;
        if len == 0 {
            return Err(AddrError::invalid_prefix_length(
                "cannot print prefix of an address with prefix length 0",
            ));
        }
        let last = usize::from((len - 1) >> 4);
        let words = self.words();
        let groups: Vec<String> = words[..=last].iter().map(|w| hex_group(*w, padded)).collect();
        Ok(groups.join(":"))
    }

    /// Groups from the one holding the first suffix bit to the end.
    fn render_suffix(&self, padded: bool) -> Result<String> {
        let len = self.selection_prefix_length("suffix")?;
        if len == MAX_PREFIX_LENGTH {
            return Err(AddrError::invalid_prefix_length(
                "cannot print suffix of an address with prefix length 128",
            ));
        }
        let first = usize::from(len >> 4);
        let words = self.words();
        let mut groups = Vec::new();
        for (i, word) in words.iter().enumerate().skip(first) {
            if i == 6 && self.scope().is_hybrid() {
                groups.push(self.dotted_tail());
                break;
            }
            groups.push(hex_group(*word, padded));
        }
        Ok(groups.join(":"))
    }

    /// Prefix length for a prefix/suffix selection, checked against the
    /// embedded IPv4 tail of hybrid scopes.
    fn selection_prefix_length(&self, part: &str) -> Result<u8> {
        let len = self.prefix_length().ok_or_else(|| {
            AddrError::invalid_prefix_length(format!(
                "cannot print {part} of an address without prefix length"
            ))
        })?;
        if self.scope().is_hybrid() && len > 96 {
            return Err(AddrError::invalid_prefix_length(format!(
                "cannot print {part} of a compatv4/mapped address with prefix length bigger than 96"
            )));
        }
        Ok(len)
    }

    fn nibble_range(&self, options: FormatOptions) -> Result<(u16, u16)> {
        let (mut start, mut end) = (1u16, u16::from(MAX_PREFIX_LENGTH));
        if options.uses_start_end() {
            let (bit_start, bit_end) = self.bit_range();
            if options.contains(FormatOptions::PRINT_START) {
                start = u16::from(bit_start);
            }
            if options.contains(FormatOptions::PRINT_END) {
                end = u16::from(bit_end);
            }
        } else if let Some(len) = self.prefix_length() {
            if options.contains(FormatOptions::PRINT_SUFFIX) {
                start = u16::from(len) + 1;
            } else {
                end = u16::from(len);
            }
        } else if options.selects_bits() {
            return Err(AddrError::invalid_prefix_length(
                "prefix/suffix selection needs a prefix length",
            ));
        }

        if (start - 1) % 4 != 0 || end % 4 != 0 {
            return Err(AddrError::invalid_prefix_length(format!(
                "bit range {start}-{end} is not nibble aligned"
            )));
        }
        if start > end && !(start == 1 && end == 0) {
            return Err(AddrError::invalid_prefix_length(format!(
                "bit range {start}-{end} is empty"
            )));
        }
        Ok((start, end))
    }

    fn dotted_tail(&self) -> String {
        let o = self.to_octets();
        format!("{}.{}.{}.{}", o[12], o[13], o[14], o[15])
    }

    fn append_prefix_length(&self, mut text: String) -> String {
        if let Some(len) = self.prefix_length() {
            text.push_str(&format!("/{len}"));
        }
        text
    }
}

fn hex_group(word: u16, padded: bool) -> String {
    if padded {
        format!("{word:04x}")
    } else {
        format!("{word:x}")
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .to_compressed(FormatOptions::DEFAULT)
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const ARPA: ReverseZone = ReverseZone::Ip6Arpa;

    #[test]
    fn test_compressed() {
        assert_eq!(parse("2001:db8:0:0:0:0:0:1").unwrap().to_string(), "2001:db8::1");
        assert_eq!(parse("0:0:0:0:0:0:0:0").unwrap().to_string(), "::");
        assert_eq!(parse("fe80::1/64").unwrap().to_string(), "fe80::1/64");
        assert_eq!(parse("::ffff:1.2.3.4").unwrap().to_string(), "::ffff:1.2.3.4");
        assert_eq!(parse("1:0:2:0:3:0:4:0").unwrap().to_string(), "1:0:2:0:3:0:4:0");
    }

    #[test]
    fn test_compressed_rejects_selection() {
        let addr = parse("2001:db8::1/64").unwrap();
        assert!(matches!(
            addr.to_compressed(FormatOptions::PRINT_PREFIX),
            Err(AddrError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_uncompressed_styles() {
        let addr = parse("2001:db8::abc:1").unwrap();
        assert_eq!(
            addr.to_uncompressed(FormatOptions::DEFAULT).unwrap(),
            "2001:db8:0:0:0:0:abc:1"
        );
        assert_eq!(
            addr.to_full_uncompressed(FormatOptions::DEFAULT).unwrap(),
            "2001:0db8:0000:0000:0000:0000:0abc:0001"
        );
        assert_eq!(
            addr.to_full_uncompressed(FormatOptions::UPPERCASE).unwrap(),
            "2001:0DB8:0000:0000:0000:0000:0ABC:0001"
        );
    }

    #[test]
    fn test_hybrid_rendering() {
        let addr = parse("::ffff:10.1.2.3/96").unwrap();
        assert_eq!(
            addr.to_uncompressed(FormatOptions::DEFAULT).unwrap(),
            "0:0:0:0:0:ffff:10.1.2.3/96"
        );
        assert_eq!(
            addr.to_full_uncompressed(FormatOptions::DEFAULT).unwrap(),
            "0000:0000:0000:0000:0000:ffff:10.1.2.3/96"
        );
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_SUFFIX).unwrap(),
            "10.1.2.3"
        );
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_PREFIX).unwrap(),
            "0:0:0:0:0:ffff"
        );
    }

    #[test]
    fn test_prefix_suffix_boundaries() {
        let mut addr = parse("2001:db8::1/0").unwrap();
        assert!(matches!(
            addr.to_uncompressed(FormatOptions::PRINT_PREFIX),
            Err(AddrError::InvalidPrefixLength { .. })
        ));
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_SUFFIX).unwrap(),
            "2001:db8:0:0:0:0:0:1"
        );

        addr.set_prefix_length(128).unwrap();
        assert!(matches!(
            addr.to_uncompressed(FormatOptions::PRINT_SUFFIX),
            Err(AddrError::InvalidPrefixLength { .. })
        ));
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_PREFIX).unwrap(),
            "2001:db8:0:0:0:0:0:1"
        );

        let mapped = parse("::ffff:1.2.3.4/100").unwrap();
        assert!(matches!(
            mapped.to_uncompressed(FormatOptions::PRINT_PREFIX),
            Err(AddrError::InvalidPrefixLength { .. })
        ));
        assert!(matches!(
            mapped.to_uncompressed(FormatOptions::PRINT_SUFFIX),
            Err(AddrError::InvalidPrefixLength { .. })
        ));

        let bare = parse("2001:db8::1").unwrap();
        assert!(bare.to_uncompressed(FormatOptions::PRINT_PREFIX).is_err());
    }

    #[test]
    fn test_prefix_partial_group() {
        let addr = parse("2001:db8:1234::/36").unwrap();
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_PREFIX).unwrap(),
            "2001:db8:1234"
        );
        assert_eq!(
            addr.to_uncompressed(FormatOptions::PRINT_SUFFIX).unwrap(),
            "1234:0:0:0:0:0"
        );
    }

    #[test]
    fn test_token_lsb64() {
        let addr = parse("fe80::210:a4ff:fe01:2345").unwrap();
        assert_eq!(addr.to_token_lsb64(FormatOptions::DEFAULT), "0210a4fffe012345");
        assert_eq!(addr.to_token_lsb64(FormatOptions::UPPERCASE), "0210A4FFFE012345");
    }

    #[test]
    fn test_reverse_full() {
        let addr = parse("2001:db8::1").unwrap();
        let expected = "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";
        assert_eq!(addr.to_reverse_nibbles(ARPA, FormatOptions::DEFAULT).unwrap(), expected);
        assert!(
            addr.to_reverse_nibbles(ReverseZone::Ip6Int, FormatOptions::DEFAULT)
                .unwrap()
                .ends_with(".2.ip6.int.")
        );
    }

    #[test]
    fn test_reverse_prefix_and_suffix() {
        let addr = parse("2001:db8:0:1::1/64").unwrap();
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::DEFAULT).unwrap(),
            "1.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa."
        );
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::PRINT_PREFIX).unwrap(),
            "1.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa."
        );
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::PRINT_SUFFIX).unwrap(),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0"
        );
    }

    #[test]
    fn test_reverse_start_end() {
        let mut addr = parse("2001:db8::1").unwrap();
        addr.set_bit_range(17, 32).unwrap();
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::PRINT_START | FormatOptions::PRINT_END)
                .unwrap(),
            "8.b.d.0"
        );
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::PRINT_END).unwrap(),
            "8.b.d.0.1.0.0.2.ip6.arpa."
        );
    }

    #[test]
    fn test_reverse_alignment() {
        let addr = parse("2001:db8::/30").unwrap();
        assert!(matches!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::DEFAULT),
            Err(AddrError::InvalidPrefixLength { .. })
        ));
        let addr = parse("::/0").unwrap();
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::DEFAULT).unwrap(),
            "ip6.arpa."
        );
        let addr = parse("::1/128").unwrap();
        assert!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::PRINT_SUFFIX)
                .is_err()
        );
    }

    #[test]
    fn test_reverse_case_and_mirror() {
        let addr = parse("abcd::/16").unwrap();
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::UPPERCASE).unwrap(),
            "D.C.B.A.IP6.ARPA."
        );
        assert_eq!(
            addr.to_reverse_nibbles(ARPA, FormatOptions::MIRRORED).unwrap(),
            "arpa.ip6.a.b.c.d."
        );
    }

    #[test]
    fn test_bitstring() {
        let addr = parse("2001:db8::1").unwrap();
        assert_eq!(
            addr.to_bitstring(FormatOptions::DEFAULT).unwrap(),
            r"\[x20010db8000000000000000000000001/128].ip6.arpa."
        );
        // trailing bits beyond the prefix are cleared
        let addr = parse("2001:dbff::/29").unwrap();
        assert_eq!(
            addr.to_bitstring(FormatOptions::DEFAULT).unwrap(),
            r"\[x2001dbf8/29].ip6.arpa."
        );
        assert!(parse("::/0").unwrap().to_bitstring(FormatOptions::DEFAULT).is_err());
    }

    #[test]
    fn test_format_dispatch() {
        let addr = parse("fe80::1").unwrap();
        assert_eq!(
            addr.format(Ipv6Format::Compressed, FormatOptions::DEFAULT).unwrap(),
            "fe80::1"
        );
        assert_eq!(
            addr.format(Ipv6Format::TokenLsb64, FormatOptions::DEFAULT).unwrap(),
            "0000000000000001"
        );
        assert_eq!(ReverseZone::default().suffix(), "ip6.arpa.");
    }
}
