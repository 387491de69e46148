//! IPv4 text renderings.

use crate::address::{Ipv4Address, MAX_PREFIX_LENGTH};
use oxiaddr_core::bits::BitAccess;
use oxiaddr_core::error::Result;
use oxiaddr_core::options::FormatOptions;
use std::fmt;
use tracing::trace;

/// Reverse-DNS zone for IPv4 addresses.
pub const IN_ADDR_ARPA: &str = "in-addr.arpa.";

impl Ipv4Address {
    /// Render as dotted decimal, appending `/prefix` when one is set.
    ///
    /// `MACHINE_READABLE` prepends `IPV4=`.
    ///
    /// ```
    /// use oxiaddr_core::FormatOptions;
    /// use oxiaddr_ipv4::parse;
    ///
    /// let addr = parse("192.0.2.1").unwrap();
    /// assert_eq!(addr.to_dotted(FormatOptions::DEFAULT), "192.0.2.1");
    /// assert_eq!(addr.to_dotted(FormatOptions::MACHINE_READABLE), "IPV4=192.0.2.1");
    /// ```
    pub fn to_dotted(&self, options: FormatOptions) -> String {
        let [a, b, c, d] = self.to_octets();
        let mut out = format!("{a}.{b}.{c}.{d}");
        if let Some(len) = self.prefix_length() {
            out.push_str(&format!("/{len}"));
        }
        if options.contains(FormatOptions::MACHINE_READABLE) {
            out.insert_str(0, "IPV4=");
        }
        out
    }

    /// Render as an `in-addr.arpa.` reverse-DNS name.
    ///
    /// Octets are emitted from the end bit downwards. Without an explicit bit
    /// selection in `options`, a set prefix length limits the name to the
    /// octets that hold prefix bits.
    ///
    /// ```
    /// use oxiaddr_core::FormatOptions;
    /// use oxiaddr_ipv4::parse;
    ///
    /// let addr = parse("192.168.1.2").unwrap();
    /// assert_eq!(
    ///     addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
    ///     "2.1.168.192.in-addr.arpa."
    /// );
    ///
    /// let net = parse("192.168.1.0/24").unwrap();
    /// assert_eq!(
    ///     net.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
    ///     "1.168.192.in-addr.arpa."
    /// );
    /// ```
    pub fn to_reverse_string(&self, options: FormatOptions) -> Result<String> {
        let bit_start: i32 = 1;
        let bit_end: i32 = match self.prefix_length() {
            Some(len) if !options.selects_bits() => i32::from(len),
            _ => i32::from(MAX_PREFIX_LENGTH),
        };
        trace!(bit_start, bit_end, "reverse IPv4 bit range");

        let mut out = String::new();
        let mut nbit = bit_end - 1;
        while nbit >= bit_start - 1 {
            let octet = self.get_octet((nbit / 8) as usize)?;
            out.push_str(&format!("{octet}."));
            nbit -= 8;
        }
        if bit_start == 1 {
            out.push_str(IN_ADDR_ARPA);
        }

        Ok(options.finish(out, true))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted(FormatOptions::DEFAULT))
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use oxiaddr_core::options::FormatOptions;

    #[test]
    fn test_to_dotted() {
        assert_eq!(parse("10.0.0.0/8").unwrap().to_string(), "10.0.0.0/8");
        assert_eq!(parse("0.0.0.0").unwrap().to_string(), "0.0.0.0");
        assert_eq!(
            parse("255.255.255.255").unwrap().to_string(),
            "255.255.255.255"
        );
    }

    #[test]
    fn test_reverse_full() {
        let addr = parse("10.1.2.3").unwrap();
        assert_eq!(
            addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
            "3.2.1.10.in-addr.arpa."
        );
    }

    #[test]
    fn test_reverse_prefix() {
        let addr = parse("10.1.2.3/16").unwrap();
        assert_eq!(
            addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
            "1.10.in-addr.arpa."
        );
        // explicit bit selection overrides the prefix
        assert_eq!(
            addr.to_reverse_string(FormatOptions::PRINT_START).unwrap(),
            "3.2.1.10.in-addr.arpa."
        );
        // a partial octet is still emitted
        let addr = parse("10.1.2.3/20").unwrap();
        assert_eq!(
            addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
            "2.1.10.in-addr.arpa."
        );
        let addr = parse("10.1.2.3/0").unwrap();
        assert_eq!(
            addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
            "in-addr.arpa."
        );
    }

    #[test]
    fn test_reverse_case_and_mirror() {
        let addr = parse("10.1.2.3").unwrap();
        assert_eq!(
            addr.to_reverse_string(FormatOptions::UPPERCASE).unwrap(),
            "3.2.1.10.IN-ADDR.ARPA."
        );
        assert_eq!(
            addr.to_reverse_string(FormatOptions::MIRRORED).unwrap(),
            "arpa.in-addr.10.1.2.3."
        );
    }
}
