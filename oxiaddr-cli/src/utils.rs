//! Utility functions for the CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use oxiaddr_ipv4::Ipv4Address;
use oxiaddr_ipv6::Ipv6Address;
use std::fmt;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// How an input string is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputKind {
    /// Detect from the text: a colon means IPv6, otherwise dotted IPv4
    #[default]
    Auto,
    /// Dotted-decimal IPv4, optionally with /prefix
    Ipv4,
    /// Eight hex digits
    Ipv4hex,
    /// Eight hex digits, least significant byte first
    Ipv4hexReverse,
    /// Colon-hex IPv6, optionally compressed, hybrid or with /prefix
    Ipv6,
    /// 64-bit interface token as 16 hex digits
    Token,
    /// Interface identifier in colon-hex form (e.g. 210:a4ff:fe01:2345)
    Identifier,
}

/// A parsed address of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// IPv4 address
    V4(Ipv4Address),
    /// IPv6 address
    V6(Ipv6Address),
}

impl Address {
    /// Parse `input` according to `kind`.
    pub fn parse(input: &str, kind: InputKind) -> oxiaddr_core::Result<Self> {
        let input = input.trim();
        let kind = match kind {
            InputKind::Auto if input.contains(':') => InputKind::Ipv6,
            InputKind::Auto => InputKind::Ipv4,
            other => other,
        };
        tracing::debug!(input, ?kind, "parsing address");

        Ok(match kind {
            InputKind::Ipv4 | InputKind::Auto => Self::V4(oxiaddr_ipv4::parse(input)?),
            InputKind::Ipv4hex => Self::V4(oxiaddr_ipv4::parse_hex(input, false)?),
            InputKind::Ipv4hexReverse => Self::V4(oxiaddr_ipv4::parse_hex(input, true)?),
            InputKind::Ipv6 => Self::V6(oxiaddr_ipv6::parse(input)?),
            InputKind::Token => Self::V6(oxiaddr_ipv6::parse_token(input)?),
            InputKind::Identifier => Self::V6(oxiaddr_ipv6::parse_identifier(input)?),
        })
    }

    /// Family name used in reports.
    pub fn family(&self) -> &'static str {
        match self {
            Self::V4(_) => "IPv4",
            Self::V6(_) => "IPv6",
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(addr) => fmt::Display::fmt(addr, f),
            Self::V6(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

/// Read the non-empty, non-comment lines of a file, or of stdin for `-`.
pub fn read_lines(source: &Path) -> io::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if source.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(std::fs::File::open(source)?))
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(trimmed.to_string());
    }
    Ok(lines)
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detection() {
        assert!(matches!(
            Address::parse("192.0.2.1", InputKind::Auto),
            Ok(Address::V4(_))
        ));
        assert!(matches!(
            Address::parse(" 2001:db8::1 ", InputKind::Auto),
            Ok(Address::V6(_))
        ));
        assert!(Address::parse("bogus", InputKind::Auto).is_err());
    }

    #[test]
    fn test_explicit_kinds() {
        let Ok(Address::V4(v4)) = Address::parse("0201a8c0", InputKind::Ipv4hexReverse) else {
            panic!("expected IPv4");
        };
        assert_eq!(v4.to_string(), "192.168.1.2");

        let Ok(Address::V6(v6)) = Address::parse("0210a4fffe012345", InputKind::Token) else {
            panic!("expected IPv6");
        };
        assert_eq!(v6.to_string(), "::210:a4ff:fe01:2345");

        let Ok(Address::V6(id)) = Address::parse("210:a4ff:fe01:2345", InputKind::Identifier)
        else {
            panic!("expected IPv6");
        };
        assert_eq!(id, v6);
    }

    #[test]
    fn test_family() {
        let addr = Address::parse("::1", InputKind::Auto).unwrap();
        assert_eq!(addr.family(), "IPv6");
        assert_eq!(addr.to_string(), "::1");
    }
}
