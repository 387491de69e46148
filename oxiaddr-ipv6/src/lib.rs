//! # OxiAddr-IPv6: IPv6 address handling
//!
//! Parsing, classification and formatting of IPv6 addresses.
//!
//! ## Features
//!
//! - **Parser**: colon-hex with optional `::` compression, dotted IPv4 tails
//!   for compat-v4, mapped and ISATAP addresses, and `/prefix`
//! - **Token/identifier parsers**: the low 64 bits as 16 hex digits or as a
//!   colon-hex interface identifier
//! - **Classifier**: ordered rule set producing non-exclusive
//!   [`Ipv6Scope`] flags
//! - **Formatters**: compressed, uncompressed, full-uncompressed,
//!   prefix/suffix-only, token, reverse nibbles (`ip6.int.`/`ip6.arpa.`)
//!   and bitstring labels
//! - **Mask operations**: clear the suffix or the prefix in place
//!
//! ## Data flow
//!
//! ```text
//! text ──► parse ──► words ──► classify ──► Ipv6Address ──► format ──► text
//!            │                                   │
//!            └── rfc1884::expand     rfc1884::compress ──┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiaddr_core::FormatOptions;
//! use oxiaddr_ipv6::{Ipv6Format, Ipv6Scope, parse};
//!
//! let addr = parse("2001:db8::1").unwrap();
//! assert_eq!(addr.scope(), Ipv6Scope::UNICAST | Ipv6Scope::PRODUCTIVE);
//! assert_eq!(
//!     addr.format(Ipv6Format::FullUncompressed, FormatOptions::DEFAULT).unwrap(),
//!     "2001:0db8:0000:0000:0000:0000:0000:0001"
//! );
//!
//! let mapped = parse("::ffff:192.0.2.1").unwrap();
//! assert_eq!(mapped.embedded_ipv4().unwrap().to_string(), "192.0.2.1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod address;
mod format;
mod parse;
pub mod rfc1884;
pub mod scope;

pub use address::{Ipv6Address, MAX_PREFIX_LENGTH};
pub use format::{Ipv6Format, ReverseZone};
pub use parse::{parse, parse_identifier, parse_token};
pub use scope::{Ipv6Scope, classify};
