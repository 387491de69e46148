//! # OxiAddr-IPv4: IPv4 address handling
//!
//! Parsing, classification, formatting and registry lookup for IPv4
//! addresses.
//!
//! ## Features
//!
//! - **Parsers**: dotted decimal and eight-digit hex (optionally
//!   byte-reversed), each with an optional `/prefix`
//! - **Scope flags**: loopback, private, link-local, documentation,
//!   multicast and reserved space
//! - **Formatters**: dotted decimal and `in-addr.arpa.` reverse names
//! - **Registry resolver**: longest-prefix match over a static assignment
//!   table, narrowed by a first-octet hint table
//!
//! ## Example
//!
//! ```rust
//! use oxiaddr_core::{BitAccess, FormatOptions};
//! use oxiaddr_ipv4::{Ipv4Scope, Registry, parse};
//!
//! let addr = parse("192.0.2.1/24").unwrap();
//! assert!(addr.scope().contains(Ipv4Scope::DOCUMENTATION));
//! assert_eq!(addr.get_octet(3).unwrap(), 1);
//! assert_eq!(addr.registry(), Registry::Reserved("RFC3330"));
//! assert_eq!(
//!     addr.to_reverse_string(FormatOptions::DEFAULT).unwrap(),
//!     "2.0.192.in-addr.arpa."
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod address;
mod format;
mod parse;
pub mod registry;
pub mod scope;
pub mod table;

pub use address::{Ipv4Address, MAX_PREFIX_LENGTH};
pub use format::IN_ADDR_ARPA;
pub use parse::{parse, parse_hex};
pub use registry::Registry;
pub use scope::{Ipv4Range, Ipv4Scope};
