//! # OxiAddr Core
//!
//! Core components for the OxiAddr address library.
//!
//! This crate provides the building blocks shared by the IPv4 and IPv6
//! crates:
//!
//! - [`bits`]: Range-checked octet/word/dword access in network byte order
//! - [`options`]: Format option flags
//! - [`text`]: Case and label-order string transforms
//! - [`config`]: Input limits
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Frontend                                            │
//! │     oxiaddr CLI (info, convert, registry, batch)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Address families                                    │
//! │     IPv6: parser, classifier, formatters, RFC 1884      │
//! │     IPv4: parser, formatter, registry resolver          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     BitAccess, FormatOptions, text transforms, errors   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiaddr_core::FormatOptions;
//!
//! let opts = FormatOptions::UPPERCASE | FormatOptions::PRINT_PREFIX;
//! assert!(opts.selects_bits());
//! assert_eq!(opts.finish("2001:db8".to_string(), false), "2001:DB8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bits;
pub mod config;
pub mod error;
pub mod options;
pub mod text;

// Re-exports for convenience
pub use bits::BitAccess;
pub use error::{AddrError, Result};
pub use options::FormatOptions;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bits::BitAccess;
    pub use crate::error::{AddrError, Result};
    pub use crate::options::FormatOptions;
}
