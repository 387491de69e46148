//! Error types for OxiAddr operations.
//!
//! Parser and formatter failures are recoverable and carry a human-readable
//! message. Accessor failures (`IndexOutOfRange`, `ValueOutOfRange`) signal a
//! broken caller contract and are reported through the same type so they can
//! be propagated with `?` instead of aborting.

use thiserror::Error;

/// The main error type for OxiAddr operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    /// Malformed address syntax.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the syntax error.
        message: String,
    },

    /// Prefix length outside its numeric range, or not usable for the
    /// requested rendering.
    #[error("Invalid prefix length: {message}")]
    InvalidPrefixLength {
        /// Description of the prefix length error.
        message: String,
    },

    /// A field value exceeds its bit width.
    #[error("Value {value:#x} out of range (max {max:#x})")]
    ValueOutOfRange {
        /// The rejected value.
        value: u64,
        /// Largest value the field can hold.
        max: u64,
    },

    /// Accessor index outside the structural bounds of the address.
    #[error("Index {index} out of range (max {max})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Largest valid index.
        max: usize,
    },

    /// Literal syntax implies a scope the classifier does not confirm.
    #[error("Address '{input}' is not a valid compatv4/mapped/ISATAP address")]
    InconsistentAddressForm {
        /// The offending input.
        input: String,
    },

    /// Input exceeds the accepted length.
    #[error("Input too long: {length} bytes (max {max})")]
    InputTooLong {
        /// Length of the rejected input.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

/// Result type alias for OxiAddr operations.
pub type Result<T> = std::result::Result<T, AddrError>;

impl AddrError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid prefix length error.
    pub fn invalid_prefix_length(message: impl Into<String>) -> Self {
        Self::InvalidPrefixLength {
            message: message.into(),
        }
    }

    /// Create a value out of range error.
    pub fn value_out_of_range(value: u64, max: u64) -> Self {
        Self::ValueOutOfRange { value, max }
    }

    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create an inconsistent address form error.
    pub fn inconsistent_form(input: impl Into<String>) -> Self {
        Self::InconsistentAddressForm {
            input: input.into(),
        }
    }

    /// Create an input too long error.
    pub fn input_too_long(length: usize, max: usize) -> Self {
        Self::InputTooLong { length, max }
    }
}
