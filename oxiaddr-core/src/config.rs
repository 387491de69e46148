//! Input limits enforced at the parsing boundary.

use crate::error::{AddrError, Result};

/// Longest accepted textual input, in bytes.
pub const MAX_INPUT_LEN: usize = 1024;

/// Longest accepted interface identifier (`xxxx:xxxx:xxxx:xxxx`).
pub const MAX_IDENTIFIER_LEN: usize = 19;

/// Exact length of a 64-bit token in hex digits.
pub const TOKEN_LEN: usize = 16;

/// Exact length of a hexadecimal IPv4 address.
pub const HEX_IPV4_LEN: usize = 8;

/// Reject input longer than [`MAX_INPUT_LEN`].
pub fn check_input_len(input: &str) -> Result<()> {
    check_len(input, MAX_INPUT_LEN)
}

/// Reject input longer than `max` bytes.
pub fn check_len(input: &str, max: usize) -> Result<()> {
    if input.len() > max {
        return Err(AddrError::input_too_long(input.len(), max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_input_len() {
        assert!(check_input_len("::1").is_ok());
        let long = "1".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(
            check_input_len(&long),
            Err(AddrError::input_too_long(MAX_INPUT_LEN + 1, MAX_INPUT_LEN))
        );
        assert!(check_input_len(&long[..MAX_INPUT_LEN]).is_ok());
    }
}
