//! Octet, word and dword access over fixed-width address buffers.
//!
//! Addresses are stored as byte arrays in network byte order. The
//! [`BitAccess`] trait composes 16-bit words and 32-bit dwords from those
//! bytes, MSB first, and checks every index and value against the width of
//! the implementing type.
//!
//! # Example
//!
//! ```
//! use oxiaddr_core::bits::BitAccess;
//!
//! struct Raw([u8; 4]);
//!
//! impl BitAccess for Raw {
//!     fn octets(&self) -> &[u8] {
//!         &self.0
//!     }
//!     fn octets_mut(&mut self) -> &mut [u8] {
//!         &mut self.0
//!     }
//! }
//!
//! let mut raw = Raw([0; 4]);
//! raw.set_word(1, 0xc0a8).unwrap();
//! assert_eq!(raw.get_octet(2).unwrap(), 0xc0);
//! assert_eq!(raw.get_dword(0).unwrap(), 0x0000_c0a8);
//! assert!(raw.get_octet(4).is_err());
//! ```

use crate::error::{AddrError, Result};

/// Range-checked big-endian access to the bytes of an address.
///
/// Implementors only expose their byte buffer; the field accessors are
/// provided. Buffer lengths must be a multiple of 4.
pub trait BitAccess {
    /// The address bytes, most significant first.
    fn octets(&self) -> &[u8];

    /// Mutable access to the address bytes.
    fn octets_mut(&mut self) -> &mut [u8];

    /// Number of 8-bit fields.
    fn octet_count(&self) -> usize {
        self.octets().len()
    }

    /// Number of 16-bit fields.
    fn word_count(&self) -> usize {
        self.octet_count() / 2
    }

    /// Number of 32-bit fields.
    fn dword_count(&self) -> usize {
        self.octet_count() / 4
    }

    /// Get octet `index` (0 = MSB).
    fn get_octet(&self, index: usize) -> Result<u8> {
        check_index(index, self.octet_count())?;
        Ok(self.octets()[index])
    }

    /// Get word `index` (0 = MSB).
    fn get_word(&self, index: usize) -> Result<u16> {
        check_index(index, self.word_count())?;
        let b = &self.octets()[index * 2..index * 2 + 2];
        Ok(u16::from(b[0]) << 8 | u16::from(b[1]))
    }

    /// Get dword `index` (0 = MSB).
    fn get_dword(&self, index: usize) -> Result<u32> {
        check_index(index, self.dword_count())?;
        let b = &self.octets()[index * 4..index * 4 + 4];
        Ok(u32::from(b[0]) << 24 | u32::from(b[1]) << 16 | u32::from(b[2]) << 8 | u32::from(b[3]))
    }

    /// Set octet `index` to `value`, which must fit in 8 bits.
    fn set_octet(&mut self, index: usize, value: u32) -> Result<()> {
        check_index(index, self.octet_count())?;
        check_value(u64::from(value), 0xff)?;
        self.octets_mut()[index] = value as u8;
        Ok(())
    }

    /// Set word `index` to `value`, which must fit in 16 bits.
    fn set_word(&mut self, index: usize, value: u32) -> Result<()> {
        check_index(index, self.word_count())?;
        check_value(u64::from(value), 0xffff)?;
        let b = &mut self.octets_mut()[index * 2..index * 2 + 2];
        b[0] = (value >> 8) as u8;
        b[1] = value as u8;
        Ok(())
    }

    /// Set dword `index` to `value`, which must fit in 32 bits.
    fn set_dword(&mut self, index: usize, value: u64) -> Result<()> {
        check_index(index, self.dword_count())?;
        check_value(value, 0xffff_ffff)?;
        let b = &mut self.octets_mut()[index * 4..index * 4 + 4];
        b[0] = (value >> 24) as u8;
        b[1] = (value >> 16) as u8;
        b[2] = (value >> 8) as u8;
        b[3] = value as u8;
        Ok(())
    }
}

#[inline]
fn check_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(AddrError::index_out_of_range(index, count.saturating_sub(1)));
    }
    Ok(())
}

#[inline]
fn check_value(value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(AddrError::value_out_of_range(value, max));
    }
    Ok(())
}
