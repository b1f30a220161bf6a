//! # Cartridge Memory Abstraction
//!
//! Two layers sit between the decoder and the raw ROM bytes:
//!
//! - [`ByteSource`]: linear storage indexed by ROM offset. Reads past the
//!   end return the open-bus value `0xFF`.
//! - [`CartridgeBus`]: the CPU-side view. Maps 24-bit [`Address`]es onto a
//!   byte source according to a bank-switching scheme (see
//!   [`LoRom`](crate::LoRom)).
//!
//! ## Design Principles
//!
//! - Reads never mutate: a disassembler only ever looks at the cartridge
//! - Mapping failures are errors, not garbage bytes
//! - Multi-byte reads are little-endian and never cross a bank boundary

use crate::address::Address;
use std::fs;
use std::path::Path;

/// Value returned for reads beyond the end of the ROM data.
pub const OPEN_BUS: u8 = 0xFF;

/// Size of the copier header some ROM dumps carry in front of the image.
pub const COPIER_HEADER_LEN: usize = 512;

/// Linear byte storage addressed by ROM offset.
///
/// # Examples
///
/// ```
/// use disasm816::{ByteSource, RomImage};
///
/// let rom = RomImage::new(vec![0xEA, 0x60]);
/// assert_eq!(rom.byte_at(1), 0x60);
/// assert_eq!(rom.byte_at(2), 0xFF); // open bus
/// ```
pub trait ByteSource {
    /// Byte at `index`, or [`OPEN_BUS`] when `index` is past the end.
    fn byte_at(&self, index: usize) -> u8;

    /// Number of bytes of real data.
    fn len(&self) -> usize;

    /// True when there is no data at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for [u8] {
    fn byte_at(&self, index: usize) -> u8 {
        self.get(index).copied().unwrap_or(OPEN_BUS)
    }

    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl ByteSource for Vec<u8> {
    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice().byte_at(index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// An in-memory ROM image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Wrap raw ROM bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Read a ROM image from a file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self::new(data))
    }

    /// Remove a 512-byte copier header if the image size says there is one.
    ///
    /// Dumps made with a copier device are a multiple of 1KB plus a 512-byte
    /// header. Returns true if a header was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use disasm816::{ByteSource, RomImage};
    ///
    /// let mut data = vec![0u8; 512];
    /// data.extend_from_slice(&[0xEA; 1024]);
    /// let mut rom = RomImage::new(data);
    ///
    /// assert!(rom.strip_copier_header());
    /// assert_eq!(rom.len(), 1024);
    /// assert!(!rom.strip_copier_header());
    /// ```
    pub fn strip_copier_header(&mut self) -> bool {
        if self.data.len() % 1024 != COPIER_HEADER_LEN {
            return false;
        }

        self.data.drain(..COPIER_HEADER_LEN);
        log::info!("removed {}-byte copier header", COPIER_HEADER_LEN);
        true
    }

    /// Raw ROM bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ByteSource for RomImage {
    fn byte_at(&self, index: usize) -> u8 {
        self.data.byte_at(index)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<Vec<u8>> for RomImage {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Error returned when the bus cannot service a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// The address does not map to ROM under the current scheme.
    #[error("invalid LoROM address {bank:02X}:{offset:04X}")]
    InvalidAddress {
        /// Bank of the rejected address
        bank: u8,
        /// Offset of the rejected address
        offset: u16,
    },

    /// A multi-byte read would run past the end of the bank.
    #[error("read at {bank:02X}:{offset:04X} crosses a bank boundary")]
    BankBoundary {
        /// Bank of the first byte
        bank: u8,
        /// Offset of the first byte
        offset: u16,
    },
}

/// CPU-side view of a cartridge.
///
/// Implementors provide [`read_byte`](CartridgeBus::read_byte); word and
/// long reads are built on top of it.
///
/// # Implementing a Mapping
///
/// ```
/// use disasm816::{Address, BusError, CartridgeBus};
///
/// /// Every bank mirrors the same 64KB.
/// struct Mirrored(Vec<u8>);
///
/// impl CartridgeBus for Mirrored {
///     fn read_byte(&self, address: Address) -> Result<u8, BusError> {
///         Ok(self.0.get(address.offset() as usize).copied().unwrap_or(0xFF))
///     }
/// }
///
/// let bus = Mirrored(vec![0x34, 0x12]);
/// assert_eq!(bus.read_word(Address::new(0x7E, 0x0000)), Ok(0x1234));
/// ```
pub trait CartridgeBus {
    /// Read the byte at a CPU address.
    fn read_byte(&self, address: Address) -> Result<u8, BusError>;

    /// Read a little-endian 16-bit value.
    ///
    /// # Errors
    ///
    /// [`BusError::BankBoundary`] when the low byte sits at offset `0xFFFF`.
    fn read_word(&self, address: Address) -> Result<u16, BusError> {
        if address.offset() == 0xFFFF {
            return Err(BusError::BankBoundary {
                bank: address.bank(),
                offset: address.offset(),
            });
        }

        let lo = self.read_byte(address)?;
        let hi = self.read_byte(address.with_offset(address.offset() + 1))?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Read a little-endian 24-bit value.
    ///
    /// # Errors
    ///
    /// [`BusError::BankBoundary`] when the value would extend past offset
    /// `0xFFFF`.
    fn read_long(&self, address: Address) -> Result<u32, BusError> {
        if address.offset() > 0xFFFD {
            return Err(BusError::BankBoundary {
                bank: address.bank(),
                offset: address.offset(),
            });
        }

        let word = self.read_word(address)?;
        let bank = self.read_byte(address.with_offset(address.offset() + 2))?;
        Ok(u32::from(word) | (u32::from(bank) << 16))
    }
}

impl<T: CartridgeBus + ?Sized> CartridgeBus for &T {
    fn read_byte(&self, address: Address) -> Result<u8, BusError> {
        (**self).read_byte(address)
    }
}
