//! # LoROM Mapping
//!
//! In the LoROM layout every bank exposes 32KB of ROM in its upper half
//! (`$8000-$FFFF`). Bank `n` maps to ROM offset `n * 0x8000`, so the ROM is
//! laid out as consecutive 32KB chunks.
//!
//! ```text
//! CPU 00:8000-00:FFFF -> ROM 0x000000-0x007FFF
//! CPU 01:8000-01:FFFF -> ROM 0x008000-0x00FFFF
//! CPU 80:8000-80:FFFF -> ROM 0x400000-0x407FFF
//! ```
//!
//! The lower half of each bank holds RAM and I/O on real hardware and is
//! not backed by the cartridge.

use crate::address::Address;
use crate::memory::{BusError, ByteSource, CartridgeBus};

/// Offsets below this value are not ROM.
pub const ROM_WINDOW_START: u16 = 0x8000;

/// LoROM view over a byte source.
///
/// # Examples
///
/// ```
/// use disasm816::{Address, CartridgeBus, LoRom, RomImage};
///
/// let mut data = vec![0u8; 0x10000];
/// data[0x8003] = 0x42;
/// let bus = LoRom::new(RomImage::new(data));
///
/// assert_eq!(bus.read_byte(Address::new(0x01, 0x8003)), Ok(0x42));
/// assert!(bus.read_byte(Address::new(0x01, 0x7FFF)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LoRom<S> {
    source: S,
}

impl<S: ByteSource> LoRom<S> {
    /// Map a byte source with the LoROM layout.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Translate a CPU address into a ROM offset.
    ///
    /// # Errors
    ///
    /// [`BusError::InvalidAddress`] when the offset lies below `$8000`.
    pub fn rom_offset(address: Address) -> Result<usize, BusError> {
        let offset = address.offset();
        if offset < ROM_WINDOW_START {
            return Err(BusError::InvalidAddress {
                bank: address.bank(),
                offset,
            });
        }

        Ok(((address.bank() as usize) << 15) | (offset as usize & 0x7FFF))
    }

    /// Underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give back the byte source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ByteSource> CartridgeBus for LoRom<S> {
    fn read_byte(&self, address: Address) -> Result<u8, BusError> {
        Self::rom_offset(address).map(|index| self.source.byte_at(index))
    }
}
