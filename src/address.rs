//! # Address Model
//!
//! The 65816 sees a 24-bit address space split into 256 banks of 64KB. An
//! [`Address`] keeps both views of a location: the `bank:offset` pair the
//! CPU works with, and the linear 24-bit value used for ordering and
//! arithmetic.

use std::fmt;

/// Mask applied to every linear address.
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// A 24-bit CPU address.
///
/// Both constructors normalize to the same representation, so an address
/// built from a linear value and one built from its bank and offset compare
/// equal and decompose identically.
///
/// # Examples
///
/// ```
/// use disasm816::Address;
///
/// let a = Address::new(0x80, 0x8123);
/// assert_eq!(a.linear(), 0x80_8123);
///
/// let b = Address::from_linear(0x80_8123);
/// assert_eq!(a, b);
/// assert_eq!(b.bank(), 0x80);
/// assert_eq!(b.offset(), 0x8123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    linear: u32,
}

impl Address {
    /// Create an address from a bank and an offset within that bank.
    pub const fn new(bank: u8, offset: u16) -> Self {
        Self {
            linear: ((bank as u32) << 16) | offset as u32,
        }
    }

    /// Create an address from a linear value. Bits above 24 are discarded.
    pub const fn from_linear(linear: u32) -> Self {
        Self {
            linear: linear & ADDRESS_MASK,
        }
    }

    /// Bank number (bits 16-23).
    pub const fn bank(self) -> u8 {
        (self.linear >> 16) as u8
    }

    /// Offset within the bank (bits 0-15).
    pub const fn offset(self) -> u16 {
        self.linear as u16
    }

    /// The full 24-bit value.
    pub const fn linear(self) -> u32 {
        self.linear
    }

    /// Advance linearly by `count` bytes, carrying into the next bank and
    /// wrapping at the top of the address space.
    pub const fn wrapping_add(self, count: u32) -> Self {
        Self::from_linear(self.linear.wrapping_add(count))
    }

    /// Same bank, different offset.
    pub const fn with_offset(self, offset: u16) -> Self {
        Self::new(self.bank(), offset)
    }
}

impl From<u32> for Address {
    fn from(linear: u32) -> Self {
        Self::from_linear(linear)
    }
}

impl From<Address> for u32 {
    fn from(address: Address) -> Self {
        address.linear
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02X}:{:04X}", self.bank(), self.offset())
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.linear, f)
    }
}

/// Error returned when constructing an empty [`AddressRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("address range at {start} must be one or more bytes long")]
pub struct EmptyRangeError {
    /// Start of the rejected range
    pub start: Address,
}

/// An inclusive range of addresses, at least one byte long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Address,
    end: Address,
    len: u32,
}

impl AddressRange {
    /// Create a range from a start address and a length in bytes.
    ///
    /// The end address is computed linearly and stops at `FF:FFFF`; a range
    /// that would run past the top of the address space is cut short there.
    pub fn new(start: Address, len: u32) -> Result<Self, EmptyRangeError> {
        if len == 0 {
            return Err(EmptyRangeError { start });
        }

        Ok(Self::spanning(start, len - 1))
    }

    /// Range covering `start` and the `extra` bytes that follow it, up to
    /// the end of the address space.
    pub fn spanning(start: Address, extra: u32) -> Self {
        let end = start.linear().saturating_add(extra).min(ADDRESS_MASK);
        Self {
            start,
            end: Address::from_linear(end),
            len: end - start.linear() + 1,
        }
    }

    /// Create a range from inclusive start and end addresses.
    pub fn from_bounds(start: Address, end: Address) -> Result<Self, EmptyRangeError> {
        if end < start {
            return Err(EmptyRangeError { start });
        }

        Self::new(start, end.linear() - start.linear() + 1)
    }

    /// First address in the range.
    pub fn start(&self) -> Address {
        self.start
    }

    /// Last address in the range (inclusive).
    pub fn end(&self) -> Address {
        self.end
    }

    /// Number of bytes covered.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always false: ranges are at least one byte long.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True if `address` lies within the range.
    pub fn contains(&self, address: Address) -> bool {
        self.start <= address && address <= self.end
    }

    /// True if the two ranges share at least one address.
    pub fn overlaps(&self, other: &AddressRange) -> bool {
        !(self.start > other.end || self.end < other.start)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_and_offset_round_trip() {
        let addr = Address::new(0x12, 0x3456);
        assert_eq!(addr.linear(), 0x12_3456);
        assert_eq!(Address::from_linear(addr.linear()), addr);
    }

    #[test]
    fn test_linear_is_masked_to_24_bits() {
        let addr = Address::from_linear(0xFF12_3456);
        assert_eq!(addr.linear(), 0x12_3456);
        assert_eq!(addr.bank(), 0x12);
    }

    #[test]
    fn test_wrapping_add_carries_into_next_bank() {
        let addr = Address::new(0x00, 0xFFFF).wrapping_add(1);
        assert_eq!(addr.bank(), 0x01);
        assert_eq!(addr.offset(), 0x0000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Address::new(0x80, 0x8000).to_string(), "80:8000");
    }

    #[test]
    fn test_range_bounds() {
        let range = AddressRange::new(Address::new(0, 0x8000), 3).unwrap();
        assert_eq!(range.end(), Address::new(0, 0x8002));
        assert!(range.contains(Address::new(0, 0x8002)));
        assert!(!range.contains(Address::new(0, 0x8003)));
    }

    #[test]
    fn test_spanning_single_byte() {
        let range = AddressRange::spanning(Address::new(0x80, 0x8000), 0);
        assert_eq!(range.len(), 1);
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_range_stops_at_top_of_address_space() {
        let start = Address::new(0xFF, 0xFFFE);
        let range = AddressRange::new(start, 4).unwrap();
        assert_eq!(range.end(), Address::new(0xFF, 0xFFFF));
        assert_eq!(range.len(), 2);
        assert!(range.start() <= range.end());
        assert!(range.contains(Address::new(0xFF, 0xFFFF)));
        assert!(!range.contains(Address::new(0x00, 0x0000)));

        let low = AddressRange::new(Address::new(0x00, 0x0000), 2).unwrap();
        assert!(!range.overlaps(&low));
        assert!(!low.overlaps(&range));
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(AddressRange::new(Address::new(0, 0x8000), 0).is_err());
        assert!(
            AddressRange::from_bounds(Address::new(0, 0x8001), Address::new(0, 0x8000)).is_err()
        );
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        let a = AddressRange::new(Address::new(0, 0x8000), 2).unwrap();
        let b = AddressRange::new(Address::new(0, 0x8002), 2).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}
