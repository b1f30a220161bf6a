//! Decoded instructions and the address-ordered collection that holds them.

use crate::address::{Address, AddressRange};
use crate::opcodes::Opcode;
use std::ops::Index;

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Static opcode definition
    pub opcode: &'static Opcode,

    /// Address of the opcode byte
    pub address: Address,

    /// Total size in bytes (opcode + operand, 1-4)
    pub length: u8,

    /// Operand value, first byte most significant (0 when there is no operand)
    pub operand: u32,

    /// Code location the operand refers to, if it could be resolved
    pub code_ref: Option<Address>,

    /// Data location the operand refers to, if it could be resolved
    pub data_ref: Option<Address>,
}

impl Instruction {
    /// Bytes covered by this instruction.
    pub fn range(&self) -> AddressRange {
        AddressRange::spanning(self.address, u32::from(self.length.saturating_sub(1)))
    }

    /// Operand size in bytes as decoded.
    pub fn operand_size(&self) -> u8 {
        self.length.saturating_sub(1)
    }

    /// True if the operand was decoded one byte shorter than the table size
    /// because of the M or X flag.
    pub fn is_narrowed(&self) -> bool {
        self.operand_size() < self.opcode.operand_size
    }

    /// True if both describe the same bytes decoded the same way.
    pub fn same_decoding(&self, other: &Instruction) -> bool {
        self.address == other.address
            && self.opcode.code == other.opcode.code
            && self.length == other.length
    }

    /// True if the two instructions share at least one byte.
    pub fn conflicts_with(&self, other: &Instruction) -> bool {
        self.range().overlaps(&other.range())
    }
}

/// Error returned when an instruction overlaps one already in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("instruction at {candidate} overlaps instruction at {existing}")]
pub struct ConflictError {
    /// Bytes of the instruction already in the list
    pub existing: AddressRange,

    /// Bytes of the rejected instruction
    pub candidate: AddressRange,
}

/// Instructions sorted by address, no two overlapping.
///
/// # Examples
///
/// ```
/// use disasm816::{Address, Instruction, InstructionList, OPCODE_TABLE};
///
/// let nop = |offset| Instruction {
///     opcode: &OPCODE_TABLE[0xEA],
///     address: Address::new(0, offset),
///     length: 1,
///     operand: 0,
///     code_ref: None,
///     data_ref: None,
/// };
///
/// let mut list = InstructionList::new();
/// list.insert(nop(0x8001)).unwrap();
/// list.insert(nop(0x8000)).unwrap();
/// assert!(list.insert(nop(0x8000)).is_err());
///
/// let addresses: Vec<_> = list.iter().map(|i| i.address.offset()).collect();
/// assert_eq!(addresses, [0x8000, 0x8001]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstructionList {
    items: Vec<Instruction>,
}

impl InstructionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an instruction at its sorted position.
    ///
    /// # Errors
    ///
    /// [`ConflictError`] if it overlaps its neighbour on either side. The
    /// list is left unchanged.
    pub fn insert(&mut self, instruction: Instruction) -> Result<(), ConflictError> {
        let position = self
            .items
            .partition_point(|existing| existing.address < instruction.address);

        let before = position.checked_sub(1).and_then(|i| self.items.get(i));
        let after = self.items.get(position);

        for neighbour in before.into_iter().chain(after) {
            if neighbour.conflicts_with(&instruction) {
                return Err(ConflictError {
                    existing: neighbour.range(),
                    candidate: instruction.range(),
                });
            }
        }

        self.items.insert(position, instruction);
        Ok(())
    }

    /// The instruction whose bytes include `address`.
    pub fn find_at(&self, address: Address) -> Option<&Instruction> {
        let position = self.items.partition_point(|i| i.address <= address);
        let candidate = self.items.get(position.checked_sub(1)?)?;
        candidate.range().contains(address).then_some(candidate)
    }

    /// The instruction starting exactly at `address`.
    pub fn get(&self, address: Address) -> Option<&Instruction> {
        self.items
            .binary_search_by_key(&address, |i| i.address)
            .ok()
            .map(|index| &self.items[index])
    }

    /// Instructions in ascending address order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Index<usize> for InstructionList {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a InstructionList {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::OPCODE_TABLE;

    fn instr(opcode: u8, offset: u16, length: u8) -> Instruction {
        Instruction {
            opcode: &OPCODE_TABLE[opcode as usize],
            address: Address::new(0x00, offset),
            length,
            operand: 0,
            code_ref: None,
            data_ref: None,
        }
    }

    #[test]
    fn test_range() {
        let i = instr(0xAD, 0x8000, 3);
        assert_eq!(i.range().start(), Address::new(0, 0x8000));
        assert_eq!(i.range().end(), Address::new(0, 0x8002));
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut list = InstructionList::new();
        list.insert(instr(0xEA, 0x8005, 1)).unwrap();
        list.insert(instr(0xAD, 0x8000, 3)).unwrap();
        list.insert(instr(0xEA, 0x8003, 1)).unwrap();

        let offsets: Vec<u16> = list.iter().map(|i| i.address.offset()).collect();
        assert_eq!(offsets, vec![0x8000, 0x8003, 0x8005]);
    }

    #[test]
    fn test_overlap_with_previous_rejected() {
        let mut list = InstructionList::new();
        list.insert(instr(0xAD, 0x8000, 3)).unwrap();

        let err = list.insert(instr(0xEA, 0x8002, 1)).unwrap_err();
        assert_eq!(err.existing.start(), Address::new(0, 0x8000));
        assert_eq!(err.candidate.start(), Address::new(0, 0x8002));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_overlap_with_next_rejected() {
        let mut list = InstructionList::new();
        list.insert(instr(0xEA, 0x8002, 1)).unwrap();
        assert!(list.insert(instr(0xAD, 0x8000, 3)).is_err());
        assert!(list.insert(instr(0xAD, 0x7FFF, 3)).is_ok());
    }

    #[test]
    fn test_same_address_rejected() {
        let mut list = InstructionList::new();
        list.insert(instr(0xEA, 0x8000, 1)).unwrap();
        assert!(list.insert(instr(0xEA, 0x8000, 1)).is_err());
    }

    #[test]
    fn test_find_at_inside_instruction() {
        let mut list = InstructionList::new();
        list.insert(instr(0xAD, 0x8000, 3)).unwrap();

        assert_eq!(
            list.find_at(Address::new(0, 0x8002)).map(|i| i.address),
            Some(Address::new(0, 0x8000))
        );
        assert!(list.find_at(Address::new(0, 0x8003)).is_none());
        assert!(list.find_at(Address::new(0, 0x7FFF)).is_none());
        assert!(list.get(Address::new(0, 0x8001)).is_none());
    }

    #[test]
    fn test_narrowed() {
        assert!(instr(0xA9, 0x8000, 2).is_narrowed());
        assert!(!instr(0xA9, 0x8000, 3).is_narrowed());
    }
}
