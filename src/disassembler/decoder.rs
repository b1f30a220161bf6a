//! Instruction decoder for the 65816 disassembler
//!
//! The decoder walks forward from a starting address one instruction at a
//! time. Operand widths of flag-modified opcodes follow the M and X flags it
//! was given; it does not track `REP`/`SEP` itself.

use crate::address::Address;
use crate::disassembler::instructions::Instruction;
use crate::memory::{BusError, CartridgeBus};
use crate::opcodes::{Behavior, Opcode, OperandMeaning, OperandTarget};

/// Linear instruction decoder over a cartridge bus.
///
/// # Examples
///
/// ```
/// use disasm816::{Address, Decoder, LoRom, RomImage};
///
/// // LDA #$12 (8-bit accumulator), RTS
/// let bus = LoRom::new(RomImage::new(vec![0xA9, 0x12, 0x60]));
/// let mut decoder = Decoder::new(&bus);
/// decoder.set_flags(true, true);
/// decoder.move_to(Address::new(0x00, 0x8000));
///
/// let lda = decoder.decode_next().unwrap().unwrap();
/// assert_eq!(lda.opcode.mnemonic, "LDA");
/// assert_eq!(lda.length, 2);
///
/// let rts = decoder.decode_next().unwrap().unwrap();
/// assert_eq!(rts.opcode.mnemonic, "RTS");
/// assert!(decoder.decode_next().unwrap().is_none());
/// ```
pub struct Decoder<'a, B: ?Sized> {
    bus: &'a B,
    position: Address,
    m_flag: bool,
    x_flag: bool,
    data_bank: u8,
    more: bool,
}

impl<'a, B: CartridgeBus + ?Sized> Decoder<'a, B> {
    /// Create a decoder that has not been positioned yet.
    ///
    /// Flags start clear (16-bit accumulator and index registers).
    pub fn new(bus: &'a B) -> Self {
        Self {
            bus,
            position: Address::default(),
            m_flag: false,
            x_flag: false,
            data_bank: 0,
            more: false,
        }
    }

    /// Continue decoding from `address`.
    pub fn move_to(&mut self, address: Address) {
        self.position = address;
        self.more = true;
    }

    /// Set the M (accumulator width) and X (index width) flags.
    pub fn set_flags(&mut self, m_flag: bool, x_flag: bool) {
        self.m_flag = m_flag;
        self.x_flag = x_flag;
    }

    /// Bank used to resolve 16-bit data addresses.
    pub fn set_data_bank(&mut self, bank: u8) {
        self.data_bank = bank;
    }

    /// Address of the next instruction.
    pub fn position(&self) -> Address {
        self.position
    }

    /// Bank of the code being decoded.
    pub fn program_bank(&self) -> u8 {
        self.position.bank()
    }

    pub fn data_bank(&self) -> u8 {
        self.data_bank
    }

    pub fn m_flag(&self) -> bool {
        self.m_flag
    }

    pub fn x_flag(&self) -> bool {
        self.x_flag
    }

    /// True until the walk reaches an instruction that stops it.
    pub fn has_more(&self) -> bool {
        self.more
    }

    /// Decode the instruction at the current position and advance past it.
    ///
    /// Returns `Ok(None)` once an instruction with [`Behavior::Stop`] has
    /// been decoded, or if the decoder was never positioned.
    ///
    /// # Errors
    ///
    /// Any [`BusError`] from reading the opcode or operand bytes. The
    /// position is left on the failing instruction.
    pub fn decode_next(&mut self) -> Result<Option<Instruction>, BusError> {
        if !self.more {
            return Ok(None);
        }

        let address = self.position;
        let opcode = Opcode::get(self.bus.read_byte(address)?);
        let operand_size = opcode.effective_operand_size(self.m_flag, self.x_flag);
        let operand = self.read_operand(address, operand_size)?;
        let length = operand_size + 1;

        let (code_ref, data_ref) =
            self.resolve_reference(opcode, address, length, operand_size, operand);

        let instruction = Instruction {
            opcode,
            address,
            length,
            operand,
            code_ref,
            data_ref,
        };
        log::trace!(
            "{} {} ({} bytes)",
            address,
            opcode.mnemonic,
            instruction.length
        );

        self.position = address.wrapping_add(u32::from(length));
        self.more = opcode.behavior != Behavior::Stop;

        Ok(Some(instruction))
    }

    /// Assemble `size` operand bytes following the opcode. The first byte
    /// read ends up most significant.
    fn read_operand(&self, address: Address, size: u8) -> Result<u32, BusError> {
        let mut value = 0u32;
        for i in 0..u32::from(size) {
            let byte = self.bus.read_byte(address.wrapping_add(1 + i))?;
            value = (value << 8) | u32::from(byte);
        }
        Ok(value)
    }

    fn resolve_reference(
        &self,
        opcode: &Opcode,
        address: Address,
        length: u8,
        operand_size: u8,
        operand: u32,
    ) -> (Option<Address>, Option<Address>) {
        let program_bank = address.bank();

        match (opcode.meaning, opcode.target) {
            (OperandMeaning::Relative, OperandTarget::Code) => {
                let displacement = match operand_size {
                    1 => i32::from(operand as u8 as i8),
                    2 => i32::from(operand as u16 as i16),
                    _ => return (None, None),
                };
                let target =
                    (i32::from(address.offset()) + i32::from(length) + displacement) as u16;
                (Some(Address::new(program_bank, target)), None)
            }
            (OperandMeaning::Address, OperandTarget::Code) => {
                (Self::absolute(operand, operand_size, program_bank), None)
            }
            (OperandMeaning::Address, OperandTarget::Data) => {
                (None, Self::absolute(operand, operand_size, self.data_bank))
            }
            _ => (None, None),
        }
    }

    /// Long operands carry their own bank; 16-bit operands take `bank`.
    fn absolute(operand: u32, operand_size: u8, bank: u8) -> Option<Address> {
        match operand_size {
            3 => Some(Address::from_linear(operand)),
            2 => Some(Address::new(bank, operand as u16)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorom::LoRom;
    use crate::memory::RomImage;

    fn bus(bytes: &[u8]) -> LoRom<RomImage> {
        LoRom::new(RomImage::new(bytes.to_vec()))
    }

    fn decode_one(bytes: &[u8], m: bool, x: bool) -> Instruction {
        let bus = bus(bytes);
        let mut decoder = Decoder::new(&bus);
        decoder.set_flags(m, x);
        decoder.move_to(Address::new(0x00, 0x8000));
        decoder.decode_next().unwrap().unwrap()
    }

    #[test]
    fn test_unpositioned_decoder_yields_nothing() {
        let bus = bus(&[0xEA]);
        let mut decoder = Decoder::new(&bus);
        assert_eq!(decoder.decode_next(), Ok(None));
    }

    #[test]
    fn test_m_flag_shortens_accumulator_immediate() {
        let wide = decode_one(&[0x09, 0x12, 0x34], false, false);
        assert_eq!(wide.length, 3);
        assert_eq!(wide.operand, 0x1234);

        let narrow = decode_one(&[0x09, 0x12, 0x34], true, false);
        assert_eq!(narrow.length, 2);
        assert_eq!(narrow.operand, 0x12);
    }

    #[test]
    fn test_x_flag_shortens_index_immediate() {
        assert_eq!(decode_one(&[0xA2, 0x01, 0x00], false, false).length, 3);
        assert_eq!(decode_one(&[0xA2, 0x01, 0x00], false, true).length, 2);
        assert_eq!(decode_one(&[0xA2, 0x01, 0x00], true, false).length, 3);
    }

    #[test]
    fn test_long_operand_first_byte_most_significant() {
        let jsl = decode_one(&[0x22, 0x12, 0x34, 0x56], false, false);
        assert_eq!(jsl.operand, 0x12_3456);
        assert_eq!(jsl.code_ref, Some(Address::new(0x12, 0x3456)));
    }

    #[test]
    fn test_forward_branch_target() {
        // BNE +2 at 00:8000 -> 00:8004
        let bne = decode_one(&[0xD0, 0x02], false, false);
        assert_eq!(bne.code_ref, Some(Address::new(0x00, 0x8004)));
    }

    #[test]
    fn test_backward_branch_target() {
        // BRA -2 at 00:8000 branches to itself
        let bra = decode_one(&[0x80, 0xFE], false, false);
        assert_eq!(bra.code_ref, Some(Address::new(0x00, 0x8000)));
    }

    #[test]
    fn test_long_branch_target() {
        // BRL +0x1000 at 00:8000, 3 bytes -> 00:9003
        let brl = decode_one(&[0x82, 0x10, 0x00], false, false);
        assert_eq!(brl.code_ref, Some(Address::new(0x00, 0x9003)));
    }

    #[test]
    fn test_absolute_jump_uses_program_bank() {
        // JMP $9000 at 01:8000 (ROM offset 0x8000)
        let mut rom = vec![0u8; 0x10000];
        rom[0x8000..0x8003].copy_from_slice(&[0x4C, 0x90, 0x00]);
        let bus = LoRom::new(RomImage::new(rom));

        let mut decoder = Decoder::new(&bus);
        decoder.move_to(Address::new(0x01, 0x8000));
        let jmp = decoder.decode_next().unwrap().unwrap();

        assert_eq!(jmp.code_ref, Some(Address::new(0x01, 0x9000)));
        assert_eq!(jmp.data_ref, None);
        assert!(!decoder.has_more());
    }

    #[test]
    fn test_brk_keeps_walking() {
        let bus = bus(&[0x00, 0xEA]);
        let mut decoder = Decoder::new(&bus);
        decoder.move_to(Address::new(0x00, 0x8000));

        let brk = decoder.decode_next().unwrap().unwrap();
        assert_eq!(brk.length, 1);
        assert!(decoder.has_more());
        assert_eq!(decoder.position(), Address::new(0x00, 0x8001));
    }

    #[test]
    fn test_indexed_operand_has_no_reference() {
        // LDA $1234,X
        let lda = decode_one(&[0xBD, 0x12, 0x34], false, false);
        assert_eq!(lda.operand, 0x1234);
        assert_eq!(lda.code_ref, None);
        assert_eq!(lda.data_ref, None);
    }

    #[test]
    fn test_stop_ends_walk() {
        let bus = bus(&[0xEA, 0x60, 0xEA]);
        let mut decoder = Decoder::new(&bus);
        decoder.move_to(Address::new(0x00, 0x8000));

        assert_eq!(decoder.decode_next().unwrap().unwrap().opcode.mnemonic, "NOP");
        assert_eq!(decoder.decode_next().unwrap().unwrap().opcode.mnemonic, "RTS");
        assert_eq!(decoder.decode_next(), Ok(None));
        assert_eq!(decoder.position(), Address::new(0x00, 0x8002));

        decoder.move_to(Address::new(0x00, 0x8002));
        assert_eq!(decoder.decode_next().unwrap().unwrap().opcode.mnemonic, "NOP");
    }

    #[test]
    fn test_invalid_address_propagates() {
        let bus = bus(&[0xEA]);
        let mut decoder = Decoder::new(&bus);
        decoder.move_to(Address::new(0x00, 0x1234));
        assert_eq!(
            decoder.decode_next(),
            Err(BusError::InvalidAddress {
                bank: 0x00,
                offset: 0x1234
            })
        );
    }

    #[test]
    fn test_operand_running_out_of_bank_fails() {
        let bus = bus(&[]);
        let mut decoder = Decoder::new(&bus);
        // Open bus reads 0xFF (SBC long,X): operand bytes continue at 01:0000
        decoder.move_to(Address::new(0x00, 0xFFFF));
        assert!(matches!(
            decoder.decode_next(),
            Err(BusError::InvalidAddress { bank: 0x01, .. })
        ));
    }
}
