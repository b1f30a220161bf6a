//! Property-based tests for the instruction decoder and disassembler.

use disasm816::{
    Address, Behavior, Decoder, Disassembler, LoRom, RomImage, SizeModifier, Vector, VectorList,
    OPCODE_TABLE,
};
use proptest::prelude::*;

fn bus(bytes: Vec<u8>) -> LoRom<RomImage> {
    LoRom::new(RomImage::new(bytes))
}

proptest! {
    /// Property: decoded length is the table size, minus one for a set modifier flag
    #[test]
    fn prop_length_follows_flags(
        opcode in any::<u8>(),
        operand in any::<[u8; 3]>(),
        m in any::<bool>(),
        x in any::<bool>(),
    ) {
        let bus = bus(vec![opcode, operand[0], operand[1], operand[2]]);
        let mut decoder = Decoder::new(&bus);
        decoder.set_flags(m, x);
        decoder.move_to(Address::new(0x00, 0x8000));

        let instr = decoder.decode_next().unwrap().unwrap();
        let def = &OPCODE_TABLE[opcode as usize];
        let narrowed = match def.modifier {
            SizeModifier::MFlag => m,
            SizeModifier::XFlag => x,
            SizeModifier::None => false,
        };
        let expected = 1 + def.operand_size - u8::from(narrowed);

        prop_assert_eq!(instr.length, expected);
        prop_assert_eq!(decoder.position(), Address::new(0x00, 0x8000 + u16::from(expected)));
        prop_assert_eq!(decoder.has_more(), def.behavior == Behavior::Next);
    }

    /// Property: the first operand byte is the most significant
    #[test]
    fn prop_operand_first_byte_most_significant(operand in any::<[u8; 3]>()) {
        // ORA $HHMMLL (long absolute)
        let bus = bus(vec![0x0F, operand[0], operand[1], operand[2]]);
        let mut decoder = Decoder::new(&bus);
        decoder.move_to(Address::new(0x00, 0x8000));

        let instr = decoder.decode_next().unwrap().unwrap();
        let expected = u32::from_be_bytes([0, operand[0], operand[1], operand[2]]);
        prop_assert_eq!(instr.operand, expected);
    }

    /// Property: decoded instructions never overlap, whatever the bytes
    #[test]
    fn prop_disassembly_never_overlaps(
        code in proptest::collection::vec(any::<u8>(), 1..256),
        starts in proptest::collection::vec(0u16..256, 1..4),
        m in any::<bool>(),
        x in any::<bool>(),
    ) {
        let vectors: VectorList = starts
            .iter()
            .map(|start| Vector::new(Address::new(0x00, 0x8000 + start), m, x))
            .collect();

        let mut disassembler = Disassembler::new(bus(code), vectors);
        let _ = disassembler.disassemble();

        let instructions: Vec<_> = disassembler.instructions().iter().collect();
        for pair in instructions.windows(2) {
            prop_assert!(pair[0].range().end() < pair[1].range().start());
        }
    }
}
