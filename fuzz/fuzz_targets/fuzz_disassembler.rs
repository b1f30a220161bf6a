//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary ROM contents and vectors through a full disassembly and
//! listing, checking the collection invariants on whatever was decoded.

#![no_main]

use arbitrary::Arbitrary;
use disasm816::{formatter, Address, Disassembler, LoRom, RomImage, Vector, VectorList};
use libfuzzer_sys::fuzz_target;

/// One entry point
#[derive(Debug, Arbitrary)]
struct FuzzVector {
    bank: u8,
    offset: u16,
    m_flag: bool,
    x_flag: bool,
    data_bank: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    rom: Vec<u8>,
    vectors: Vec<FuzzVector>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM and very long walks
    if input.rom.len() > 0x10000 || input.vectors.len() > 8 {
        return;
    }

    let vectors: VectorList = input
        .vectors
        .iter()
        .map(|v| {
            Vector::new(Address::new(v.bank, v.offset), v.m_flag, v.x_flag)
                .with_data_bank(v.data_bank)
        })
        .collect();

    let mut disassembler = Disassembler::new(LoRom::new(RomImage::new(input.rom)), vectors);

    // Errors are expected; partial results must still be consistent
    let _ = disassembler.disassemble();

    let instructions = disassembler.instructions();
    for instr in instructions {
        // Length is opcode plus 0-3 operand bytes
        assert!(instr.length >= 1 && instr.length <= 4);
        assert!(instr.length <= instr.opcode.operand_size + 1);

        // Every instruction can be found by any of its bytes
        assert_eq!(
            instructions.find_at(instr.range().end()).map(|i| i.address),
            Some(instr.address)
        );
    }

    let all: Vec<_> = instructions.iter().collect();
    for pair in all.windows(2) {
        assert!(pair[0].range().end() < pair[1].range().start());
    }

    for label in disassembler.labels().iter() {
        assert!(!(label.is_code() && label.is_data()));
    }

    let listing = formatter::render(instructions, disassembler.labels());
    assert!(listing.lines().count() >= instructions.len());
});
