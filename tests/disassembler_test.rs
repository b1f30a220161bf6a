//! End-to-end disassembly tests: ROM bytes and vectors in, listing out.

use disasm816::{
    formatter, Address, Disassembler, Error, LoRom, RomImage, Vector, VectorList,
};

/// A one-bank ROM with `code` at 00:8000.
fn rom_with(code: &[u8]) -> LoRom<RomImage> {
    let mut data = vec![0u8; 0x8000];
    data[..code.len()].copy_from_slice(code);
    LoRom::new(RomImage::new(data))
}

fn disassemble(code: &[u8], vectors: &str) -> Result<String, Error> {
    let vectors = VectorList::parse(vectors, "vectors.txt")?;
    let mut disassembler = Disassembler::new(rom_with(code), vectors);
    disassembler.disassemble()?;
    Ok(disassembler.render())
}

#[test]
fn test_nop_rts() {
    let listing = disassemble(&[0xEA, 0x60], "$008000 on on\n").unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines, vec!["    NOP", "    RTS"]);
}

#[test]
fn test_named_vector_and_branch_label() {
    // 8000: LDX #$00      (X flag clear -> 16-bit)
    // 8003: DEX
    // 8004: BNE 8003
    // 8006: RTS
    let code = [0xA2, 0x00, 0x00, 0xCA, 0xD0, 0xFD, 0x60];
    let listing = disassemble(&code, "$008000 off off Main\n").unwrap();

    assert_eq!(
        listing,
        "Main:\n    LDX #$0000\nLAB_008003:\n    DEX\n    BNE LAB_008003\n    RTS\n"
    );
}

#[test]
fn test_eight_bit_immediates() {
    // LDA #$12; LDY #$34; RTS with M and X set
    let code = [0xA9, 0x12, 0xA0, 0x34, 0x60];
    let listing = disassemble(&code, "$008000 on on\n").unwrap();
    assert_eq!(listing, "    LDA #$12\n    LDY #$34\n    RTS\n");
}

#[test]
fn test_call_target_named_by_later_vector() {
    // 8000: JSR $8004
    // 8003: RTS
    // 8004: RTL
    let code = [0x20, 0x80, 0x04, 0x60, 0x6B];
    let vectors = "$008000 on on Reset\n$008004 on on Helper\n";
    let listing = disassemble(&code, vectors).unwrap();

    assert_eq!(
        listing,
        "Reset:\n    JSR Helper\n    RTS\nHelper:\n    RTL\n"
    );
}

#[test]
fn test_unnamed_call_target_gets_function_name() {
    // JSL $018000; RTS
    let code = [0x22, 0x01, 0x80, 0x00, 0x60];
    let listing = disassemble(&code, "$008000 on on\n").unwrap();
    assert_eq!(listing, "    JSL FUN_018000\n    RTS\n");
}

#[test]
fn test_jump_ends_walk() {
    // JMP $8000 followed by bytes that are never decoded
    let code = [0x4C, 0x80, 0x00, 0xFF, 0xFF];
    let vectors = "$008000 on on Loop\n";
    let listing = disassemble(&code, vectors).unwrap();
    assert_eq!(listing, "Loop:\n    JMP Loop\n");
}

#[test]
fn test_shared_code_merges() {
    let code = [0xEA, 0xEA, 0xEA, 0x60];
    let vectors = "$008000 on on First\n$008002 on on Second\n";
    let listing = disassemble(&code, vectors).unwrap();
    assert_eq!(
        listing,
        "First:\n    NOP\n    NOP\nSecond:\n    NOP\n    RTS\n"
    );
}

#[test]
fn test_conflict_keeps_earlier_results() {
    // LDA #$EAEA (16-bit); RTS; then a vector into the middle of the LDA
    let code = [0xA9, 0xEA, 0xEA, 0x60];
    let vectors: VectorList = [
        Vector::new(Address::new(0x00, 0x8000), false, false),
        Vector::new(Address::new(0x00, 0x8001), false, false),
    ]
    .into_iter()
    .collect();

    let mut disassembler = Disassembler::new(rom_with(&code), vectors);
    let err = disassembler.disassemble().unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    let (instructions, labels) = disassembler.into_parts();
    assert_eq!(instructions.len(), 2);
    assert_eq!(
        formatter::render(&instructions, &labels),
        "    LDA #$EAEA\n    RTS\n"
    );
}

#[test]
fn test_vector_in_low_half_fails() {
    let err = disassemble(&[0xEA], "$001000 on on\n").unwrap_err();
    assert!(matches!(err, Error::Bus(_)));
    assert_eq!(err.to_string(), "invalid LoROM address 00:1000");
}

#[test]
fn test_malformed_vector_list() {
    let err = disassemble(&[0xEA], "$008000 on\n").unwrap_err();
    match err {
        Error::Text(text) => {
            assert_eq!(text.file, "vectors.txt");
            assert_eq!(text.line, 1);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_write_to_matches_render() {
    let code = [0xA9, 0x01, 0x8D, 0x21, 0x00, 0x60];
    let vectors = VectorList::parse("$008000 on on Start\n", "v").unwrap();
    let mut disassembler = Disassembler::new(rom_with(&code), vectors);
    disassembler.disassemble().unwrap();

    let mut buffer = Vec::new();
    formatter::write_to(&mut buffer, disassembler.instructions(), disassembler.labels()).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), disassembler.render());
    assert_eq!(
        disassembler.render(),
        "Start:\n    LDA #$01\n    STA $2100\n    RTS\n"
    );
}
