//! Opcode table validation tests
//!
//! Verifies that the 65816 opcode table is complete and internally
//! consistent.

use disasm816::{Behavior, OperandMeaning, OperandTarget, SizeModifier, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256);

    for (code, opcode) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(opcode.code as usize, code);
        assert_eq!(
            opcode.mnemonic.len(),
            3,
            "Opcode 0x{:02X} has mnemonic {:?}",
            code,
            opcode.mnemonic
        );
        assert!(
            opcode.operand_size <= 3,
            "Opcode 0x{:02X} has operand size {}",
            code,
            opcode.operand_size
        );
    }
}

#[test]
fn test_ora_immediate_follows_m_flag() {
    let ora = &OPCODE_TABLE[0x09];
    assert_eq!(ora.mnemonic, "ORA");
    assert_eq!(ora.modifier, SizeModifier::MFlag);
    assert_eq!(ora.effective_operand_size(false, false), 2);
    assert_eq!(ora.effective_operand_size(true, false), 1);
    assert_eq!(ora.effective_operand_size(false, true), 2);
}

#[test]
fn test_returns_and_jumps_stop() {
    for code in [0x40, 0x4C, 0x5C, 0x60, 0x6B, 0x6C, 0x7C, 0x80, 0x82, 0xDC] {
        assert_eq!(
            OPCODE_TABLE[code].behavior,
            Behavior::Stop,
            "{} (0x{:02X})",
            OPCODE_TABLE[code].mnemonic,
            code
        );
    }
}

#[test]
fn test_conditional_branches_continue() {
    for code in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
        let opcode = &OPCODE_TABLE[code];
        assert_eq!(opcode.behavior, Behavior::Next, "{}", opcode.mnemonic);
        assert_eq!(opcode.meaning, OperandMeaning::Relative);
        assert_eq!(opcode.target, OperandTarget::Code);
        assert_eq!(opcode.operand_size, 1);
    }
}

#[test]
fn test_calls_continue() {
    for code in [0x20, 0x22, 0xFC] {
        assert_eq!(OPCODE_TABLE[code].behavior, Behavior::Next);
    }
}

#[test]
fn test_patterns_match_operand_size() {
    // Relative operands display the resolved target, not the raw bytes
    for opcode in OPCODE_TABLE
        .iter()
        .filter(|opcode| opcode.meaning != OperandMeaning::Relative)
    {
        let pattern = opcode.pattern.to_ascii_uppercase();
        if pattern.contains("$HHMMLL") {
            assert_eq!(opcode.operand_size, 3, "{} 0x{:02X}", opcode.mnemonic, opcode.code);
        } else if pattern.contains("$HHLL") || pattern.contains("$HH") {
            assert_eq!(opcode.operand_size, 2, "{} 0x{:02X}", opcode.mnemonic, opcode.code);
        } else if pattern.contains("$LL") {
            assert_eq!(opcode.operand_size, 1, "{} 0x{:02X}", opcode.mnemonic, opcode.code);
        }
    }
}

#[test]
fn test_flag_modified_opcodes_are_immediates() {
    for opcode in OPCODE_TABLE.iter() {
        if opcode.modifier != SizeModifier::None {
            assert_eq!(opcode.pattern, "#$HHLL", "{} 0x{:02X}", opcode.mnemonic, opcode.code);
        }
    }
}

#[test]
fn test_x_modified_opcodes() {
    let mut codes: Vec<u8> = OPCODE_TABLE
        .iter()
        .filter(|opcode| opcode.modifier == SizeModifier::XFlag)
        .map(|opcode| opcode.code)
        .collect();
    codes.sort_unstable();
    // LDY, LDX, CPY, CPX immediates
    assert_eq!(codes, vec![0xA0, 0xA2, 0xC0, 0xE0]);
}
