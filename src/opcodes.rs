//! # Opcode Table
//!
//! The complete 256-entry 65816 opcode table. Every byte value maps to a
//! definition, so decoding never fails on an unknown opcode.
//!
//! Each entry carries:
//! - Mnemonic
//! - Base operand size in bytes (0-3, not counting the opcode byte)
//! - Whether control falls through to the next instruction
//! - Which status flag, if any, shortens the operand by one byte
//! - What the operand refers to and how to interpret its value
//! - The operand display pattern used by the formatter

/// Whether control continues with the following instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Execution falls through to the next instruction.
    Next,

    /// Execution does not reliably fall through (return, jump,
    /// unconditional branch).
    Stop,
}

/// Status flag that selects an 8-bit operand instead of a 16-bit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeModifier {
    /// Operand size is fixed.
    None,

    /// Operand is one byte shorter while the M (accumulator width) flag is set.
    MFlag,

    /// Operand is one byte shorter while the X (index width) flag is set.
    XFlag,
}

/// What the operand refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandTarget {
    /// No operand, or an operand that refers to nothing.
    None,

    /// The operand refers to data.
    Data,

    /// The operand refers to code.
    Code,
}

/// How the operand value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandMeaning {
    /// No operand value.
    None,

    /// A plain number: an immediate, a direct page or stack offset, or an
    /// address that is indexed or indirect.
    Number,

    /// A location that can be resolved statically.
    Address,

    /// A signed displacement from the end of the instruction.
    Relative,
}

/// Control-flow role of an instruction that references code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Not a control transfer.
    None,

    /// Relative branch (`BEQ`, `BRA`, `BRL`, ...).
    Branch,

    /// Jump (`JMP`, `JML`).
    Jump,

    /// Subroutine call (`JSR`, `JSL`).
    Call,
}

/// Static definition of one opcode.
///
/// # Examples
///
/// ```
/// use disasm816::{Behavior, SizeModifier, OPCODE_TABLE};
///
/// let ora = &OPCODE_TABLE[0x09];
/// assert_eq!(ora.mnemonic, "ORA");
/// assert_eq!(ora.operand_size, 2);
/// assert_eq!(ora.modifier, SizeModifier::MFlag);
///
/// let rts = &OPCODE_TABLE[0x60];
/// assert_eq!(rts.behavior, Behavior::Stop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Opcode byte value.
    pub code: u8,

    /// Instruction mnemonic (e.g., "LDA", "JSL").
    pub mnemonic: &'static str,

    /// Operand size in bytes before any flag modification (0-3).
    pub operand_size: u8,

    /// Whether control falls through.
    pub behavior: Behavior,

    /// Flag that shortens the operand.
    pub modifier: SizeModifier,

    /// What the operand refers to.
    pub target: OperandTarget,

    /// How the operand is interpreted.
    pub meaning: OperandMeaning,

    /// Operand display pattern.
    ///
    /// Placeholders: `$HHMMLL` (24-bit value), `$HHLL` (16-bit value), and
    /// `$HH` / `$LL` (high / low byte of a 16-bit value). Empty when the
    /// operand is not displayed.
    pub pattern: &'static str,
}

impl Opcode {
    /// Look up the definition for an opcode byte.
    pub fn get(code: u8) -> &'static Opcode {
        &OPCODE_TABLE[code as usize]
    }

    /// Operand size given the current M and X flag state.
    pub fn effective_operand_size(&self, m_flag: bool, x_flag: bool) -> u8 {
        match self.modifier {
            SizeModifier::MFlag if m_flag => self.operand_size - 1,
            SizeModifier::XFlag if x_flag => self.operand_size - 1,
            _ => self.operand_size,
        }
    }

    /// Control-flow role of this opcode's code reference.
    pub fn control_flow(&self) -> ControlFlow {
        if self.target != OperandTarget::Code {
            return ControlFlow::None;
        }

        match (self.meaning, self.mnemonic) {
            // PER pushes an address; it does not transfer control
            (OperandMeaning::Relative, "PER") => ControlFlow::None,
            (OperandMeaning::Relative, _) => ControlFlow::Branch,
            (_, "JMP" | "JML") => ControlFlow::Jump,
            (_, "JSR" | "JSL") => ControlFlow::Call,
            _ => ControlFlow::None,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn op(
    code: u8,
    mnemonic: &'static str,
    operand_size: u8,
    behavior: Behavior,
    modifier: SizeModifier,
    target: OperandTarget,
    meaning: OperandMeaning,
    pattern: &'static str,
) -> Opcode {
    Opcode {
        code,
        mnemonic,
        operand_size,
        behavior,
        modifier,
        target,
        meaning,
        pattern,
    }
}

use Behavior::{Next, Stop};
use OperandMeaning as Mng;
use OperandTarget as Tgt;
use SizeModifier as Mod;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Flag-modified immediates are written with their 16-bit pattern; the
/// formatter narrows it when the instruction was decoded with an 8-bit
/// operand.
pub static OPCODE_TABLE: [Opcode; 256] = [
    op(0x00, "BRK", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x01, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0x02, "COP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "#$LL"),
    op(0x03, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0x04, "TSB", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x05, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x06, "ASL", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x07, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0x08, "PHP", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x09, "ORA", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0x0A, "ASL", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x0B, "PHD", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x0C, "TSB", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x0D, "ORA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x0E, "ASL", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x0F, "ORA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0x10, "BPL", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x11, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0x12, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0x13, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0x14, "TRB", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x15, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x16, "ASL", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x17, "ORA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0x18, "CLC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x19, "ORA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0x1A, "INC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x1B, "TCS", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x1C, "TRB", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x1D, "ORA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x1E, "ASL", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x1F, "ORA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0x20, "JSR", 2, Next, Mod::None, Tgt::Code, Mng::Address, "$HHLL"),
    op(0x21, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0x22, "JSL", 3, Next, Mod::None, Tgt::Code, Mng::Address, "$HHMMLL"),
    op(0x23, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0x24, "BIT", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x25, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x26, "ROL", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x27, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0x28, "PLP", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x29, "AND", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0x2A, "ROL", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x2B, "PLD", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x2C, "BIT", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x2D, "AND", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x2E, "ROL", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x2F, "AND", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0x30, "BMI", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x31, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0x32, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0x33, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0x34, "BIT", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x35, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x36, "ROL", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x37, "AND", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0x38, "SEC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x39, "AND", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0x3A, "DEC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x3B, "TSC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x3C, "BIT", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x3D, "AND", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x3E, "ROL", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x3F, "AND", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0x40, "RTI", 0, Stop, Mod::None, Tgt::None, Mng::None, ""),
    op(0x41, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0x42, "WDM", 1, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x43, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0x44, "MVP", 2, Next, Mod::None, Tgt::Data, Mng::Number, "#$HH,#$LL"),
    op(0x45, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x46, "LSR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x47, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0x48, "PHA", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x49, "EOR", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0x4A, "LSR", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x4B, "PHK", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x4C, "JMP", 2, Stop, Mod::None, Tgt::Code, Mng::Address, "$HHLL"),
    op(0x4D, "EOR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x4E, "LSR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x4F, "EOR", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0x50, "BVC", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x51, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0x52, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0x53, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0x54, "MVN", 2, Next, Mod::None, Tgt::Data, Mng::Number, "#$HH,#$LL"),
    op(0x55, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x56, "LSR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x57, "EOR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0x58, "CLI", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x59, "EOR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0x5A, "PHY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x5B, "TCD", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x5C, "JMP", 3, Stop, Mod::None, Tgt::Code, Mng::Address, "$HHMMLL"),
    op(0x5D, "EOR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x5E, "LSR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x5F, "EOR", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0x60, "RTS", 0, Stop, Mod::None, Tgt::None, Mng::None, ""),
    op(0x61, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0x62, "PER", 2, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x63, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0x64, "STZ", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x65, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x66, "ROR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x67, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0x68, "PLA", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x69, "ADC", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0x6A, "ROR", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x6B, "RTL", 0, Stop, Mod::None, Tgt::None, Mng::None, ""),
    op(0x6C, "JMP", 2, Stop, Mod::None, Tgt::Code, Mng::Number, "($HHLL)"),
    op(0x6D, "ADC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x6E, "ROR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x6F, "ADC", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0x70, "BVS", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x71, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0x72, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0x73, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0x74, "STZ", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x75, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x76, "ROR", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x77, "ADC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0x78, "SEI", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x79, "ADC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0x7A, "PLY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x7B, "TDC", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x7C, "JMP", 2, Stop, Mod::None, Tgt::Code, Mng::Number, "($HHLL,X)"),
    op(0x7D, "ADC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x7E, "ROR", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x7F, "ADC", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0x80, "BRA", 1, Stop, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x81, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0x82, "BRL", 2, Stop, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x83, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0x84, "STY", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x85, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x86, "STX", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0x87, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0x88, "DEY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x89, "BIT", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0x8A, "TXA", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x8B, "PHB", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x8C, "STY", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x8D, "STA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x8E, "STX", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x8F, "STA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0x90, "BCC", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0x91, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0x92, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0x93, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0x94, "STY", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x95, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0x96, "STX", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,Y"),
    op(0x97, "STA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0x98, "TYA", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x99, "STA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0x9A, "TXS", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x9B, "TXY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0x9C, "STZ", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0x9D, "STA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x9E, "STZ", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0x9F, "STA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0xA0, "LDY", 2, Next, Mod::XFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xA1, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0xA2, "LDX", 2, Next, Mod::XFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xA3, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0xA4, "LDY", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xA5, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xA6, "LDX", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xA7, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0xA8, "TAY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xA9, "LDA", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xAA, "TAX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xAB, "PLB", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xAC, "LDY", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xAD, "LDA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xAE, "LDX", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xAF, "LDA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0xB0, "BCS", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0xB1, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0xB2, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0xB3, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0xB4, "LDY", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xB5, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xB6, "LDX", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,Y"),
    op(0xB7, "LDA", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0xB8, "CLV", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xB9, "LDA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0xBA, "TSX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xBB, "TYX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xBC, "LDY", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xBD, "LDA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xBE, "LDX", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0xBF, "LDA", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0xC0, "CPY", 2, Next, Mod::XFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xC1, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0xC2, "REP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "#$LL"),
    op(0xC3, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0xC4, "CPY", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xC5, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xC6, "DEC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xC7, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0xC8, "INY", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xC9, "CMP", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xCA, "DEX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xCB, "WAI", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xCC, "CPY", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xCD, "CMP", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xCE, "DEC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xCF, "CMP", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0xD0, "BNE", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0xD1, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0xD2, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0xD3, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0xD4, "PEI", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xD5, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xD6, "DEC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xD7, "CMP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0xD8, "CLD", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xD9, "CMP", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0xDA, "PHX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xDB, "STP", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xDC, "JMP", 2, Stop, Mod::None, Tgt::Code, Mng::Number, "[$HHLL]"),
    op(0xDD, "CMP", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xDE, "DEC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xDF, "CMP", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
    op(0xE0, "CPX", 2, Next, Mod::XFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xE1, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,X)"),
    op(0xE2, "SEP", 1, Next, Mod::None, Tgt::Data, Mng::Number, "#$LL"),
    op(0xE3, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,S"),
    op(0xE4, "CPX", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xE5, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xE6, "INC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL"),
    op(0xE7, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL]"),
    op(0xE8, "INX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xE9, "SBC", 2, Next, Mod::MFlag, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xEA, "NOP", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xEB, "XBA", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xEC, "CPX", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xED, "SBC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xEE, "INC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL"),
    op(0xEF, "SBC", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL"),
    op(0xF0, "BEQ", 1, Next, Mod::None, Tgt::Code, Mng::Relative, "$HHLL"),
    op(0xF1, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL),Y"),
    op(0xF2, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL)"),
    op(0xF3, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "($LL,S),Y"),
    op(0xF4, "PEA", 2, Next, Mod::None, Tgt::Data, Mng::Number, "#$HHLL"),
    op(0xF5, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xF6, "INC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "$LL,X"),
    op(0xF7, "SBC", 1, Next, Mod::None, Tgt::Data, Mng::Number, "[$LL],Y"),
    op(0xF8, "SED", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xF9, "SBC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,Y"),
    op(0xFA, "PLX", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xFB, "XCE", 0, Next, Mod::None, Tgt::None, Mng::None, ""),
    op(0xFC, "JSR", 2, Next, Mod::None, Tgt::Code, Mng::Number, "($HHLL,X)"),
    op(0xFD, "SBC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xFE, "INC", 2, Next, Mod::None, Tgt::Data, Mng::Number, "$HHLL,X"),
    op(0xFF, "SBC", 3, Next, Mod::None, Tgt::Data, Mng::Number, "$HHMMLL,X"),
];
