//! Formatting functions for disassembled instructions
//!
//! A listing is a sequence of label lines (`name:`) and instruction lines
//! indented by four spaces. Operands are produced by filling the opcode's
//! display pattern.

use crate::address::Address;
use crate::disassembler::instructions::{Instruction, InstructionList};
use crate::disassembler::labels::LabelMap;
use std::io::{self, Write};

/// Indentation of instruction lines.
pub const INDENT: &str = "    ";

/// Placeholders in the order they are matched.
const PLACEHOLDERS: [&str; 4] = ["$HHMMLL", "$HHLL", "$HH", "$LL"];

/// Substitute `value` into every placeholder of `pattern`.
///
/// `$HHMMLL` takes all 24 bits, `$HHLL` the low 16 bits, `$HH` and `$LL` the
/// high and low byte of the low 16 bits. Placeholders match in any letter
/// case; the hex digits are always uppercase.
///
/// # Examples
///
/// ```
/// use disasm816::formatter::substitute;
///
/// assert_eq!(substitute("$HHLL,X", 0x1234), "$1234,X");
/// assert_eq!(substitute("[$ll],y", 0x0012), "[$12],y");
/// assert_eq!(substitute("#$HH,#$LL", 0x7E7F), "#$7E,#$7F");
/// assert_eq!(substitute("$HHMMLL", 0xC08000), "$C08000");
/// ```
pub fn substitute(pattern: &str, value: u32) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut rest = pattern;

    'scan: while !rest.is_empty() {
        for placeholder in PLACEHOLDERS {
            if starts_with_ignore_case(rest, placeholder) {
                match placeholder {
                    "$HHMMLL" => out.push_str(&format!("${:06X}", value & 0xFF_FFFF)),
                    "$HHLL" => out.push_str(&format!("${:04X}", value & 0xFFFF)),
                    "$HH" => out.push_str(&format!("${:02X}", (value >> 8) & 0xFF)),
                    _ => out.push_str(&format!("${:02X}", value & 0xFF)),
                }
                rest = &rest[placeholder.len()..];
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}

/// Replace the first placeholder found, trying the longest first, with
/// `name`. Any remaining placeholders are filled from `value`.
///
/// # Examples
///
/// ```
/// use disasm816::formatter::substitute_label;
///
/// assert_eq!(substitute_label("$HHLL", "Loop", 0x8000), "Loop");
/// assert_eq!(substitute_label("($HHLL)", "Table", 0x9000), "(Table)");
/// ```
pub fn substitute_label(pattern: &str, name: &str, value: u32) -> String {
    let found = PLACEHOLDERS
        .iter()
        .find_map(|placeholder| find_ignore_case(pattern, placeholder).map(|at| (at, placeholder)));

    match found {
        Some((at, placeholder)) => {
            let before = substitute(&pattern[..at], value);
            let after = substitute(&pattern[at + placeholder.len()..], value);
            format!("{}{}{}", before, name, after)
        }
        None => substitute(pattern, value),
    }
}

/// Operand text for one instruction, or an empty string when the opcode
/// displays no operand.
pub fn format_operand(instr: &Instruction, labels: &LabelMap) -> String {
    let pattern = display_pattern(instr);
    if pattern.is_empty() {
        return String::new();
    }

    match instr.code_ref.or(instr.data_ref) {
        Some(target) => format_reference(&pattern, target, labels),
        None => substitute(&pattern, instr.operand),
    }
}

/// Format a single instruction line without indentation.
///
/// # Examples
///
/// ```
/// use disasm816::{Address, Instruction, LabelMap, OPCODE_TABLE};
/// use disasm816::formatter::format_instruction;
///
/// let lda = Instruction {
///     opcode: &OPCODE_TABLE[0xBD],
///     address: Address::new(0x80, 0x8000),
///     length: 3,
///     operand: 0x1234,
///     code_ref: None,
///     data_ref: None,
/// };
/// assert_eq!(format_instruction(&lda, &LabelMap::new()), "LDA $1234,X");
/// ```
pub fn format_instruction(instr: &Instruction, labels: &LabelMap) -> String {
    let operand = format_operand(instr, labels);

    if operand.is_empty() {
        instr.opcode.mnemonic.to_string()
    } else {
        format!("{} {}", instr.opcode.mnemonic, operand)
    }
}

/// Write the listing for `instructions` to `writer`.
pub fn write_to<W: Write>(
    writer: &mut W,
    instructions: &InstructionList,
    labels: &LabelMap,
) -> io::Result<()> {
    for instr in instructions {
        if let Some(label) = labels.get(instr.address) {
            writeln!(writer, "{}:", label.display_name())?;
        }
        writeln!(writer, "{}{}", INDENT, format_instruction(instr, labels))?;
    }
    Ok(())
}

/// Render the listing for `instructions` as a string.
pub fn render(instructions: &InstructionList, labels: &LabelMap) -> String {
    let mut out = String::new();
    for instr in instructions {
        if let Some(label) = labels.get(instr.address) {
            out.push_str(&label.display_name());
            out.push_str(":\n");
        }
        out.push_str(INDENT);
        out.push_str(&format_instruction(instr, labels));
        out.push('\n');
    }
    out
}

/// The opcode pattern, narrowed to a single byte when the M or X flag
/// shortened the operand.
fn display_pattern(instr: &Instruction) -> String {
    let pattern = instr.opcode.pattern;
    if !instr.is_narrowed() {
        return pattern.to_string();
    }

    match find_ignore_case(pattern, "$HHLL") {
        Some(at) => format!("{}$LL{}", &pattern[..at], &pattern[at + "$HHLL".len()..]),
        None => pattern.to_string(),
    }
}

fn format_reference(pattern: &str, target: Address, labels: &LabelMap) -> String {
    match labels.get(target) {
        Some(label) => substitute_label(pattern, &label.display_name(), target.linear()),
        None => substitute(pattern, target.linear()),
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn find_ignore_case(text: &str, needle: &str) -> Option<usize> {
    text.char_indices()
        .map(|(at, _)| at)
        .find(|&at| starts_with_ignore_case(&text[at..], needle))
}
