//! # 65816 LoROM Disassembler
//!
//! A best-effort disassembler for 65816 machine code stored in LoROM
//! cartridge images.
//!
//! Disassembly starts from a list of vectors: addresses where the CPU is
//! known to execute code, together with the M and X flag state it has
//! there. From each vector the decoder walks forward until an instruction
//! that does not fall through. Operands that refer to code or data become
//! labels, and the result is rendered as an assembly-style listing.
//!
//! ## Quick Start
//!
//! ```rust
//! use disasm816::{Address, Disassembler, LoRom, RomImage, Vector, VectorList};
//!
//! // NOP; RTS at 00:8000
//! let bus = LoRom::new(RomImage::new(vec![0xEA, 0x60]));
//!
//! let mut vectors = VectorList::new();
//! vectors.push(Vector::new(Address::new(0x00, 0x8000), true, true).with_label("Reset"));
//!
//! let mut disassembler = Disassembler::new(bus, vectors);
//! disassembler.disassemble()?;
//!
//! assert_eq!(disassembler.render(), "Reset:\n    NOP\n    RTS\n");
//! # Ok::<(), disasm816::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Decoding**: every opcode byte has an entry in a single
//!   constant table, so decoding never meets an unknown opcode
//! - **Pluggable Mapping**: the decoder reads through the `CartridgeBus`
//!   trait; `LoRom` is the provided mapping
//! - **No Global State**: logging goes through the `log` facade and the
//!   binary chooses the level
//!
//! ## Modules
//!
//! - `address` - 24-bit addresses and address ranges
//! - `opcodes` - Opcode definition table
//! - `memory` - ROM storage and the `CartridgeBus` trait
//! - `lorom` - LoROM address mapping
//! - `disassembler` - Decoder, instruction and label collections, vectors,
//!   listing formatter
//! - `text` - Line and value parsing shared by the text inputs
//! - `config` - Run configuration file

pub mod address;
pub mod config;
pub mod disassembler;
pub mod lorom;
pub mod memory;
pub mod opcodes;
pub mod text;

// Re-export public API
pub use address::{Address, AddressRange, EmptyRangeError};
pub use config::{Config, ConfigError};
pub use disassembler::decoder::Decoder;
pub use disassembler::formatter;
pub use disassembler::instructions::{ConflictError, Instruction, InstructionList};
pub use disassembler::labels::{Label, LabelClass, LabelError, LabelMap};
pub use disassembler::vectors::{Vector, VectorList};
pub use disassembler::Disassembler;
pub use lorom::LoRom;
pub use memory::{BusError, ByteSource, CartridgeBus, RomImage};
pub use opcodes::{
    Behavior, ControlFlow, Opcode, OperandMeaning, OperandTarget, SizeModifier, OPCODE_TABLE,
};
pub use text::TextError;

/// Errors that can occur while loading inputs, disassembling, or writing
/// the listing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A read from the cartridge failed.
    #[error(transparent)]
    Bus(#[from] BusError),

    /// Two decoded instructions overlap.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// A label was used as both code and data.
    #[error(transparent)]
    Label(#[from] LabelError),

    /// A vector list or configuration line is malformed.
    #[error(transparent)]
    Text(#[from] TextError),

    /// The configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading an input or writing the listing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
