//! 65816 Disassembler Module
//!
//! Walks the cartridge from each vector in turn, collecting decoded
//! instructions and the labels their operands refer to.
//!
//! Decoding is linear: a walk follows fall-through only and ends at the
//! first instruction that does not continue (return, jump, unconditional
//! branch). Branch and call targets become labels but are not walked
//! unless a vector points at them.

pub mod decoder;
pub mod formatter;
pub mod instructions;
pub mod labels;
pub mod vectors;

use crate::memory::CartridgeBus;
use crate::opcodes::ControlFlow;
use decoder::Decoder;
use instructions::{Instruction, InstructionList};
use labels::{LabelClass, LabelMap};
use vectors::{Vector, VectorList};

/// Disassembly run over one cartridge.
///
/// # Examples
///
/// ```
/// use disasm816::{Address, Disassembler, LoRom, RomImage, Vector, VectorList};
///
/// let bus = LoRom::new(RomImage::new(vec![0xEA, 0x60]));
/// let vectors: VectorList = [Vector::new(Address::new(0x00, 0x8000), false, false)]
///     .into_iter()
///     .collect();
///
/// let mut disassembler = Disassembler::new(bus, vectors);
/// disassembler.disassemble().unwrap();
/// assert_eq!(disassembler.instructions().len(), 2);
/// ```
pub struct Disassembler<B> {
    bus: B,
    vectors: VectorList,
    instructions: InstructionList,
    labels: LabelMap,
}

impl<B: CartridgeBus> Disassembler<B> {
    /// Create a run that will process `vectors` in order.
    pub fn new(bus: B, vectors: VectorList) -> Self {
        Self {
            bus,
            vectors,
            instructions: InstructionList::new(),
            labels: LabelMap::new(),
        }
    }

    /// Process every queued vector.
    ///
    /// # Errors
    ///
    /// Stops at the first bus error, instruction conflict or label
    /// classification conflict. Results from the vectors processed before
    /// the failure stay available through [`instructions`](Self::instructions)
    /// and [`labels`](Self::labels).
    pub fn disassemble(&mut self) -> crate::Result<()> {
        let vectors = std::mem::take(&mut self.vectors);
        let total = vectors.len();

        for vector in vectors {
            self.walk(&vector)?;
        }

        log::info!(
            "disassembled {} vectors: {} instructions, {} labels",
            total,
            self.instructions.len(),
            self.labels.len()
        );
        Ok(())
    }

    fn walk(&mut self, vector: &Vector) -> crate::Result<()> {
        log::debug!(
            "vector {} (M={}, X={}, DB={:02X})",
            vector.address,
            vector.m_flag,
            vector.x_flag,
            vector.data_bank
        );

        if let Some(name) = &vector.label {
            let label = self.labels.label_for(vector.address);
            if let Some(previous) = label.set_name(name.as_str()) {
                if previous != *name {
                    log::warn!(
                        "label at {} renamed from {} to {}",
                        vector.address,
                        previous,
                        name
                    );
                }
            }
            label.classify(LabelClass::Code)?;
        }

        let mut decoder = Decoder::new(&self.bus);
        decoder.set_flags(vector.m_flag, vector.x_flag);
        decoder.set_data_bank(vector.data_bank);
        decoder.move_to(vector.address);

        let mut decoded = 0usize;
        while let Some(instruction) = decoder.decode_next()? {
            add_instruction(&mut self.instructions, &instruction)?;
            add_references(&mut self.labels, &instruction)?;
            decoded += 1;
        }

        log::debug!(
            "vector {} decoded {} instructions, stopped at {}",
            vector.address,
            decoded,
            decoder.position()
        );
        Ok(())
    }

    /// Instructions decoded so far.
    pub fn instructions(&self) -> &InstructionList {
        &self.instructions
    }

    /// Labels created so far.
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Render the listing for everything decoded so far.
    pub fn render(&self) -> String {
        formatter::render(&self.instructions, &self.labels)
    }

    /// Take the results.
    pub fn into_parts(self) -> (InstructionList, LabelMap) {
        (self.instructions, self.labels)
    }
}

/// Insert unless an identical decoding is already present.
fn add_instruction(list: &mut InstructionList, instruction: &Instruction) -> crate::Result<()> {
    if let Some(existing) = list.get(instruction.address) {
        if existing.same_decoding(instruction) {
            return Ok(());
        }
    }

    list.insert(instruction.clone())?;
    Ok(())
}

fn add_references(labels: &mut LabelMap, instruction: &Instruction) -> crate::Result<()> {
    if let Some(target) = instruction.code_ref {
        let label = match instruction.opcode.control_flow() {
            ControlFlow::Branch => labels.label_for_branch(target),
            ControlFlow::Jump => labels.label_for_jump(target),
            ControlFlow::Call => labels.label_for_call(target),
            ControlFlow::None => labels.label_for(target),
        };
        label.classify(LabelClass::Code)?;
    }

    if let Some(target) = instruction.data_ref {
        labels.label_for(target).classify(LabelClass::Data)?;
    }

    Ok(())
}
