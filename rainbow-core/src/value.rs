//! Operand resolution
//!
//! The operand field serves two roles selected by the mode flag alone,
//! with no opcode-specific exception: a literal constant (immediate) or
//! a pointer whose target cell holds the value (indirect).

use crate::error::VmResult;
use crate::instruction::{AddressMode, Instruction};
use crate::tape::Tape;

/// Resolved operand: a value and, for indirect mode, the address it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuePart {
    /// Resolved numeric value
    pub value: u8,
    /// Resolved address; 0 unless the operand was indirect
    pub address: u8,
}

impl ValuePart {
    /// Apply the instruction's addressing mode against the tape.
    ///
    /// Indirect resolution reads the tape at resolve time, so the same
    /// word can yield a different value part on a later cycle.
    pub fn resolve(instr: &Instruction, tape: &Tape) -> VmResult<Self> {
        match instr.mode {
            AddressMode::Immediate => Ok(Self {
                value: instr.operand,
                address: 0,
            }),
            AddressMode::Indirect => {
                let address = instr.operand;
                let value = tape.read(address as usize)?;
                Ok(Self { value, address })
            }
        }
    }
}
