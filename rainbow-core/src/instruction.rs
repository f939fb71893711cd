//! Instruction decoding
//!
//! One instruction word is 6 hex digits, left to right: opcode (1),
//! direct address (2), addressing-mode flag (1), operand (2). Words are
//! decoded fresh every cycle; there is no pre-decoded cache.

use crate::error::{VmError, VmResult};
use crate::opcode::Opcode;
use std::fmt;

/// Digits per instruction word
pub const WORD_LEN: usize = 6;

/// Flag digit selecting indirect resolution
const INDIRECT_FLAG: u8 = 1;

/// Addressing mode of the operand field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    /// Operand is the value itself
    Immediate,
    /// Operand is a tape address whose contents are the value
    Indirect,
}

/// Decoded instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Operation
    pub opcode: Opcode,
    /// Direct address field (digits 1-2)
    pub addr: u8,
    /// Addressing mode of the operand (digit 3)
    pub mode: AddressMode,
    /// Raw operand field (digits 4-5)
    pub operand: u8,
}

impl Instruction {
    /// Decode one instruction word.
    ///
    /// Fails on a wrong-length word, a non-hex digit, or an opcode digit
    /// that maps to no instruction. All three are program-format faults.
    pub fn decode(word: &str) -> VmResult<Self> {
        if word.len() != WORD_LEN {
            return Err(VmError::WordLength {
                expected: WORD_LEN,
                found: word.len(),
            });
        }
        // Also guards the byte-index slicing below against multi-byte chars.
        if !word.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(VmError::InvalidWord(word.to_string()));
        }

        let opcode_digit = Self::field(word, 0, 1)?;
        let opcode = Opcode::from_digit(opcode_digit)
            .ok_or(VmError::InvalidOpcode(opcode_digit))?;
        let addr = Self::field(word, 1, 3)?;
        let flag = Self::field(word, 3, 4)?;
        let operand = Self::field(word, 4, 6)?;

        let mode = if flag == INDIRECT_FLAG {
            AddressMode::Indirect
        } else {
            AddressMode::Immediate
        };

        Ok(Self {
            opcode,
            addr,
            mode,
            operand,
        })
    }

    fn field(word: &str, lo: usize, hi: usize) -> VmResult<u8> {
        u8::from_str_radix(&word[lo..hi], 16)
            .map_err(|_| VmError::InvalidWord(word.to_string()))
    }

    /// Assembly-style rendering for debug listings
    pub fn disassemble(&self) -> String {
        match self.mode {
            AddressMode::Immediate => format!(
                "{} {:02X}, {:02X}",
                self.opcode.mnemonic(),
                self.addr,
                self.operand
            ),
            AddressMode::Indirect => format!(
                "{} {:02X}, [{:02X}]",
                self.opcode.mnemonic(),
                self.addr,
                self.operand
            ),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.disassemble())
    }
}
