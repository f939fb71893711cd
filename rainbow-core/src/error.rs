//! VM errors and fault classification

use crate::status::ExitStatus;
use thiserror::Error;

/// VM result type
pub type VmResult<T> = Result<T, VmError>;

/// Faults raised by the VM
#[derive(Debug, Error)]
pub enum VmError {
    /// Opcode digit maps to no instruction
    #[error("invalid opcode digit: {0:X}")]
    InvalidOpcode(u8),

    /// Instruction word contains something other than hex digits
    #[error("instruction word is not hexadecimal: {0:?}")]
    InvalidWord(String),

    /// Instruction word has the wrong length
    #[error("instruction word length: expected {expected} digits, found {found}")]
    WordLength { expected: usize, found: usize },

    /// Tape access outside the configured cell count
    #[error("tape address out of bounds: {addr} (tape has {cells} cells)")]
    AddressOutOfBounds { addr: usize, cells: usize },

    /// DIV/MOD with an operand value of zero
    #[error("division by zero at statement {pc}")]
    DivisionByZero { pc: usize },

    /// Dispatch loop ran past the configured cycle limit
    #[error("cycle limit exceeded: {0}")]
    CycleLimitExceeded(u64),

    /// Host I/O failure during PRINT or IN
    #[error("I/O error: {0}")]
    Io(String),
}

impl VmError {
    /// Classify this fault as a process-level exit status.
    ///
    /// Decode faults and division by zero come from program data
    /// (RainbowException); everything else is the VM's own problem
    /// (InternalException).
    pub fn status(&self) -> ExitStatus {
        match self {
            Self::InvalidOpcode(_)
            | Self::InvalidWord(_)
            | Self::WordLength { .. }
            | Self::DivisionByZero { .. } => ExitStatus::RainbowException,
            Self::AddressOutOfBounds { .. }
            | Self::CycleLimitExceeded(_)
            | Self::Io(_) => ExitStatus::InternalException,
        }
    }
}

impl From<std::io::Error> for VmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
