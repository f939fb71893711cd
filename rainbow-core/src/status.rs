//! Process-level exit statuses
//!
//! The status is the only externally observable outcome of a run: the
//! program either names one through EXIT or a fault classifies into one.

use serde::Serialize;
use std::fmt;

/// Outcome of a completed or faulted run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum ExitStatus {
    /// Clean termination
    Ok = 0,
    /// The program signalled its own failure via EXIT
    ProgramException = 1,
    /// Malformed program content (bad opcode, bad hex, division by zero)
    RainbowException = 2,
    /// Fault not attributable to program data
    InternalException = 3,
    /// EXIT operand matching no defined status
    Unknown = 16,
}

impl ExitStatus {
    /// Map an EXIT operand to a status; unmapped values resolve to `Unknown`.
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::ProgramException,
            2 => Self::RainbowException,
            3 => Self::InternalException,
            16 => Self::Unknown,
            _ => Self::Unknown,
        }
    }

    /// Numeric code for the calling process
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::ProgramException => "ProgramException",
            Self::RainbowException => "RainbowException",
            Self::InternalException => "InternalException",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}
