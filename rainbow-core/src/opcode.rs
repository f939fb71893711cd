//! Rainbow opcodes
//!
//! One hex digit selects the operation. The gaps (4, 8, 9, F) carry no
//! instruction and fail decoding.

/// Opcodes of the Rainbow instruction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Terminate with the resolved value as exit status
    Exit = 0x0,
    /// Set tape cell at the direct address
    Set = 0x1,
    /// Print tape cells from the direct address to the resolved address
    Print = 0x2,
    /// Read one input line into the tape
    In = 0x3,
    /// Jump target marker, no-op in linear execution
    Label = 0x5,
    /// Jump backward to the nearest matching label
    Lookback = 0x6,
    /// Jump forward to the nearest matching label
    Lookahead = 0x7,
    /// Add to tape cell (mod 256)
    Add = 0xA,
    /// Subtract from tape cell (mod 256)
    Sub = 0xB,
    /// Multiply tape cell (mod 256)
    Mul = 0xC,
    /// Divide tape cell
    Div = 0xD,
    /// Remainder of tape cell
    Mod = 0xE,
}

impl Opcode {
    /// Map an opcode digit to its operation
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0x0 => Some(Self::Exit),
            0x1 => Some(Self::Set),
            0x2 => Some(Self::Print),
            0x3 => Some(Self::In),
            0x5 => Some(Self::Label),
            0x6 => Some(Self::Lookback),
            0x7 => Some(Self::Lookahead),
            0xA => Some(Self::Add),
            0xB => Some(Self::Sub),
            0xC => Some(Self::Mul),
            0xD => Some(Self::Div),
            0xE => Some(Self::Mod),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Exit => "EXIT",
            Self::Set => "SET",
            Self::Print => "PRINT",
            Self::In => "IN",
            Self::Label => "LABEL",
            Self::Lookback => "LOOKBACK",
            Self::Lookahead => "LOOKAHEAD",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
        }
    }

    /// True for ADD/SUB/MUL/DIV/MOD
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod
        )
    }
}
