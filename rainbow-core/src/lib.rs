//! # 🌈 rainbow-core — Rainbow Virtual Machine
//!
//! A small bytecode VM that executes fixed-width hexadecimal instruction
//! words against a bounded byte tape.
//!
//! ## Execution Flow
//!
//! ```text
//! Instruction words (6 hex digits each)
//!      ↓
//! Instruction::decode        (opcode, address, mode flag, operand)
//!      ↓
//! ValuePart::resolve         (immediate literal or indirect tape read)
//!      ↓
//! Interpreter dispatch loop  (one instruction per cycle)
//!      ↓
//! ExitStatus                 (OK, ProgramException, RainbowException, ...)
//! ```
//!
//! ## Instruction Word
//!
//! Left to right: opcode (1 digit), direct address (2 digits),
//! addressing-mode flag (1 digit, `1` = indirect), operand (2 digits).
//!
//! ## Modules
//!
//! - [`opcode`]: the instruction set
//! - [`instruction`]: word decoding and disassembly
//! - [`value`]: operand resolution against the tape
//! - [`tape`]: the byte-addressable memory
//! - [`io`]: PRINT/IN adapter with pluggable output rendering
//! - [`interpreter`]: the dispatch loop
//! - [`status`]: process-level exit statuses
//! - [`error`]: faults and their classification
//! - [`config`]: construction-time parameters
//!
//! ## Quick Start
//!
//! ```
//! use rainbow_core::{ExitStatus, Interpreter, IoAdapter, OutputMode, VmConfig};
//! use std::io::Cursor;
//!
//! // SET tape[0] = 0x2A, then EXIT 0.
//! let program = vec!["10002A".to_string(), "000000".to_string()];
//!
//! let config = VmConfig::default();
//! let io = IoAdapter::new(Cursor::new(Vec::new()), Vec::new(), OutputMode::Ascii);
//! let mut vm = Interpreter::with_io(program, &config, io);
//!
//! let status = vm.execute()?;
//! assert_eq!(status, ExitStatus::Ok);
//! assert_eq!(vm.tape().read(0)?, 0x2A);
//! # Ok::<(), rainbow_core::VmError>(())
//! ```

pub mod config;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod io;
pub mod opcode;
pub mod status;
pub mod tape;
pub mod value;

pub use config::VmConfig;
pub use error::{VmError, VmResult};
pub use instruction::{AddressMode, Instruction, WORD_LEN};
pub use interpreter::{Interpreter, InterpreterStats};
pub use io::{IoAdapter, OutputMode, LITERAL_MARKER};
pub use opcode::Opcode;
pub use status::ExitStatus;
pub use tape::{Tape, DEFAULT_CELLS};
pub use value::ValuePart;
