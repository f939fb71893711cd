//! The Rainbow execution engine
//!
//! A synchronous dispatch loop: fetch the word at the program counter,
//! decode it, resolve its operand, execute, advance. EXIT returns a
//! status value through the loop's own result; faults propagate as
//! errors and terminate the run at the point of occurrence.

use crate::config::VmConfig;
use crate::error::{VmError, VmResult};
use crate::instruction::Instruction;
use crate::io::IoAdapter;
use crate::opcode::Opcode;
use crate::status::ExitStatus;
use crate::tape::Tape;
use crate::value::ValuePart;
use serde::Serialize;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::time::Instant;

/// Execution statistics for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterpreterStats {
    /// Dispatch cycles executed
    pub cycles: u64,
    /// Wall time spent in `execute`, in microseconds
    pub execute_time_us: u64,
}

/// One VM run: program, tape, counter and I/O, exclusively owned.
///
/// Each run is a freshly constructed instance; nothing is shared between
/// runs and the program sequence is never mutated.
pub struct Interpreter<R, W> {
    program: Vec<String>,
    tape: Tape,
    pc: usize,
    io: IoAdapter<R, W>,
    max_cycles: u64,
    stats: InterpreterStats,
}

impl Interpreter<BufReader<Stdin>, Stdout> {
    /// Interpreter wired to the process console
    pub fn new(program: Vec<String>, config: &VmConfig) -> Self {
        let io = IoAdapter::stdio(config.output_mode);
        Self::with_io(program, config, io)
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Interpreter over an arbitrary I/O adapter
    pub fn with_io(program: Vec<String>, config: &VmConfig, io: IoAdapter<R, W>) -> Self {
        Self {
            program,
            tape: Tape::new(config.tape_cells),
            pc: 0,
            io,
            max_cycles: config.max_cycles,
            stats: InterpreterStats::default(),
        }
    }

    /// Run the program to completion.
    ///
    /// Returns the exit status on a clean halt (EXIT, or the counter
    /// running past the last instruction) and the fault otherwise. The
    /// caller maps faults to statuses exactly once via [`VmError::status`].
    pub fn execute(&mut self) -> VmResult<ExitStatus> {
        let start = Instant::now();
        let result = self.dispatch_loop();
        self.stats.execute_time_us = start.elapsed().as_micros() as u64;
        result
    }

    fn dispatch_loop(&mut self) -> VmResult<ExitStatus> {
        while self.pc < self.program.len() {
            if self.max_cycles > 0 && self.stats.cycles >= self.max_cycles {
                return Err(VmError::CycleLimitExceeded(self.max_cycles));
            }

            let instr = Instruction::decode(&self.program[self.pc])?;
            let val = ValuePart::resolve(&instr, &self.tape)?;
            self.stats.cycles += 1;

            match instr.opcode {
                Opcode::Exit => return Ok(ExitStatus::from_value(val.value)),
                Opcode::Set => self.op_set(instr.addr, val.value)?,
                Opcode::Print => self.io.print(&self.tape, instr.addr, val.address)?,
                Opcode::In => self.io.input(&mut self.tape, instr.addr, val.address)?,
                Opcode::Label => {}
                Opcode::Lookback => self.pc = self.look_back(val.value)?,
                Opcode::Lookahead => self.pc = self.look_ahead(val.value)?,
                Opcode::Add => self.op_add(instr.addr, val.value)?,
                Opcode::Sub => self.op_sub(instr.addr, val.value)?,
                Opcode::Mul => self.op_mul(instr.addr, val.value)?,
                Opcode::Div => self.op_div(instr.addr, val.value)?,
                Opcode::Mod => self.op_mod(instr.addr, val.value)?,
            }

            self.pc += 1;
        }

        Ok(ExitStatus::Ok)
    }

    // ═════════════════════════════════════════════════════════════════
    // OPCODE HANDLERS
    // ═════════════════════════════════════════════════════════════════

    fn op_set(&mut self, addr: u8, value: u8) -> VmResult<()> {
        self.tape.write(addr as usize, value)
    }

    fn op_add(&mut self, addr: u8, operand: u8) -> VmResult<()> {
        let cell = self.tape.read(addr as usize)?;
        self.tape.write(addr as usize, cell.wrapping_add(operand))
    }

    fn op_sub(&mut self, addr: u8, operand: u8) -> VmResult<()> {
        let cell = self.tape.read(addr as usize)?;
        self.tape.write(addr as usize, cell.wrapping_sub(operand))
    }

    fn op_mul(&mut self, addr: u8, operand: u8) -> VmResult<()> {
        let cell = self.tape.read(addr as usize)?;
        self.tape.write(addr as usize, cell.wrapping_mul(operand))
    }

    fn op_div(&mut self, addr: u8, operand: u8) -> VmResult<()> {
        // Checked before the cell is touched: a faulting DIV must not
        // leave the tape mutated.
        if operand == 0 {
            return Err(VmError::DivisionByZero { pc: self.pc });
        }
        let cell = self.tape.read(addr as usize)?;
        self.tape.write(addr as usize, cell / operand)
    }

    fn op_mod(&mut self, addr: u8, operand: u8) -> VmResult<()> {
        if operand == 0 {
            return Err(VmError::DivisionByZero { pc: self.pc });
        }
        let cell = self.tape.read(addr as usize)?;
        self.tape.write(addr as usize, cell % operand)
    }

    // ═════════════════════════════════════════════════════════════════
    // CONTROL TRANSFER
    // ═════════════════════════════════════════════════════════════════

    /// Backward label search from the current counter.
    ///
    /// The lower bound is exclusive: index 0 is never inspected, so a
    /// label there cannot be a lookback target. Behaviorally harmless
    /// because a miss at 0 and a match at 0 park the counter in the same
    /// place either way. A miss is not an error; the counter lands on
    /// the boundary and the normal advance resumes past it.
    fn look_back(&self, target: u8) -> VmResult<usize> {
        let mut i = self.pc;
        while i > 0 {
            if self.is_matching_label(i, target)? {
                break;
            }
            i -= 1;
        }
        Ok(i)
    }

    /// Forward label search, mirrored: the last index is never inspected,
    /// and a miss parks the counter there so the advance halts the run.
    fn look_ahead(&self, target: u8) -> VmResult<usize> {
        let last = self.program.len() - 1;
        let mut i = self.pc;
        while i < last {
            if self.is_matching_label(i, target)? {
                break;
            }
            i += 1;
        }
        Ok(i)
    }

    fn is_matching_label(&self, index: usize, target: u8) -> VmResult<bool> {
        let instr = Instruction::decode(&self.program[index])?;
        if instr.opcode != Opcode::Label {
            return Ok(false);
        }
        let val = ValuePart::resolve(&instr, &self.tape)?;
        Ok(val.value == target)
    }

    // ═════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═════════════════════════════════════════════════════════════════

    /// The memory tape
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Mutable tape access, for seeding cells before a run
    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    /// Current program counter
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Statistics for the run so far
    pub fn stats(&self) -> &InterpreterStats {
        &self.stats
    }

    /// Consume the interpreter, returning the I/O streams; used by tests
    /// to inspect captured output after a run.
    pub fn into_io_parts(self) -> (R, W) {
        self.io.into_parts()
    }
}
