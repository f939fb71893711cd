//! Console I/O against the tape
//!
//! PRINT and IN are the only opcodes that touch the outside world. The
//! adapter takes any buffered reader and writer so tests can run without
//! a console; `stdio` wires the real one.

use crate::error::VmResult;
use crate::tape::Tape;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Marker written to the sentinel cell when an input line was taken as a
/// numeric literal instead of character data.
pub const LITERAL_MARKER: u8 = 0xFF;

/// How PRINT renders tape cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Raw characters
    #[default]
    Ascii,
    /// Digit strings joined by `-`
    Decimal,
    /// Two uppercase hex digits per cell, joined by `-`
    Hex,
}

/// I/O adapter owned by the interpreter for the lifetime of a run
pub struct IoAdapter<R, W> {
    reader: R,
    writer: W,
    mode: OutputMode,
}

impl IoAdapter<BufReader<Stdin>, Stdout> {
    /// Adapter wired to the process console
    pub fn stdio(mode: OutputMode) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), mode)
    }
}

impl<R: BufRead, W: Write> IoAdapter<R, W> {
    /// Adapter over arbitrary streams
    pub fn new(reader: R, writer: W, mode: OutputMode) -> Self {
        Self {
            reader,
            writer,
            mode,
        }
    }

    /// Configured output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Consume the adapter, returning the underlying streams
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print tape cells from `start` to `end` inclusive.
    ///
    /// An empty range (`end < start`) emits nothing and is not an error;
    /// PRINT with an immediate operand resolves `end` to 0 and lands here
    /// for any nonzero `start`.
    pub fn print(&mut self, tape: &Tape, start: u8, end: u8) -> VmResult<()> {
        for addr in start..=end {
            let byte = tape.read(addr as usize)?;
            match self.mode {
                OutputMode::Ascii => write!(self.writer, "{}", byte as char)?,
                OutputMode::Decimal => {
                    if addr > start {
                        write!(self.writer, "-")?;
                    }
                    write!(self.writer, "{}", byte)?;
                }
                OutputMode::Hex => {
                    if addr > start {
                        write!(self.writer, "-")?;
                    }
                    write!(self.writer, "{:02X}", byte)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line of input into the tape.
    ///
    /// A line that parses entirely as an unsigned integer below the tape
    /// size is written (low 8 bits) to `start`, with `LITERAL_MARKER` in
    /// the sentinel cell. Anything else is written byte by byte from
    /// `start`, with the index just past the last byte in the sentinel.
    pub fn input(&mut self, tape: &mut Tape, start: u8, sentinel: u8) -> VmResult<()> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let line = line.trim_end_matches(['\n', '\r']);

        if let Ok(n) = line.parse::<usize>() {
            if n < tape.len() {
                tape.write(start as usize, n as u8)?;
                tape.write(sentinel as usize, LITERAL_MARKER)?;
                return Ok(());
            }
        }

        let mut next = start as usize;
        for &byte in line.as_bytes() {
            tape.write(next, byte)?;
            next += 1;
        }
        tape.write(sentinel as usize, next as u8)?;
        Ok(())
    }
}
