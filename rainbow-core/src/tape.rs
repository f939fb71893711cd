//! The VM's memory tape
//!
//! A fixed-size array of 8-bit cells, zero-initialized. Every access is
//! bounds-checked; an out-of-range address is a fault, never a no-op.

use crate::error::{VmError, VmResult};

/// Default cell count
pub const DEFAULT_CELLS: usize = 2048;

/// Byte-addressable memory tape
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
}

impl Tape {
    /// Create a tape with the given number of cells
    pub fn new(cells: usize) -> Self {
        Self {
            cells: vec![0; cells],
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the tape has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read the cell at `addr`
    pub fn read(&self, addr: usize) -> VmResult<u8> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(VmError::AddressOutOfBounds {
                addr,
                cells: self.cells.len(),
            })
    }

    /// Write `value` to the cell at `addr`
    pub fn write(&mut self, addr: usize, value: u8) -> VmResult<()> {
        let cells = self.cells.len();
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(VmError::AddressOutOfBounds { addr, cells }),
        }
    }

    /// All cells, in address order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_CELLS)
    }
}
