//! VM configuration
//!
//! Defaults can be overridden from the environment (.env files are
//! honored): `RAINBOW_TAPE_CELLS` and `RAINBOW_MAX_CYCLES`.

use crate::io::OutputMode;
use crate::tape::DEFAULT_CELLS;
use once_cell::sync::Lazy;
use std::env;

// Automatically load .env when config values are first read
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Default tape size in cells
/// Override: RAINBOW_TAPE_CELLS
pub fn default_tape_cells() -> usize {
    ensure_loaded();
    env::var("RAINBOW_TAPE_CELLS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CELLS)
}

/// Default cycle limit (0 = unlimited)
/// Override: RAINBOW_MAX_CYCLES
pub fn default_max_cycles() -> u64 {
    ensure_loaded();
    env::var("RAINBOW_MAX_CYCLES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Construction-time VM parameters, fixed for the run
#[derive(Debug, Clone)]
pub struct VmConfig {
    /// Tape size in cells
    pub tape_cells: usize,

    /// PRINT rendering mode
    pub output_mode: OutputMode,

    /// Dispatch cycle limit; 0 disables the guard
    pub max_cycles: u64,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            tape_cells: default_tape_cells(),
            output_mode: OutputMode::default(),
            max_cycles: default_max_cycles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VmConfig::default();
        assert!(config.tape_cells > 0);
        assert_eq!(config.output_mode, OutputMode::Ascii);
    }
}
