//! # 🌈 rainbow-runtime — Runtime for Rainbow Programs
//!
//! Carrega e executa listings de instruções Rainbow.
//!
//! ## Fluxo de Execução
//!
//! ```text
//! Rainbow listing (.rbw)
//!      ↓
//! ProgramLoader (hex instruction words)
//!      ↓
//! Rainbow VM (rainbow-core) ←─── Executa aqui
//!      ↓
//! ExitStatus (process exit code)
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use rainbow_runtime::{RainbowRuntime, RuntimeConfig};
//!
//! let mut runtime = RainbowRuntime::new(RuntimeConfig::default());
//! let status = runtime.run_source("10002A 000000")?;
//! assert_eq!(status.code(), 0);
//! # Ok::<(), rainbow_runtime::RuntimeError>(())
//! ```

pub mod error;
pub mod loader;
pub mod runtime;

pub use error::{RuntimeError, RuntimeResult};
pub use loader::ProgramLoader;
pub use runtime::{RainbowRuntime, RuntimeConfig};

// Re-export core types
pub use rainbow_core::{ExitStatus, Interpreter, OutputMode, VmConfig, VmError};
