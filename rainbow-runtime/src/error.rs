//! Error types for the Rainbow runtime

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("VM fault: {0}")]
    Vm(#[from] rainbow_core::VmError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid program format: {0}")]
    InvalidFormat(String),

    #[error("No program loaded")]
    NoProgram,
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
