//! Crate-wide error type.
//!
//! Compilation itself never fails: missing inputs degrade to defaults. Errors
//! only arise at the edges: catalog normalization, the shared generation log,
//! configuration, and file/JSON I/O in the binary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),

    #[error("Generation log unavailable: {0}")]
    LogStore(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
