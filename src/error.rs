//! Error types for the attendance store.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("could not save {path:?} after {attempts} attempts: the file is locked by another program. Close it there, or check file permissions.")]
    Locked { path: PathBuf, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("store initialization failed: {0}")]
    Initialization(#[source] Box<StoreError>),
}

impl StoreError {
    /// Whether this error is the kind of transient lock contention the
    /// save path is allowed to retry. Everything else aborts immediately.
    pub fn is_lock_contention(&self) -> bool {
        match self {
            StoreError::Io(e) => {
                matches!(e.kind(), ErrorKind::PermissionDenied | ErrorKind::WouldBlock)
            }
            _ => false,
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
