// Oblique Gate - Errors
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// Library error type. The binary wraps these in anyhow at the top level.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ObliqueError>;

#[derive(Debug, Error)]
pub enum ObliqueError {
    /// Startup mode argument outside the accepted set
    #[error("invalid output mode '{0}' (expected 1 or 2, or nothing for full output)")]
    InvalidMode(String),

    /// Index source produced a value past the end of a table
    #[error("selection index {index} out of range for table of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// stdio read/write failure in the server loop
    #[error("transport I/O: {0}")]
    Io(#[from] std::io::Error),
}
