//! Error types for the `cscan` binary.
//!
//! Scanning itself cannot fail; these cover everything around it: reading the
//! input, driving the terminal, and installing the log subscriber.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CscanError {
    /// The input file could not be read.
    #[error("cannot read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing, or writing the listing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CscanError>;
