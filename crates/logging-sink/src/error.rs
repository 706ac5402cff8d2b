//! crates/logging-sink/src/error.rs
//!
//! Error types for sink operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or writing a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file could not be opened or created.
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Writing or flushing the sink failed.
    #[error("I/O error: {0}")]
    Write(
        #[from]
        #[source]
        io::Error,
    ),
}
