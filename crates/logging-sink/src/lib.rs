#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` renders decorated log lines into arbitrary
//! [`std::io::Write`] targets. It knows nothing about severities or
//! thresholds; the `logging` crate decides *whether* and *how* a record is
//! decorated and hands this crate a fully resolved [`Line`].
//!
//! # Design
//!
//! The crate exposes [`RecordSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor that remembers whether ANSI colors are
//! enabled. [`FileSink`] is an RAII guard that
//! opens a log file in append-create mode for the duration of a single record
//! and flushes it on every exit path before the handle is closed.
//!
//! # Invariants
//!
//! - A colored line always ends with [`RESET`] so no color state leaks into
//!   the next line, even when the message body is empty.
//! - A sink with colors disabled never writes an escape sequence.
//! - Every line ends with exactly one newline; a single trailing newline in
//!   the body is absorbed.
//! - [`FileSink`] never creates directories; only the leaf file is created.
//!
//! # Errors
//!
//! Writing surfaces [`std::io::Error`] values from the underlying writer.
//! Opening a file target reports [`SinkError::Open`] carrying the offending
//! path.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{AnsiColor, Line, RecordSink};
//!
//! let mut sink = RecordSink::new(Vec::new());
//! sink.set_colors(false);
//! sink.write_line(&Line::new(
//!     AnsiColor::BrightGreen,
//!     "[Info]",
//!     "2024/01/02 - 03:04:05",
//!     format_args!("ready in {} ms", 12),
//! ))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "[Info] [2024/01/02 - 03:04:05] ready in 12 ms\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod ansi;
mod error;
mod sink;

pub use ansi::{AnsiColor, RESET};
pub use error::SinkError;
pub use sink::{FileSink, Line, RecordSink, SourceTag};
