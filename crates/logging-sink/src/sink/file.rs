use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use super::RecordSink;
use crate::error::SinkError;

/// RAII guard over a log file opened in append-create mode.
///
/// The guard exists for the span of a single record: it is opened, written,
/// flushed and closed again, so a crashed process never loses a line that a
/// logging call already returned from. Dropping the guard flushes the
/// buffered writer on every exit path, including early returns after a failed
/// write. The guard implements [`Deref`] and [`DerefMut`] to the wrapped
/// [`RecordSink`] so callers can render lines without additional plumbing.
///
/// Parent directories are never created; a path inside a missing directory
/// fails with [`SinkError::Open`].
///
/// # Examples
///
/// ```
/// use logging_sink::{AnsiColor, FileSink, Line};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("app.log");
///
/// let mut sink = FileSink::open_append(&path, false)?;
/// sink.write_line(&Line::new(AnsiColor::BrightGreen, "[Info]", "ts", format_args!("up")))?;
/// sink.finish()?;
///
/// assert_eq!(std::fs::read_to_string(&path)?, "[Info] [ts] up\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use = "dropping the guard immediately closes the log file"]
#[derive(Debug)]
pub struct FileSink {
    sink: RecordSink<BufWriter<File>>,
}

impl FileSink {
    /// Opens `path` for appending, creating the file if it does not exist.
    pub fn open_append(path: impl AsRef<Path>, colors: bool) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            sink: RecordSink::with_colors(BufWriter::new(file), colors),
        })
    }

    /// Flushes buffered output and closes the file, reporting any failure.
    pub fn finish(mut self) -> Result<(), SinkError> {
        self.sink.flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.sink.flush();
    }
}

impl Deref for FileSink {
    type Target = RecordSink<BufWriter<File>>;

    fn deref(&self) -> &Self::Target {
        &self.sink
    }
}

impl DerefMut for FileSink {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.sink
    }
}
