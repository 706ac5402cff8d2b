use super::RecordSink;
use crate::ansi::RESET;
use crate::sink::Line;
use std::fmt;
use std::io::{self, Write};

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a single newline-terminated line.
    ///
    /// The segments are rendered in a fixed order: label color (if colors are
    /// enabled), label, optional `[file:line]` tag, `[timestamp]`, body,
    /// reset sequence (if colors are enabled) and finally the newline. One
    /// trailing newline in the body is dropped so the reset stays on the
    /// record's own line.
    pub fn write_line(&mut self, line: &Line<'_>) -> io::Result<()> {
        if self.colors {
            self.writer.write_all(line.color.escape().as_bytes())?;
        }
        self.writer.write_all(line.label.as_bytes())?;
        if let Some(location) = line.location {
            write!(self.writer, " {location}")?;
        }
        write!(self.writer, " [{}] ", line.timestamp)?;
        self.write_body(line.body)?;
        if self.colors {
            self.writer.write_all(RESET.as_bytes())?;
        }
        self.writer.write_all(b"\n")
    }

    fn write_body(&mut self, body: fmt::Arguments<'_>) -> io::Result<()> {
        let mut body_writer = BodyWriter {
            writer: &mut self.writer,
            pending_newline: false,
            error: None,
        };
        match fmt::write(&mut body_writer, body) {
            Ok(()) => Ok(()),
            Err(_) => Err(body_writer
                .error
                .unwrap_or_else(|| io::Error::other("formatter error"))),
        }
    }

    /// Writes the bare reset sequence and flushes, clearing any color state a
    /// previous colored session left on the terminal.
    pub fn write_reset(&mut self) -> io::Result<()> {
        self.writer.write_all(RESET.as_bytes())?;
        self.writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Forwards formatted text while holding back a newline that ends the text
/// seen so far. A held newline is released when more text follows and
/// discarded when the body ends.
struct BodyWriter<'a, W> {
    writer: &'a mut W,
    pending_newline: bool,
    error: Option<io::Error>,
}

impl<W: Write> BodyWriter<'_, W> {
    fn forward(&mut self, chunk: &str) -> io::Result<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        if self.pending_newline {
            self.pending_newline = false;
            self.writer.write_all(b"\n")?;
        }
        let text = match chunk.strip_suffix('\n') {
            Some(text) => {
                self.pending_newline = true;
                text
            }
            None => chunk,
        };
        self.writer.write_all(text.as_bytes())
    }
}

impl<W: Write> fmt::Write for BodyWriter<'_, W> {
    fn write_str(&mut self, chunk: &str) -> fmt::Result {
        self.forward(chunk).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}
