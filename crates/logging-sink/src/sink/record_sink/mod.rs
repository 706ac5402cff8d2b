mod writing;

/// Streaming sink that renders [`Line`](crate::Line) values into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the color switch that
/// applies to every line. Colors are enabled by default, matching an
/// interactive console. Every line is terminated by exactly one newline.
///
/// # Examples
///
/// Collect colored lines into a [`Vec<u8>`]:
///
/// ```
/// use logging_sink::{AnsiColor, Line, RecordSink};
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write_line(&Line::new(
///     AnsiColor::Red,
///     "[Crit]",
///     "2024/01/02 - 03:04:05",
///     format_args!("disk failure"),
/// ))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "\x1b[31m[Crit] [2024/01/02 - 03:04:05] disk failure\x1b[0m\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
    colors: bool,
}

impl<W> RecordSink<W> {
    /// Creates a colored sink.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_colors(writer, true)
    }

    /// Creates a sink with an explicit color flag.
    #[must_use]
    pub fn with_colors(writer: W, colors: bool) -> Self {
        Self { writer, colors }
    }

    /// Reports whether labels are colored and lines end with a reset sequence.
    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Enables or disables ANSI colors for subsequent writes.
    pub fn set_colors(&mut self, colors: bool) {
        self.colors = colors;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
