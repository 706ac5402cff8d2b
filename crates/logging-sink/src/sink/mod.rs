mod file;
mod line;
mod record_sink;

pub use file::FileSink;
pub use line::{Line, SourceTag};
pub use record_sink::RecordSink;
