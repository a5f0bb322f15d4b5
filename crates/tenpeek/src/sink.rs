//! Destinations for emitted lines.
//!
//! Every line handed to a [`Sink`] already carries its own `\n`; sinks write it
//! verbatim. The progress-bar sinks hide the bars while writing so a line never
//! lands in the middle of a redraw.

use indicatif::{MultiProgress, ProgressBar};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Receives fully formatted lines.
pub trait Sink: Send {
    fn write_str(&mut self, text: &str) -> io::Result<()>;
}

/// Writes to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Writes to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        io::stderr().lock().write_all(text.as_bytes())
    }
}

/// Writes to standard output while a single progress bar is suspended.
///
/// # Examples
///
/// ```no_run
/// use indicatif::ProgressBar;
/// use tenpeek::{Inspector, ProgressSink, Value};
///
/// let pb = ProgressBar::new(100);
/// let mut inspector = Inspector::new().with_sink(ProgressSink::new(pb.clone()));
/// for step in 0..100 {
///     inspector.inspect(&Value::from(step), "step");
///     pb.inc(1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProgressSink {
    pb: ProgressBar,
}

impl ProgressSink {
    pub fn new(pb: ProgressBar) -> Self {
        Self { pb }
    }
}

impl Sink for ProgressSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.pb.suspend(|| StdoutSink.write_str(text))
    }
}

/// Writes to standard output while every bar of a [`MultiProgress`] is suspended.
#[derive(Debug, Clone)]
pub struct MultiProgressSink {
    progress: MultiProgress,
}

impl MultiProgressSink {
    pub fn new(progress: MultiProgress) -> Self {
        Self { progress }
    }
}

impl Sink for MultiProgressSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.progress.suspend(|| StdoutSink.write_str(text))
    }
}

/// In-memory sink; clones share the same buffer.
///
/// # Examples
///
/// ```
/// use tenpeek::{BufferSink, Inspector, Value};
///
/// let buffer = BufferSink::new();
/// let mut inspector = Inspector::new().with_sink(buffer.clone());
/// inspector.inspect(&Value::from("ready"), "status");
/// assert_eq!(buffer.contents(), "status: ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Written lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }
}

/// Adapts any [`Write`] implementation, e.g. a log file.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_shares_state() {
        let buffer = BufferSink::new();
        let mut writer = buffer.clone();
        writer.write_str("a: 1\n").unwrap();
        writer.write_str("b: 2\n").unwrap();
        assert_eq!(buffer.lines(), vec!["a: 1", "b: 2"]);

        buffer.clear();
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_str("x: 3\n").unwrap();
        assert_eq!(sink.into_inner(), b"x: 3\n");
    }

    #[test]
    fn test_progress_sink_with_hidden_bar() {
        let mut sink = ProgressSink::new(ProgressBar::hidden());
        assert!(sink.write_str("").is_ok());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_reports_errors() {
        let mut sink = WriterSink::new(FailingWriter);
        let err = sink.write_str("line\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
