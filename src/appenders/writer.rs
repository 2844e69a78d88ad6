//! Appenders over arbitrary writers, in-memory buffers and the void

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Appender over any `std::io::Write`
///
/// Each line is written with a single `write_all` followed by `flush`.
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &[u8]) -> Result<usize> {
        self.writer.write_all(line)?;
        self.writer.flush()?;
        Ok(line.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared in-memory destination
///
/// Clones write into the same buffer, so one handle can be given to the
/// logger and another kept to inspect the output.
#[derive(Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &[u8]) -> Result<usize> {
        self.buffer.lock().extend_from_slice(line);
        Ok(line.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Discards every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, line: &[u8]) -> Result<usize> {
        Ok(line.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
