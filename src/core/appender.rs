//! Appender trait for log output destinations

use super::error::Result;

/// Destination for finished log lines.
///
/// Every call to `append` carries exactly one complete line. Implementations
/// must hand the bytes to the underlying device before returning; nothing is
/// buffered across calls.
pub trait Appender: Send {
    /// Write one line, returning the number of bytes written.
    fn append(&mut self, line: &[u8]) -> Result<usize>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
