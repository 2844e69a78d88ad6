//! Write adapter that reshapes and colors composed lines
//!
//! A [`FilteredSink`] sits between a [`LineLogger`](super::line_logger::LineLogger)
//! and its destination. Each write is one complete line; it is tokenized, the
//! location field is rewritten for the active layout, the configured color
//! span is applied and the result is forwarded with a single `append`.

use super::appender::Appender;
use super::color::decorate;
use super::config::Settings;
use super::error::Result;
use super::layout::rewrite;
use super::metrics::LoggerMetrics;
use super::severity::Severity;
use super::tokenizer::{TokenSequence, MIN_TOKENS};
use parking_lot::{Mutex, RwLock};
use std::io;
use std::sync::Arc;

/// Destination shared by every sink that writes to it
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

/// Wrap an appender so several sinks can write to it
pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    Arc::new(Mutex::new(Box::new(appender)))
}

#[derive(Clone)]
pub struct FilteredSink {
    severity: Severity,
    out: SharedAppender,
    settings: Arc<RwLock<Settings>>,
    metrics: Arc<LoggerMetrics>,
}

impl FilteredSink {
    pub fn new(
        severity: Severity,
        out: SharedAppender,
        settings: Arc<RwLock<Settings>>,
        metrics: Arc<LoggerMetrics>,
    ) -> Self {
        Self {
            severity,
            out,
            settings,
            metrics,
        }
    }

    /// Filter one raw line and forward it to the destination.
    ///
    /// Returns the byte count reported by the destination, or its error
    /// unchanged. Lines with fewer than four fields are forwarded as they
    /// came, and lines without a recognizable location field keep their
    /// fields unrewritten. Lines logged under an unrecognized layout code are
    /// discarded and report zero bytes.
    pub fn write(&self, raw: &[u8]) -> Result<usize> {
        // One snapshot per line keeps layout and colors consistent even if
        // the settings change mid-write.
        let settings = *self.settings.read();

        let Some(layout) = settings.layout() else {
            self.metrics.record_discarded();
            return Ok(0);
        };

        let text = String::from_utf8_lossy(raw);
        let mut tokens = TokenSequence::tokenize(&text);
        if tokens.len() < MIN_TOKENS {
            return self.forward(raw);
        }

        let location = tokens.location_index();
        if let Some(index) = location {
            rewrite(&mut tokens, index, layout);
        }
        decorate(self.severity, location, &mut tokens, settings.color_scheme);

        self.forward(tokens.join().as_bytes())
    }

    pub fn flush(&self) -> Result<()> {
        self.out.lock().flush()
    }

    fn forward(&self, line: &[u8]) -> Result<usize> {
        let result = self.out.lock().append(line);
        match result {
            Ok(_) => self.metrics.record_written(),
            Err(_) => self.metrics.record_failed(),
        };
        result
    }
}

/// Lets a sink stand in for any writer that emits one complete line per
/// `write` call.
///
/// A successful write reports the whole input as consumed, whatever the
/// rewritten line's length; a discarded line counts as consumed too.
/// `write!`/`writeln!` split their output into fragments and should not be
/// used directly on a sink.
impl io::Write for FilteredSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FilteredSink::write(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        FilteredSink::flush(self)?;
        Ok(())
    }
}
