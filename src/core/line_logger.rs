//! Line composition: prefix, date, time and call-site location
//!
//! A [`LineLogger`] turns a message into one complete line of the form
//! `PREFIX: YYYY/MM/DD HH:MM:SS path/to/file.rs:LINE: message\n` and hands it
//! to its [`FilteredSink`] in a single write.

use super::error::Result;
use super::filtered_sink::FilteredSink;
use super::timestamp::{format_date, format_time, SharedClock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

/// How the call-site file is shown in the location field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationStyle {
    /// The path as recorded by the compiler, e.g. `src/net/server.rs`
    #[default]
    Full,

    /// Only the final path component, e.g. `server.rs`
    FileOnly,
}

/// Which header fields a [`LineLogger`] writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFlags {
    pub date: bool,
    pub time: bool,
    pub microseconds: bool,
    pub utc: bool,
    pub location: LocationStyle,
}

impl Default for LineFlags {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            utc: false,
            location: LocationStyle::Full,
        }
    }
}

/// Source location a line is attributed to
///
/// # Examples
///
/// ```
/// use rust_console_logger::CallSite;
///
/// let site = CallSite::new("pkg/file.go", 10);
/// assert_eq!(site.to_string(), "pkg/file.go:10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the caller of the function this is called in.
    ///
    /// Every `#[track_caller]` function between the user's code and this call
    /// is skipped, so wrappers marked `#[track_caller]` keep the attribution.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Last path component of the file
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Composes lines for one severity and writes them through a filtered sink
#[derive(Clone)]
pub struct LineLogger {
    prefix: String,
    flags: LineFlags,
    clock: SharedClock,
    sink: FilteredSink,
}

impl LineLogger {
    pub fn new(
        prefix: impl Into<String>,
        flags: LineFlags,
        clock: SharedClock,
        sink: FilteredSink,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            clock,
            sink,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sink(&self) -> &FilteredSink {
        &self.sink
    }

    /// Compose the line for `message` attributed to `caller`.
    ///
    /// A newline is appended unless the message already ends with one.
    pub fn format_line(&self, caller: CallSite, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + 48 + message.len());
        line.push_str(&self.prefix);

        if self.flags.date || self.flags.time {
            let now = self.clock.now(self.flags.utc);
            if self.flags.date {
                line.push_str(&format_date(&now));
                line.push(' ');
            }
            if self.flags.time {
                line.push_str(&format_time(&now, self.flags.microseconds));
                line.push(' ');
            }
        }

        let file = match self.flags.location {
            LocationStyle::Full => caller.file(),
            LocationStyle::FileOnly => caller.file_name(),
        };
        line.push_str(file);
        line.push(':');
        line.push_str(&caller.line().to_string());
        line.push_str(": ");

        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Compose and write one line, returning the sink's result.
    pub fn output(&self, caller: CallSite, message: &str) -> Result<usize> {
        let line = self.format_line(caller, message);
        self.sink.write(line.as_bytes())
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}
