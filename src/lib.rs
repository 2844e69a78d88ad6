//! # Rust Console Logger
//!
//! A leveled, unbuffered console logger with optional colors and an
//! alternative "modern" location layout.
//!
//! ## Features
//!
//! - **Five severities**: trace, info, warning, error and fatal, each with
//!   its own destination
//! - **Verbosity gating**: `logger.v(n)` is active when the log level is at
//!   least `n`; the level can come from the `LOG_LEVEL` variable
//! - **Layouts**: the classic `file:line:` location or a bracketed
//!   `[dir][file][:line]` form followed by a tab
//! - **Color schemes**: prefix-only or whole-line ANSI colors, optionally bold
//! - **Unbuffered**: every line reaches its destination in one write
//!
//! ## Example
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{info, infof};
//!
//! let logger = Logger::builder()
//!     .layout(LayoutMode::Modern)
//!     .color_scheme(ColorScheme::PrefixOnly)
//!     .build();
//!
//! info!(logger, "Application started");
//! infof!(logger.v(1), "details at level {}", 1);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender, NullAppender,
        WriterAppender,
    };
    pub use crate::core::{
        display, global, Appender, CallSite, Clock, ColorScheme, FixedClock, LayoutMode,
        LocationStyle, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Operand,
        Result, Severity, SystemClock, Verbose,
    };
}

pub use appenders::{
    ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender, NullAppender, WriterAppender,
};
pub use core::{
    display, global, Appender, CallSite, Clock, ColorScheme, FixedClock, LayoutMode, LineFlags,
    LocationStyle, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Operand,
    Result, Severity, SystemClock, Verbose, FATAL_EXIT_CODE, LOG_LEVEL_ENV,
};

/// Verbosity gate on the process-wide logger.
///
/// ```
/// if rust_console_logger::v(2).enabled() {
///     rust_console_logger::global().info(&[&"verbose detail"]);
/// }
/// ```
pub fn v(level: i32) -> Verbose<'static> {
    global().v(level)
}
