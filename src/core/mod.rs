//! Core logger types and traits

pub mod appender;
pub mod color;
pub mod config;
pub mod error;
pub mod filtered_sink;
pub mod layout;
pub mod line_logger;
pub mod logger;
pub mod metrics;
pub mod operand;
pub mod severity;
pub mod timestamp;
pub mod tokenizer;
pub mod verbose;

pub use appender::Appender;
pub use color::ColorScheme;
pub use config::{LoggerConfig, Settings, LOG_LEVEL_ENV};
pub use error::{LoggerError, Result};
pub use filtered_sink::{FilteredSink, SharedAppender};
pub use layout::LayoutMode;
pub use line_logger::{CallSite, LineFlags, LineLogger, LocationStyle};
pub use logger::{global, Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use operand::{display, sprint, sprintf, sprintln, Displayed, Operand};
pub use severity::Severity;
pub use timestamp::{Clock, FixedClock, SharedClock, SystemClock};
pub use tokenizer::TokenSequence;
pub use verbose::Verbose;
