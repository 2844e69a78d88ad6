//! Main logger implementation
//!
//! A [`Logger`] owns one [`LineLogger`] per severity. Every line logger writes
//! through its own [`FilteredSink`]; the sinks share the logger's settings, so
//! layout, color scheme and verbosity changes apply to the next line written.

use super::{
    appender::Appender,
    color::ColorScheme,
    config::{log_level_from_env, parse_log_level, LoggerConfig, Settings, LOG_LEVEL_ENV},
    error::Result,
    filtered_sink::{shared, FilteredSink, SharedAppender},
    layout::LayoutMode,
    line_logger::{CallSite, LineFlags, LineLogger, LocationStyle},
    metrics::LoggerMetrics,
    operand::{sprint, sprintf, sprintln, Operand},
    severity::Severity,
    timestamp::{Clock, SharedClock, SystemClock},
    verbose::Verbose,
};
use crate::appenders::{ConsoleAppender, NullAppender};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Exit status used by the fatal and exit families
pub const FATAL_EXIT_CODE: i32 = 1;

struct Router {
    flags: LineFlags,
    lines: Vec<LineLogger>,
}

/// Leveled logger routing each severity to its own destination
pub struct Logger {
    settings: Arc<RwLock<Settings>>,
    router: RwLock<Router>,
    clock: SharedClock,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger with the default destinations: trace discarded, info and
    /// warning on stdout, error and fatal on stderr.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Create a builder for configuring a logger
    ///
    /// # Example
    ///
    /// ```
    /// use rust_console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .layout(LayoutMode::Modern)
    ///     .color_scheme(ColorScheme::FullBoldMessage)
    ///     .log_level(2)
    ///     .build();
    /// assert!(logger.v(2).enabled());
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Default logger whose verbosity comes from the `LOG_LEVEL` variable.
    ///
    /// A value that is not an integer falls back to level 0 and is reported
    /// on the error log.
    #[must_use]
    pub fn from_env() -> Self {
        LoggerBuilder::new().env_log_level().build()
    }

    fn from_parts(
        config: &LoggerConfig,
        outputs: [SharedAppender; 5],
        clock: SharedClock,
    ) -> Self {
        let settings = Arc::new(RwLock::new(config.settings()));
        let metrics = Arc::new(LoggerMetrics::new());
        let flags = LineFlags {
            date: true,
            time: true,
            microseconds: config.microseconds,
            utc: config.utc,
            location: config.location,
        };

        let lines = Severity::ALL
            .iter()
            .zip(outputs)
            .map(|(&severity, out)| {
                let sink =
                    FilteredSink::new(severity, out, Arc::clone(&settings), Arc::clone(&metrics));
                LineLogger::new(severity.line_prefix(), flags, Arc::clone(&clock), sink)
            })
            .collect();

        Self {
            settings,
            router: RwLock::new(Router { flags, lines }),
            clock,
            metrics,
        }
    }

    /// Write one line at `severity` attributed to `caller`.
    ///
    /// This is the write path every logging method goes through; destination
    /// errors are returned unchanged.
    pub fn output(&self, severity: Severity, caller: CallSite, message: &str) -> Result<usize> {
        let router = self.router.read();
        router.lines[severity.index()].output(caller, message)
    }

    fn emit(&self, severity: Severity, caller: CallSite, message: &str) {
        if let Err(e) = self.output(severity, caller, message) {
            eprintln!(
                "[LOGGER ERROR] {} line from {} could not be written: {}",
                severity, caller, e
            );
        }
    }

    fn terminate(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Send lines of `severity` to `appender`.
    pub fn set_output<A: Appender + 'static>(&self, severity: Severity, appender: A) {
        self.replace_output(severity, shared(appender));
    }

    /// Send lines of every severity to one shared `appender`.
    pub fn set_output_all<A: Appender + 'static>(&self, appender: A) {
        let out = shared(appender);
        for severity in Severity::ALL {
            self.replace_output(severity, Arc::clone(&out));
        }
    }

    fn replace_output(&self, severity: Severity, out: SharedAppender) {
        let sink = FilteredSink::new(
            severity,
            out,
            Arc::clone(&self.settings),
            Arc::clone(&self.metrics),
        );
        let mut router = self.router.write();
        let flags = router.flags;
        router.lines[severity.index()] =
            LineLogger::new(severity.line_prefix(), flags, Arc::clone(&self.clock), sink);
    }

    fn update_flags(&self, update: impl FnOnce(&mut LineFlags)) {
        let mut router = self.router.write();
        update(&mut router.flags);
        let flags = router.flags;
        let lines: Vec<LineLogger> = router
            .lines
            .iter()
            .map(|line| {
                LineLogger::new(line.prefix(), flags, Arc::clone(&self.clock), line.sink().clone())
            })
            .collect();
        router.lines = lines;
    }

    pub fn set_layout(&self, layout: LayoutMode) {
        self.settings.write().layout_code = layout.code();
    }

    /// Set the layout from its numeric code.
    ///
    /// Codes that name no layout are accepted; lines are then discarded until
    /// a valid layout is set again.
    pub fn set_layout_code(&self, code: u8) {
        self.settings.write().layout_code = code;
    }

    /// Active layout, `None` if an unknown code was set
    pub fn layout(&self) -> Option<LayoutMode> {
        self.settings.read().layout()
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.settings.write().color_scheme = scheme;
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.settings.read().color_scheme
    }

    /// Set the verbosity threshold consulted by [`Logger::v`]
    pub fn set_log_level(&self, level: i32) {
        self.settings.write().log_level = level;
    }

    pub fn log_level(&self) -> i32 {
        self.settings.read().log_level
    }

    /// Show the full call-site path or only the file name
    pub fn set_location_style(&self, style: LocationStyle) {
        self.update_flags(|flags| flags.location = style);
    }

    pub fn set_utc(&self, utc: bool) {
        self.update_flags(|flags| flags.utc = utc);
    }

    pub fn set_microseconds(&self, microseconds: bool) {
        self.update_flags(|flags| flags.microseconds = microseconds);
    }

    pub fn line_flags(&self) -> LineFlags {
        self.router.read().flags
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let router = self.router.read();
        for line in router.lines.iter() {
            line.flush()?;
        }
        Ok(())
    }

    /// Verbosity gate: active iff the configured log level is at least `level`.
    ///
    /// ```
    /// use rust_console_logger::Logger;
    ///
    /// let logger = Logger::builder().log_level(2).build();
    /// if logger.v(2).enabled() {
    ///     // expensive formatting only happens here
    /// }
    /// logger.v(3).info(&[&"skipped"]);
    /// ```
    #[inline]
    pub fn v(&self, level: i32) -> Verbose<'_> {
        Verbose::new(self, self.log_level() >= level)
    }

    // ------------------------------------------------------------------
    // Trace
    // ------------------------------------------------------------------

    /// Log to the TRACE log; operands are joined in print style.
    #[track_caller]
    pub fn trace(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Trace, CallSite::caller(), &sprint(args));
    }

    /// Log to the TRACE log with a space between every operand.
    #[track_caller]
    pub fn traceln(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Trace, CallSite::caller(), &sprintln(args));
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Trace, CallSite::caller(), &sprintf(args));
    }

    /// As [`Logger::trace`], attributing the line to `caller`.
    pub fn trace_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        self.emit(Severity::Trace, caller, &sprint(args));
    }

    // ------------------------------------------------------------------
    // Info
    // ------------------------------------------------------------------

    /// Log to the INFO log.
    ///
    /// Operands are concatenated, with a space only between two adjacent
    /// non-string operands; a newline is appended if missing.
    #[track_caller]
    pub fn info(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Info, CallSite::caller(), &sprint(args));
    }

    /// Log to the INFO log with a space between every operand.
    #[track_caller]
    pub fn infoln(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Info, CallSite::caller(), &sprintln(args));
    }

    /// Log formatted arguments to the INFO log; a newline is appended if
    /// missing.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, CallSite::caller(), &sprintf(args));
    }

    /// As [`Logger::info`], attributing the line to `caller`.
    ///
    /// Helpers that wrap the logger can pass their own caller through, or
    /// simply be `#[track_caller]` and call [`Logger::info`].
    pub fn info_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        self.emit(Severity::Info, caller, &sprint(args));
    }

    // ------------------------------------------------------------------
    // Warning
    // ------------------------------------------------------------------

    #[track_caller]
    pub fn warning(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Warning, CallSite::caller(), &sprint(args));
    }

    #[track_caller]
    pub fn warningln(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Warning, CallSite::caller(), &sprintln(args));
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warning, CallSite::caller(), &sprintf(args));
    }

    pub fn warning_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        self.emit(Severity::Warning, caller, &sprint(args));
    }

    // ------------------------------------------------------------------
    // Error
    // ------------------------------------------------------------------

    #[track_caller]
    pub fn error(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Error, CallSite::caller(), &sprint(args));
    }

    #[track_caller]
    pub fn errorln(&self, args: &[&dyn Operand]) {
        self.emit(Severity::Error, CallSite::caller(), &sprintln(args));
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, CallSite::caller(), &sprintf(args));
    }

    pub fn error_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        self.emit(Severity::Error, caller, &sprint(args));
    }

    // ------------------------------------------------------------------
    // Fatal and exit: log, flush, terminate with status 1
    // ------------------------------------------------------------------

    /// Log to the FATAL log, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn Operand]) -> ! {
        self.fatal_at(CallSite::caller(), args)
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[&dyn Operand]) -> ! {
        self.emit(Severity::Fatal, CallSite::caller(), &sprintln(args));
        self.terminate()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::Fatal, CallSite::caller(), &sprintf(args));
        self.terminate()
    }

    pub fn fatal_at(&self, caller: CallSite, args: &[&dyn Operand]) -> ! {
        self.emit(Severity::Fatal, caller, &sprint(args));
        self.terminate()
    }

    /// Same as [`Logger::fatal`]; reads better where exiting is the point.
    #[track_caller]
    pub fn exit(&self, args: &[&dyn Operand]) -> ! {
        self.fatal_at(CallSite::caller(), args)
    }

    #[track_caller]
    pub fn exitln(&self, args: &[&dyn Operand]) -> ! {
        self.fatalln(args)
    }

    #[track_caller]
    pub fn exitf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatalf(args)
    }

    pub fn exit_at(&self, caller: CallSite, args: &[&dyn Operand]) -> ! {
        self.fatal_at(caller, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a Logger
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let captured = MemoryAppender::new();
/// let logger = Logger::builder()
///     .output_all(captured.clone())
///     .location_style(LocationStyle::FileOnly)
///     .build();
///
/// logger.info(&[&"ready"]);
/// assert!(captured.contents().ends_with(": ready\n"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    outputs: [SharedAppender; 5],
    clock: SharedClock,
    log_level_source: Option<String>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            outputs: [
                shared(NullAppender),
                shared(ConsoleAppender::stdout()),
                shared(ConsoleAppender::stdout()),
                shared(ConsoleAppender::stderr()),
                shared(ConsoleAppender::stderr()),
            ],
            clock: Arc::new(SystemClock),
            log_level_source: None,
        }
    }

    /// Apply a whole configuration
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.config.layout = layout;
        self
    }

    #[must_use]
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.config.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn log_level(mut self, level: i32) -> Self {
        self.config.log_level = level;
        self.log_level_source = None;
        self
    }

    /// Take the log level from its textual form, as found in `LOG_LEVEL`.
    ///
    /// A malformed value falls back to level 0; the fallback is reported on
    /// the built logger's error log.
    #[must_use]
    pub fn log_level_str(mut self, raw: impl Into<String>) -> Self {
        self.log_level_source = Some(raw.into());
        self
    }

    /// Take the log level from the `LOG_LEVEL` variable, if it is set.
    ///
    /// Behaves like [`LoggerBuilder::log_level_str`] on the variable's value;
    /// an unset variable leaves the level unchanged.
    #[must_use]
    pub fn env_log_level(self) -> Self {
        match log_level_from_env() {
            Some(raw) => self.log_level_str(raw),
            None => self,
        }
    }

    #[must_use]
    pub fn location_style(mut self, style: LocationStyle) -> Self {
        self.config.location = style;
        self
    }

    #[must_use]
    pub fn utc(mut self, utc: bool) -> Self {
        self.config.utc = utc;
        self
    }

    #[must_use]
    pub fn microseconds(mut self, microseconds: bool) -> Self {
        self.config.microseconds = microseconds;
        self
    }

    /// Destination for one severity
    #[must_use]
    pub fn output<A: Appender + 'static>(mut self, severity: Severity, appender: A) -> Self {
        self.outputs[severity.index()] = shared(appender);
        self
    }

    /// One destination shared by every severity
    #[must_use]
    pub fn output_all<A: Appender + 'static>(mut self, appender: A) -> Self {
        let out = shared(appender);
        for slot in self.outputs.iter_mut() {
            *slot = Arc::clone(&out);
        }
        self
    }

    #[must_use]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build(self) -> Logger {
        let mut config = self.config;
        let fallback = match self.log_level_source.as_deref().map(parse_log_level) {
            Some(Ok(level)) => {
                config.log_level = level;
                None
            }
            Some(Err(e)) => {
                config.log_level = 0;
                Some(e)
            }
            None => None,
        };

        let logger = Logger::from_parts(&config, self.outputs, self.clock);
        if let Some(e) = fallback {
            logger.errorf(format_args!(
                "reading {} failed ({}), falling back to default level 0",
                LOG_LEVEL_ENV, e
            ));
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger, built from the environment on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}
