//! Verbosity-gated logging
//!
//! [`Logger::v`] returns a [`Verbose`] token. The token is either checked
//! directly, which skips building the arguments altogether:
//!
//! ```
//! # let logger = rust_console_logger::Logger::new();
//! if logger.v(2).enabled() {
//!     let report = format!("{:?}", vec![1, 2, 3]);
//!     logger.info(&[&report]);
//! }
//! ```
//!
//! or used in chained form when the arguments are cheap:
//!
//! ```
//! # let logger = rust_console_logger::Logger::new();
//! logger.v(2).info(&[&"cheap"]);
//! ```
//!
//! All methods are `#[track_caller]`, so lines are attributed to the code
//! calling the token rather than to the token itself.

use super::line_logger::CallSite;
use super::logger::Logger;
use super::operand::Operand;
use std::fmt;

/// Result of a verbosity check; logs only when active
#[derive(Clone, Copy)]
pub struct Verbose<'a> {
    logger: &'a Logger,
    active: bool,
}

impl<'a> Verbose<'a> {
    pub(crate) fn new(logger: &'a Logger, active: bool) -> Self {
        Self { logger, active }
    }

    /// Whether the configured level reached the requested one
    #[inline]
    pub fn enabled(&self) -> bool {
        self.active
    }

    #[track_caller]
    pub fn trace(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.trace(args);
        }
    }

    #[track_caller]
    pub fn traceln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.traceln(args);
        }
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.tracef(args);
        }
    }

    pub fn trace_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.trace_at(caller, args);
        }
    }

    #[track_caller]
    pub fn info(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.info(args);
        }
    }

    #[track_caller]
    pub fn infoln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.infoln(args);
        }
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.infof(args);
        }
    }

    pub fn info_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.info_at(caller, args);
        }
    }

    #[track_caller]
    pub fn warning(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.warning(args);
        }
    }

    #[track_caller]
    pub fn warningln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.warningln(args);
        }
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.warningf(args);
        }
    }

    pub fn warning_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.warning_at(caller, args);
        }
    }

    #[track_caller]
    pub fn error(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.error(args);
        }
    }

    #[track_caller]
    pub fn errorln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.errorln(args);
        }
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.errorf(args);
        }
    }

    pub fn error_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.error_at(caller, args);
        }
    }

    /// Logs to the FATAL log and exits with status 1 when active; does
    /// nothing otherwise.
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.fatal(args);
        }
    }

    #[track_caller]
    pub fn fatalln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.fatalln(args);
        }
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.fatalf(args);
        }
    }

    pub fn fatal_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.fatal_at(caller, args);
        }
    }

    #[track_caller]
    pub fn exit(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.exit(args);
        }
    }

    #[track_caller]
    pub fn exitln(&self, args: &[&dyn Operand]) {
        if self.active {
            self.logger.exitln(args);
        }
    }

    #[track_caller]
    pub fn exitf(&self, args: fmt::Arguments<'_>) {
        if self.active {
            self.logger.exitf(args);
        }
    }

    pub fn exit_at(&self, caller: CallSite, args: &[&dyn Operand]) {
        if self.active {
            self.logger.exit_at(caller, args);
        }
    }
}

impl From<Verbose<'_>> for bool {
    fn from(verbose: Verbose<'_>) -> Self {
        verbose.active
    }
}

impl fmt::Debug for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verbose").field("active", &self.active).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::line_logger::CallSite;
    use crate::core::logger::Logger;
    use crate::core::timestamp::FixedClock;

    fn captured(level: i32) -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .output_all(memory.clone())
            .clock(FixedClock::ymd_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .log_level(level)
            .build();
        (logger, memory)
    }

    #[test]
    fn test_inactive_token_writes_nothing() {
        let (logger, memory) = captured(1);
        let v = logger.v(2);
        v.info(&[&"a"]);
        v.infoln(&[&"b"]);
        v.infof(format_args!("c"));
        v.warning(&[&"d"]);
        v.error(&[&"e"]);
        v.trace(&[&"f"]);
        v.fatal(&[&"never exits"]);
        v.exit(&[&"never exits"]);
        assert!(memory.contents().is_empty());
        assert!(!bool::from(v));
    }

    #[test]
    fn test_active_token_writes() {
        let (logger, memory) = captured(2);
        logger.v(1).info_at(CallSite::new("pkg/file.go", 10), &[&"a", &"b"]);
        assert_eq!(memory.contents(), "INFO: 2024/01/01 00:00:00 pkg/file.go:10: ab\n");
    }

    #[test]
    fn test_chained_call_attributed_to_call_site() {
        let (logger, memory) = captured(5);
        let line = line!() + 1;
        logger.v(5).warningln(&[&"deep", &1]);
        assert_eq!(
            memory.contents(),
            format!("WARNING: 2024/01/01 00:00:00 {}:{}: deep 1\n", file!(), line)
        );
    }

    #[test]
    fn test_levels_follow_runtime_changes() {
        let (logger, _) = captured(0);
        assert!(!logger.v(1).enabled());
        logger.set_log_level(1);
        assert!(logger.v(1).enabled());
    }
}
