//! Logging macros.
//!
//! Each macro takes a [`Logger`](crate::Logger) or a
//! [`Verbose`](crate::Verbose) token as its first argument.
//!
//! - `info!(logger, a, b, ...)` joins operands in print style: a space is
//!   only inserted between two adjacent non-string operands.
//! - `infoln!(logger, a, b, ...)` puts a space between every operand.
//! - `infof!(logger, "fmt", args...)` formats like `format!`.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{info, infof, infoln};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//! let port = 8080;
//! infoln!(logger, "listening on port", port);
//! infof!(logger, "accepting {} connections", 128);
//! info!(logger.v(3), "only at verbosity 3 and above");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_print {
    ($logger:expr, $method:ident $(, $arg:expr)* $(,)?) => {
        $logger.$method(&[$(&$arg as &dyn $crate::Operand),*])
    };
}

/// Log to the TRACE log in print style.
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::trace;
/// trace!(logger, "entering calculate(), x =", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, trace $(, $arg)*)
    };
}

#[macro_export]
macro_rules! traceln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, traceln $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

/// Log to the INFO log in print style.
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "items:", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, infoln $(, $arg)*)
    };
}

/// Log formatted arguments to the INFO log.
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::infof;
/// infof!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log to the WARNING log in print style.
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::warning;
/// warning!(logger, "Low disk space");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, warning $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warningln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, warningln $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Log to the ERROR log in print style.
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::errorf;
/// errorf!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, error $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, errorln $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log to the FATAL log, then exit with status 1.
///
/// ```no_run
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_console_logger::fatal;
/// fatal!(logger, "Unable to recover from error:", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, fatal $(, $arg)*)
    };
}

#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, fatalln $(, $arg)*)
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Same as [`fatal!`].
#[macro_export]
macro_rules! exit {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, exit $(, $arg)*)
    };
}

#[macro_export]
macro_rules! exitln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_print!($logger, exitln $(, $arg)*)
    };
}

#[macro_export]
macro_rules! exitf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.exitf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::{FixedClock, Logger};

    fn captured() -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .output_all(memory.clone())
            .clock(FixedClock::ymd_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .build();
        (logger, memory)
    }

    fn messages(memory: &MemoryAppender) -> Vec<String> {
        memory
            .contents()
            .lines()
            .map(|line| line.splitn(2, ": ").nth(1).unwrap_or_default().to_string())
            .map(|rest| rest.splitn(2, ": ").nth(1).unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_print_macros() {
        let (logger, memory) = captured();
        info!(logger, "a", "b");
        infoln!(logger, "a", "b");
        warning!(logger, 1, 2);
        error!(logger, "code", 500);
        trace!(logger);
        assert_eq!(messages(&memory), ["ab", "a b", "1 2", "code500", ""]);
    }

    #[test]
    fn test_format_macros() {
        let (logger, memory) = captured();
        infof!(logger, "Items: {}", 100);
        warningf!(logger, "Retry {} of {}", 1, 3);
        errorf!(logger, "Code: {}", 500);
        tracef!(logger, "Value: {}", 10);
        assert_eq!(messages(&memory), ["Items: 100", "Retry 1 of 3", "Code: 500", "Value: 10"]);
    }

    #[test]
    fn test_macros_on_verbose_token() {
        let (logger, memory) = captured();
        info!(logger.v(1), "hidden");
        infof!(logger.v(0), "shown {}", 1);
        assert_eq!(messages(&memory), ["shown 1"]);
    }

    #[test]
    fn test_macro_location_is_invocation_site() {
        let (logger, memory) = captured();
        let line = line!() + 1;
        info!(logger, "here");
        assert!(memory
            .contents()
            .contains(&format!("{}:{}: here", file!(), line)));
    }
}
