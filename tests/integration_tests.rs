//! Integration tests for the console logger
//!
//! These tests verify:
//! - Line format for every severity
//! - Print, println and printf style messages
//! - Layout and color rewriting end to end
//! - Per-severity destinations, including files
//! - Verbosity gating
//! - Thread safety of shared destinations

use rust_console_logger::core::sprintln;
use rust_console_logger::prelude::*;
use rust_console_logger::{errorf, info, infoln, warningf};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const SITE: CallSite = CallSite::new("pkg/file.go", 10);

fn captured() -> (Logger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .output_all(memory.clone())
        .clock(FixedClock::ymd_hms(2024, 1, 1, 0, 0, 0).expect("valid date"))
        .build();
    (logger, memory)
}

#[test]
fn test_info_line_format() {
    let (logger, memory) = captured();
    logger.info_at(SITE, &[&"a", &"b"]);
    assert_eq!(memory.contents(), "INFO: 2024/01/01 00:00:00 pkg/file.go:10: ab\n");
}

#[test]
fn test_println_style_spacing() {
    let (logger, memory) = captured();
    let line = line!() + 1;
    logger.infoln(&[&"a", &"b"]);
    assert_eq!(
        memory.contents(),
        format!("INFO: 2024/01/01 00:00:00 {}:{}: a b\n", file!(), line)
    );
}

#[test]
fn test_println_line_format_at_fixed_site() {
    let (logger, memory) = captured();
    logger
        .output(Severity::Info, SITE, &sprintln(&[&"a", &"b"]))
        .expect("write succeeds");
    assert_eq!(memory.contents(), "INFO: 2024/01/01 00:00:00 pkg/file.go:10: a b\n");
}

#[test]
fn test_newline_never_doubled() {
    let layouts = [LayoutMode::Default, LayoutMode::Modern];
    let schemes = [ColorScheme::None, ColorScheme::PrefixOnly, ColorScheme::Full];

    for layout in layouts {
        for scheme in schemes {
            let (logger, memory) = captured();
            logger.set_layout(layout);
            logger.set_color_scheme(scheme);

            logger.info_at(SITE, &[&"one\n"]);
            logger.warning_at(SITE, &[&"two"]);
            logger.error_at(SITE, &[&"three\n"]);

            let contents = memory.contents();
            assert_eq!(contents.matches('\n').count(), 3, "{layout:?} {scheme:?}: {contents:?}");
            assert!(!contents.contains("\n\n"));
        }
    }
}

#[test]
fn test_modern_layout_end_to_end() {
    let (logger, memory) = captured();
    logger.set_layout(LayoutMode::Modern);
    logger.warning_at(CallSite::new("/src/net/server.rs", 42), &[&"slow peer"]);
    assert_eq!(
        memory.contents(),
        "WARNING: 2024/01/01 00:00:00 [net][server.rs][:42]\t slow peer\n"
    );
}

#[test]
fn test_spaced_call_site_path_keeps_timestamp() {
    let (logger, memory) = captured();
    logger.set_layout(LayoutMode::Modern);
    logger.info_at(CallSite::new("C:\\Users\\John Doe\\app\\src\\main.rs", 5), &[&"hi"]);
    assert_eq!(
        memory.contents(),
        "INFO: 2024/01/01 00:00:00 C:\\Users\\John Doe\\app\\src\\main.rs:5: hi\n"
    );

    memory.clear();
    logger.set_color_scheme(ColorScheme::PrefixOnly);
    logger.info_at(CallSite::new("/home/a b/src/main.rs", 5), &[&"hi"]);
    assert_eq!(memory.contents(), "INFO: 2024/01/01 00:00:00 /home/a b/src/main.rs:5: hi\n");

    memory.clear();
    logger.set_color_scheme(ColorScheme::Full);
    logger.info_at(CallSite::new("/home/a b/src/main.rs", 5), &[&"hi"]);
    assert_eq!(
        memory.contents(),
        "\x1b[32m INFO: 2024/01/01 00:00:00 /home/a b/src/main.rs:5: hi\n \x1b[0m"
    );
}

#[test]
fn test_failed_destination_is_counted() {
    struct ClosedPipe;

    impl Appender for ClosedPipe {
        fn append(&mut self, _line: &[u8]) -> Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "closed"
        }
    }

    let (logger, memory) = captured();
    logger.set_output(Severity::Warning, ClosedPipe);

    let err = logger
        .output(Severity::Warning, SITE, "lost")
        .expect_err("destination is closed");
    assert!(matches!(err, LoggerError::IoError(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));

    logger.info_at(SITE, &[&"kept"]);
    logger.warning_at(SITE, &[&"lost again"]);

    let metrics = logger.metrics();
    assert_eq!(metrics.failed_writes(), 2);
    assert_eq!(metrics.lines_written(), 1);
    assert!((metrics.failure_rate() - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(memory.contents(), "INFO: 2024/01/01 00:00:00 pkg/file.go:10: kept\n");
}

#[test]
fn test_full_color_wraps_whole_line() {
    let (logger, memory) = captured();
    logger.set_color_scheme(ColorScheme::Full);
    logger.error_at(SITE, &[&"broken"]);

    let contents = memory.contents();
    let tokens: Vec<&str> = contents.split(' ').collect();
    assert_eq!(tokens.first(), Some(&"\x1b[31m"));
    assert_eq!(tokens.last(), Some(&"\x1b[0m"));
    assert_eq!(contents, "\x1b[31m ERROR: 2024/01/01 00:00:00 pkg/file.go:10: broken\n \x1b[0m");
}

#[test]
fn test_prefix_only_color_stops_after_location() {
    let (logger, memory) = captured();
    logger.set_color_scheme(ColorScheme::PrefixOnlyBold);
    logger.info_at(SITE, &[&"ready"]);
    assert_eq!(
        memory.contents(),
        "\x1b[32;1m INFO: 2024/01/01 00:00:00 pkg/file.go:10:\x1b[0m ready\n"
    );
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("errors.log");

    let (logger, memory) = captured();
    let appender = FileAppender::new(&log_file).expect("Failed to create appender");
    logger.set_output(Severity::Error, appender);

    logger.error_at(SITE, &[&"disk full"]);
    logger.info_at(SITE, &[&"still running"]);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "ERROR: 2024/01/01 00:00:00 pkg/file.go:10: disk full\n");
    assert!(memory.contents().contains("still running"));
    assert!(!memory.contents().contains("disk full"));
}

#[test]
fn test_set_output_all_covers_trace() {
    let (logger, _) = captured();
    let all = MemoryAppender::new();
    logger.set_output_all(all.clone());

    logger.trace_at(SITE, &[&"t"]);
    logger.info_at(SITE, &[&"i"]);
    logger.warning_at(SITE, &[&"w"]);
    logger.error_at(SITE, &[&"e"]);

    let prefixes: Vec<String> = all
        .contents()
        .lines()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(prefixes, ["TRACE:", "INFO:", "WARNING:", "ERROR:"]);
}

#[test]
fn test_default_trace_destination_discards() {
    let info = MemoryAppender::new();
    let logger = Logger::builder().output(Severity::Info, info.clone()).build();
    logger.trace(&[&"dropped"]);
    logger.info(&[&"kept"]);
    assert!(!info.contents().contains("dropped"));
    assert!(info.contents().ends_with("kept\n"));
}

#[test]
fn test_macros_end_to_end() {
    let (logger, memory) = captured();
    info!(logger, "count", 3);
    infoln!(logger, "count", 3);
    warningf!(logger, "{}%", 95);
    errorf!(logger.v(1), "not shown");

    let contents = memory.contents();
    let messages: Vec<&str> = contents
        .lines()
        .map(|line| line.rsplit(": ").next().unwrap_or_default())
        .collect();
    assert_eq!(messages, ["count3", "count 3", "95%"]);
}

#[test]
fn test_verbosity_from_level_string() {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .output_all(memory.clone())
        .log_level_str("2")
        .build();

    logger.v(2).info_at(SITE, &[&"level two"]);
    logger.v(3).info_at(SITE, &[&"level three"]);

    assert!(memory.contents().contains("level two"));
    assert!(!memory.contents().contains("level three"));
}

#[test]
fn test_json_configuration() {
    let config = LoggerConfig::from_json(
        r#"{"layout":"Modern","color_scheme":"None","log_level":1,"location":"FileOnly"}"#,
    )
    .expect("valid config");

    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .config(config)
        .output_all(memory.clone())
        .clock(FixedClock::ymd_hms(2024, 1, 1, 0, 0, 0).expect("valid date"))
        .build();

    assert!(logger.v(1).enabled());
    logger.info_at(CallSite::new("src/app/main.rs", 7), &[&"hi"]);
    assert_eq!(
        memory.contents(),
        "INFO: 2024/01/01 00:00:00 [][main.rs][:7]\t hi\n"
    );
}

#[test]
fn test_concurrent_lines_stay_whole() {
    let (logger, memory) = captured();
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.infof(format_args!("thread {} message {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let contents = memory.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 800);
    assert!(lines
        .iter()
        .all(|line| line.starts_with("INFO: 2024/01/01 00:00:00 ")));
    assert_eq!(logger.metrics().lines_written(), 800);
}
