//! Verbosity example
//!
//! Demonstrates `V(level)` gating. The threshold is read from `LOG_LEVEL`
//! by the global logger.
//!
//! Run with: LOG_LEVEL=2 cargo run --example verbosity

use rust_console_logger::prelude::*;
use rust_console_logger::{info, infof};

/// Wrapper that keeps the caller's location on every line
#[track_caller]
fn audit(logger: &Logger, event: &str) {
    logger.infoln(&[&"audit:", &event]);
}

fn main() {
    println!("=== Rust Console Logger - Verbosity Example ===\n");

    let logger = global();
    println!("Log level: {}\n", logger.log_level());

    for level in 0..=3 {
        infof!(logger.v(level), "shown because log level >= {}", level);
    }

    // Guard expensive work behind the check itself
    if rust_console_logger::v(2).enabled() {
        let summary: Vec<String> = (0..5).map(|i| format!("worker-{i}")).collect();
        info!(logger, "workers: ", display(summary.join(",")));
    }

    audit(logger, "started");

    logger.set_log_level(5);
    infof!(logger.v(5), "level raised at runtime");

    println!("\n=== Example completed successfully! ===");
}
