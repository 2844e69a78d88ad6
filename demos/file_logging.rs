//! File logging example
//!
//! Demonstrates routing individual severities to a file while the rest stay
//! on the console.
//!
//! Run with: cargo run --example file_logging

use rust_console_logger::prelude::*;
use rust_console_logger::{info, infof, warning};

fn main() -> Result<()> {
    println!("=== Rust Console Logger - File Logging Example ===\n");

    let logger = Logger::builder()
        .location_style(LocationStyle::FileOnly)
        .build();

    // Errors go to the file; info and warning stay on stdout
    logger.set_output(Severity::Error, FileAppender::new("application.log")?);

    println!("1. Logging to console and file:");
    info!(logger, "Application started");
    info!(logger, "Connecting to database...");
    logger.error(&[&"Failed to load optional plugin"]);

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        infof!(logger, "Processing item {}/5", i);
        if i == 3 {
            warning!(logger, "Item 3 took longer than expected");
        }
    }

    println!("\n3. Everything to the file:");
    logger.set_output_all(FileAppender::new("application.log")?);
    info!(logger, "This line only appears in application.log");

    logger.flush()?;
    let metrics = logger.metrics();
    println!("\nLines written: {}", metrics.lines_written());
    println!("Failure rate: {:.1}%", metrics.failure_rate());
    println!("Check 'application.log' for the error lines");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
