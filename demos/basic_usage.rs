//! Basic logger usage example
//!
//! Demonstrates the severities, the message styles and the color schemes.
//!
//! Run with: cargo run --example basic_usage

use rust_console_logger::prelude::*;
use rust_console_logger::{errorf, info, infoln, warning};

fn main() -> Result<()> {
    println!("=== Rust Console Logger - Basic Usage Example ===\n");

    // Trace goes nowhere by default; send it to stdout for this demo
    let logger = Logger::builder()
        .output(
            Severity::Trace,
            WriterAppender::new(std::io::stdout()).with_name("demo-trace"),
        )
        .build();

    println!("1. Logging at different severities:");
    logger.trace(&[&"This is a trace message"]);
    logger.info(&[&"This is an info message"]);
    logger.warning(&[&"This is a warning message"]);
    logger.error(&[&"This is an error message"]);

    println!("\n2. Message styles:");
    info!(logger, "print style joins strings: ", "a", "b", " and spaces numbers: ", 1, 2);
    infoln!(logger, "println style spaces everything:", "a", "b", 1, 2);
    errorf!(logger, "printf style: code={} reason={}", 503, "unavailable");

    println!("\n3. Modern layout:");
    logger.set_layout(LayoutMode::Modern);
    info!(logger, "location shown as [dir][file][:line]");

    println!("\n4. Color schemes:");
    let schemes = [
        ColorScheme::PrefixOnly,
        ColorScheme::PrefixOnlyBold,
        ColorScheme::Full,
        ColorScheme::FullBold,
        ColorScheme::FullBoldMessage,
        ColorScheme::FullBoldPrefix,
    ];
    for scheme in schemes {
        logger.set_color_scheme(scheme);
        warning!(logger, "scheme ", display(format!("{scheme:?}")));
    }
    logger.set_color_scheme(ColorScheme::None);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
