//! Severity colors and the ANSI decoration of tokenized lines

use super::error::LoggerError;
use super::severity::Severity;
use super::tokenizer::TokenSequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ANSI sequence that resets all attributes
pub const RESET: &str = "\x1b[0m";

/// Which span of a line receives ANSI coloring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// No escape sequences at all
    #[default]
    None,

    /// Color from the start of the line through the location field
    PrefixOnly,

    /// As `PrefixOnly`, in bold
    PrefixOnlyBold,

    /// Whole line colored
    Full,

    /// Whole line colored in bold
    FullBold,

    /// Whole line colored, message in bold
    FullBoldMessage,

    /// Whole line colored, prefix in bold
    FullBoldPrefix,
}

impl FromStr for ColorScheme {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scheme = match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "none" => ColorScheme::None,
            "prefixonly" => ColorScheme::PrefixOnly,
            "prefixonlybold" => ColorScheme::PrefixOnlyBold,
            "full" => ColorScheme::Full,
            "fullbold" => ColorScheme::FullBold,
            "fullboldmessage" => ColorScheme::FullBoldMessage,
            "fullboldprefix" => ColorScheme::FullBoldPrefix,
            _ => {
                return Err(LoggerError::config(
                    "color_scheme",
                    format!("unknown color scheme '{}'", s),
                ))
            }
        };
        Ok(scheme)
    }
}

/// Non-bold foreground sequence for `severity`, e.g. `\x1b[32m` for info.
pub fn color_seq(severity: Severity) -> String {
    format!("\x1b[{}m", severity.color_code().to_fg_str())
}

/// Bold foreground sequence for `severity`, e.g. `\x1b[32;1m` for info.
pub fn bold_color_seq(severity: Severity) -> String {
    format!("\x1b[{};1m", severity.color_code().to_fg_str())
}

/// Wrap a span of `tokens` in the escape sequences `scheme` asks for.
///
/// `location` is the index of the location field before any token is
/// prepended. Leading and trailing sequences become tokens of their own.
/// Without a location the prefix-only schemes leave the line uncolored and
/// the split schemes color the whole line in their leading style.
pub fn decorate(
    severity: Severity,
    location: Option<usize>,
    tokens: &mut TokenSequence,
    scheme: ColorScheme,
) {
    let color = color_seq(severity);
    let bold = bold_color_seq(severity);

    match scheme {
        ColorScheme::None => {}
        ColorScheme::PrefixOnly | ColorScheme::PrefixOnlyBold => {
            if append_to(tokens, location, RESET) {
                let lead = if scheme == ColorScheme::PrefixOnly { color } else { bold };
                tokens.push_front(lead);
            }
        }
        ColorScheme::Full => {
            tokens.push_front(color);
            tokens.push_back(RESET);
        }
        ColorScheme::FullBold => {
            tokens.push_front(bold);
            tokens.push_back(RESET);
        }
        ColorScheme::FullBoldMessage => {
            append_to(tokens, location, &bold);
            tokens.push_front(color);
            tokens.push_back(RESET);
        }
        ColorScheme::FullBoldPrefix => {
            append_to(tokens, location, &color);
            tokens.push_front(bold);
            tokens.push_back(RESET);
        }
    }
}

/// Append `suffix` to the field at `index`; false when there is no such field.
fn append_to(tokens: &mut TokenSequence, index: Option<usize>, suffix: &str) -> bool {
    match index.and_then(|i| tokens.get_mut(i)) {
        Some(token) => {
            token.push_str(suffix);
            true
        }
        None => false,
    }
}
