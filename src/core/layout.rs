//! Line layouts and the rewriting of the call-site location field
//!
//! Two layouts are supported:
//!
//! - `Default`: `PREFIX: YYYY/MM/DD HH:MM:SS path/to/file.rs:LINE: message`
//! - `Modern`:  `PREFIX: YYYY/MM/DD HH:MM:SS [dir][file.rs][:LINE]\t message`

use super::error::LoggerError;
use super::tokenizer::TokenSequence;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shape of the location field in an output line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Location kept verbatim as `path/file.rs:LINE:`
    #[default]
    Default = 0,

    /// Location rewritten to `[dir][file.rs][:LINE]` followed by a tab
    Modern = 1,
}

impl LayoutMode {
    /// Numeric code stored in the logger settings
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a stored layout code; `None` for codes no layout owns.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(LayoutMode::Default),
            1 => Some(LayoutMode::Modern),
            _ => None,
        }
    }
}

impl FromStr for LayoutMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(LayoutMode::Default),
            "modern" => Ok(LayoutMode::Modern),
            _ => Err(LoggerError::config("layout", format!("unknown layout '{}'", s))),
        }
    }
}

/// Number of trailing location components kept by the modern layout
const MODERN_COMPONENTS: usize = 3;

/// Rewrite the location field at `index` according to `mode`.
///
/// Lines whose `index` lies past the last field are left untouched.
pub fn rewrite(tokens: &mut TokenSequence, index: usize, mode: LayoutMode) {
    match mode {
        LayoutMode::Default => {}
        LayoutMode::Modern => {
            if let Some(location) = tokens.get_mut(index) {
                *location = modern_location(location);
            }
        }
    }
}

/// Convert `path/to/dir/file.rs:42:` into `[dir][file.rs][:42]\t`.
///
/// Locations with fewer than three components are left-padded with empty
/// components, so `main.rs:7:` becomes `[][main.rs][:7]\t`.
pub fn modern_location(location: &str) -> String {
    let parts: Vec<&str> = location
        .split(['/', '\\', ':'])
        .filter(|part| !part.is_empty())
        .collect();

    let mut kept = [""; MODERN_COMPONENTS];
    let take = parts.len().min(MODERN_COMPONENTS);
    kept[MODERN_COMPONENTS - take..].copy_from_slice(&parts[parts.len() - take..]);

    let [dir, file, line] = kept;
    format!("[{dir}][{file}][:{line}]\t")
}
