//! Logger configuration
//!
//! [`LoggerConfig`] is the serializable description of a logger; [`Settings`]
//! is the runtime subset every filtered sink reads on each write.

use super::color::ColorScheme;
use super::error::{LoggerError, Result};
use super::layout::LayoutMode;
use super::line_logger::LocationStyle;
use serde::{Deserialize, Serialize};

/// Environment variable holding the verbosity threshold for `V()` calls
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Settings shared by the router and all of its sinks
///
/// The layout is kept as its numeric code; a code no [`LayoutMode`] owns makes
/// the sinks discard their lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub layout_code: u8,
    pub color_scheme: ColorScheme,
    pub log_level: i32,
}

impl Settings {
    pub fn layout(&self) -> Option<LayoutMode> {
        LayoutMode::from_code(self.layout_code)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout_code: LayoutMode::Default.code(),
            color_scheme: ColorScheme::None,
            log_level: 0,
        }
    }
}

/// Serializable logger configuration
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::{ColorScheme, LayoutMode, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"layout":"Modern","color_scheme":"Full"}"#).unwrap();
/// assert_eq!(config.layout, LayoutMode::Modern);
/// assert_eq!(config.color_scheme, ColorScheme::Full);
/// assert_eq!(config.log_level, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub layout: LayoutMode,
    pub color_scheme: ColorScheme,
    /// Verbosity threshold for `V()` calls
    pub log_level: i32,
    /// Full path or file name in the location field
    pub location: LocationStyle,
    /// Stamp lines in UTC instead of local time
    pub utc: bool,
    /// Append microseconds to the time field
    pub microseconds: bool,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn settings(&self) -> Settings {
        Settings {
            layout_code: self.layout.code(),
            color_scheme: self.color_scheme,
            log_level: self.log_level,
        }
    }
}

/// Parse a verbosity level as found in [`LOG_LEVEL_ENV`].
///
/// An empty or whitespace-only value means level 0.
pub fn parse_log_level(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .map_err(|e| LoggerError::invalid_log_level(raw, e))
}

/// Read [`LOG_LEVEL_ENV`]; `None` when the variable is unset.
pub fn log_level_from_env() -> Option<String> {
    std::env::var(LOG_LEVEL_ENV).ok()
}
