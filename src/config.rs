//! Tool configuration
//!
//! Settings are read from TOML. The built-in defaults live in
//! `coordkit.toml` and are parsed once at startup; a user file only needs
//! the keys it wants to change.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::warn;

use crate::errors::{CoordError, CoordResult};
use crate::io::byte_order::ByteOrder;

lazy_static! {
    static ref DEFAULT_CONFIG: CoordConfig = {
        let content = include_str!("../coordkit.toml");
        CoordConfig::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            CoordConfig::builtin()
        })
    };
}

/// Settings shared by the library facade and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct CoordConfig {
    /// Frame id written into encoded headers
    pub frame_id: String,
    /// Byte order of written message files
    pub byte_order: ByteOrder,
    /// Log file for operation records
    pub log_file: String,
    /// Log file for the global `log` facade
    pub global_log_file: String,
    /// Minimum number of point sets before a progress bar is shown
    pub progress_threshold: usize,
}

impl CoordConfig {
    /// Hard-coded fallback used if the embedded file cannot be parsed
    fn builtin() -> Self {
        CoordConfig {
            frame_id: String::new(),
            byte_order: ByteOrder::LittleEndian,
            log_file: "coordkit.log".to_string(),
            global_log_file: "coordkit-global.log".to_string(),
            progress_threshold: 1000,
        }
    }

    /// Parse a configuration from a TOML string
    ///
    /// Missing keys keep their default values.
    pub fn from_str(content: &str) -> CoordResult<Self> {
        Self::builtin().merge_str(content)
    }

    /// Load a configuration file on top of the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoordResult<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            CoordError::ConfigError(format!("Failed to read {}: {}", path.as_ref().display(), e))
        })?;

        Self::default().merge_str(&contents)
    }

    /// Apply the keys present in `content` to a copy of this configuration
    pub fn merge_str(&self, content: &str) -> CoordResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CoordError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = self.clone();

        if let Some(frame_id) = Self::get_str(&toml_value, "messages", "frame_id")? {
            config.frame_id = frame_id.to_string();
        }

        if let Some(name) = Self::get_str(&toml_value, "wire", "byte_order")? {
            config.byte_order = ByteOrder::from_name(name).ok_or_else(|| {
                CoordError::ConfigError(format!("Unknown byte order '{}'", name))
            })?;
        }

        if let Some(path) = Self::get_str(&toml_value, "logging", "log_file")? {
            config.log_file = path.to_string();
        }

        if let Some(path) = Self::get_str(&toml_value, "logging", "global_log_file")? {
            config.global_log_file = path.to_string();
        }

        if let Some(value) = Self::get_value(&toml_value, "cli", "progress_threshold") {
            let threshold = value.as_integer()
                .filter(|v| *v >= 0)
                .ok_or_else(|| CoordError::ConfigError(
                    "cli.progress_threshold must be a non-negative integer".to_string()))?;
            config.progress_threshold = threshold as usize;
        }

        Ok(config)
    }

    fn get_value<'a>(toml_value: &'a toml::Value, table: &str, key: &str) -> Option<&'a toml::Value> {
        let section = toml_value.get(table)?;
        if !section.is_table() {
            warn!("Ignoring non-table configuration entry '{}'", table);
            return None;
        }
        section.get(key)
    }

    fn get_str<'a>(toml_value: &'a toml::Value, table: &str, key: &str) -> CoordResult<Option<&'a str>> {
        match Self::get_value(toml_value, table, key) {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or_else(|| {
                CoordError::ConfigError(format!("{}.{} must be a string", table, key))
            }),
        }
    }
}

impl Default for CoordConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
