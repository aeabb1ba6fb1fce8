//! Common CLI types shared across commands

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ConfigError;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, fields in report order (default)
    #[default]
    Json,
    /// Indented JSON with sorted keys, for reading
    JsonPretty,
    /// One comma-separated row per method, for spreadsheets
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, false)
            .map_err(|_| ConfigError::UnsupportedFormat(s.to_string()))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        f.write_str(&name)
    }
}
