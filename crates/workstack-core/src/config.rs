//! Report configuration
//!
//! Settings come from an optional TOML file; every key is optional and falls
//! back to the defaults below. The command line overrides file values.
//!
//! ```toml
//! input = "workstack_live.xlsx"
//! output = "workstack_report.xlsx"
//! sheet_name = "weekly_report"
//! export = true
//! color = false
//! pause = true
//! match_mode = "exact"
//! skip_rows = 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::MatchMode;

pub const DEFAULT_INPUT: &str = "workstack_live.xlsx";
pub const DEFAULT_OUTPUT: &str = "workstack_report.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "weekly_report";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Source tracker workbook
    pub input: PathBuf,
    /// Report workbook written when `export` is set
    pub output: PathBuf,
    /// Worksheet name of the written report
    pub sheet_name: String,
    pub export: bool,
    /// Colour the Status column of the console table
    pub color: bool,
    /// Wait for Enter before exiting
    pub pause: bool,
    pub match_mode: MatchMode,
    /// Leading source rows to skip
    pub skip_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            export: true,
            color: false,
            pause: true,
            match_mode: MatchMode::Exact,
            skip_rows: 0,
        }
    }
}

impl ReportConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
