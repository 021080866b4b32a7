//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - OverwritePolicy decides how destination collisions are answered.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::ARCHIVE_FOLDER_DEFAULT;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and notable events (default)
    #[default]
    Normal,
    /// Every move and folder creation
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How to answer "destination already exists".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Ask on the terminal; decline when stdin is not interactive.
    #[default]
    Ask,
    /// Trash the existing item and replace it.
    Always,
    /// Cancel the move.
    Never,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Vault root; current directory when unset
    pub vault: Option<PathBuf>,
    /// Archive folder, relative to the vault root
    pub archive_folder: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report destinations but do not modify the vault
    pub dry_run: bool,
    pub overwrite: OverwritePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault: None,
            archive_folder: ARCHIVE_FOLDER_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            overwrite: OverwritePolicy::Ask,
        }
    }
}

impl Config {
    /// Construct a Config for a given vault and archive folder; other fields use defaults.
    pub fn new(vault: impl Into<PathBuf>, archive_folder: impl Into<String>) -> Self {
        Self {
            vault: Some(vault.into()),
            archive_folder: archive_folder.into(),
            ..Default::default()
        }
    }
}
