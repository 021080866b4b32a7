//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Global flags may appear before or after the subcommand.
//! - --debug is a shorthand for --log-level debug.
//! - --yes and --no answer the overwrite question up front.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::archive::validate_archive_folder;
use crate::config::types::{Config, LogLevel, OverwritePolicy};

/// Move notes in and out of a vault's Archive folder, keeping their relative path.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Vault root directory (default: config value, else the current directory).
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub vault: Option<PathBuf>,

    /// Use this archive folder for this run only (relative to the vault root).
    #[arg(long, global = true, value_name = "FOLDER")]
    pub archive_folder: Option<String>,

    /// Replace existing destinations without asking (the old item goes to the vault trash).
    #[arg(short = 'y', long, global = true, conflicts_with = "no")]
    pub yes: bool,

    /// Never replace existing destinations; such moves are cancelled.
    #[arg(long, global = true)]
    pub no: bool,

    /// Show what would be done, but do not modify the vault.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Print the config file location and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move items into the archive folder, mirroring their path.
    Archive {
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
    /// Move archived items back to their original path.
    Unarchive {
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
    /// Show whether items are archived and which move applies.
    Status {
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        paths: Vec<PathBuf>,
    },
    /// List archived files and where they would be restored to.
    List,
    /// Validate and save the archive folder setting.
    SetFolder { name: String },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Overwrite policy requested on the command line, if any.
    pub fn overwrite_policy(&self) -> Option<OverwritePolicy> {
        match (self.yes, self.no) {
            (true, _) => Some(OverwritePolicy::Always),
            (_, true) => Some(OverwritePolicy::Never),
            _ => None,
        }
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    /// Fails only when --archive-folder is not a valid folder name.
    pub fn apply_overrides(&self, cfg: &mut Config) -> Result<()> {
        if let Some(v) = &self.vault {
            cfg.vault = Some(v.clone());
        }
        if let Some(f) = &self.archive_folder {
            cfg.archive_folder = validate_archive_folder(f)?;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(policy) = self.overwrite_policy() {
            cfg.overwrite = policy;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        Ok(())
    }
}

pub fn parse() -> Args {
    Args::parse()
}
