//! Core library for `vault_archiver`.
//!
//! Moves notes between their working location in a vault and an archive
//! folder, mirroring the vault-relative path in both directions. Path rules are
//! pure functions in [`archive::path`]; file operations go through the
//! [`archive::Vault`] trait so the mover can run against a directory tree or a
//! test double.

pub mod archive;
pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod shutdown;

pub use archive::{
    archive_destination, is_archived, list_archived, run_batch, unarchive_destination,
    validate_archive_folder, BatchReport, Direction, DiskVault, FixedAnswer, MoveOutcome, Mover,
    OverwritePrompt, TerminalPrompt, Vault,
};
pub use config::{default_config_path, default_log_path, path_has_symlink_ancestor, Config, LogLevel, OverwritePolicy};
pub use errors::{ArchiverError, FolderNameError};
