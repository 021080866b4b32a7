//! Typed error definitions for vault_archiver.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons an archive folder name is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolderNameError {
    #[error("archive folder name is empty")]
    Empty,

    #[error("archive folder must not start with '.': {0}")]
    LeadingDot(String),

    #[error("archive folder must not contain ':': {0}")]
    Colon(String),

    #[error("archive folder must not contain a segment starting or ending with '.': {0}")]
    DotSegment(String),

    #[error("archive folder must be relative to the vault: {0}")]
    Absolute(String),

    #[error("archive folder must use '/' as separator: {0}")]
    Backslash(String),

    #[error("archive folder contains an empty segment: {0}")]
    EmptySegment(String),
}

#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error("{0} is already archived")]
    AlreadyArchived(String),

    #[error("{0} is not in the archive")]
    NotArchived(String),

    #[error("{path} contains the archive folder {folder}; archive its contents instead")]
    ContainsArchive { path: String, folder: String },

    #[error("{path} cannot be moved onto {dest}, which contains it")]
    DestinationContainsSource { path: String, dest: String },

    #[error("Source path not found: {0}")]
    SourceNotFound(String),

    #[error("{0} is outside the vault")]
    OutsideVault(PathBuf),

    #[error("Vault root is not a directory: {0}")]
    VaultInvalid(PathBuf),

    #[error("Cancelled: {0} already exists")]
    Cancelled(String),

    #[error(transparent)]
    InvalidFolder(#[from] FolderNameError),

    #[error("Failed to create folder {path}: {message}")]
    CreateFolder { path: String, message: String },

    #[error("Failed to {op} {path}: {message}")]
    Host {
        op: &'static str,
        path: String,
        message: String,
    },
}

impl ArchiverError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            ArchiverError::AlreadyArchived(_) => 10,
            ArchiverError::NotArchived(_) => 11,
            ArchiverError::ContainsArchive { .. } => 12,
            ArchiverError::DestinationContainsSource { .. } => 13,
            ArchiverError::SourceNotFound(_) => 20,
            ArchiverError::OutsideVault(_) => 21,
            ArchiverError::VaultInvalid(_) => 22,
            ArchiverError::Cancelled(_) => 30,
            ArchiverError::InvalidFolder(_) => 40,
            ArchiverError::CreateFolder { .. } => 50,
            ArchiverError::Host { .. } => 51,
        }
    }

    /// Short machine-friendly label, used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ArchiverError::AlreadyArchived(_) => "already_archived",
            ArchiverError::NotArchived(_) => "not_archived",
            ArchiverError::ContainsArchive { .. } => "contains_archive",
            ArchiverError::DestinationContainsSource { .. } => "destination_contains_source",
            ArchiverError::SourceNotFound(_) => "source_not_found",
            ArchiverError::OutsideVault(_) => "outside_vault",
            ArchiverError::VaultInvalid(_) => "vault_invalid",
            ArchiverError::Cancelled(_) => "cancelled",
            ArchiverError::InvalidFolder(_) => "invalid_folder",
            ArchiverError::CreateFolder { .. } => "create_folder",
            ArchiverError::Host { .. } => "host_error",
        }
    }
}
