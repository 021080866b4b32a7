//! Single-item archive/unarchive.
//! Computes the mirrored destination, creates missing parent folders, resolves
//! collisions through the overwrite prompt, then renames through the vault.

use tracing::{debug, info, warn};

use crate::errors::ArchiverError;

use super::path as vpath;
use super::prompt::OverwritePrompt;
use super::vault::Vault;

/// Which way an item travels relative to the archive folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Archive,
    Unarchive,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Archive => "archive",
            Direction::Unarchive => "restore",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Direction::Archive => "Archived",
            Direction::Unarchive => "Restored",
        }
    }
}

/// Result of one move, shown to the user and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub success: bool,
    pub message: String,
    pub source: String,
    /// Final location; set on success (and for dry-runs).
    pub dest: Option<String>,
}

impl MoveOutcome {
    fn ok(source: String, dest: String, message: String) -> Self {
        Self {
            success: true,
            message,
            source,
            dest: Some(dest),
        }
    }

    /// Failure outcome for `source`, carrying the error's message.
    pub fn failed(source: String, err: &ArchiverError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            source,
            dest: None,
        }
    }
}

/// Moves items between their working location and the archive folder.
pub struct Mover<'a, V: Vault + ?Sized> {
    vault: &'a V,
    archive_folder: &'a str,
    dry_run: bool,
}

impl<'a, V: Vault + ?Sized> Mover<'a, V> {
    pub fn new(vault: &'a V, archive_folder: &'a str) -> Self {
        Self {
            vault,
            archive_folder,
            dry_run: false,
        }
    }

    /// Report destinations without touching the vault.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn archive_folder(&self) -> &str {
        self.archive_folder
    }

    /// Whether `path` already lives under the archive folder.
    pub fn is_archived(&self, path: &str) -> bool {
        vpath::is_archived(path, self.archive_folder)
    }

    /// "Move to archive".
    pub fn archive(&self, path: &str, prompt: &mut dyn OverwritePrompt) -> MoveOutcome {
        self.run(path, Direction::Archive, prompt)
    }

    /// "Move out of archive".
    pub fn unarchive(&self, path: &str, prompt: &mut dyn OverwritePrompt) -> MoveOutcome {
        self.run(path, Direction::Unarchive, prompt)
    }

    /// Move `path` in `direction` and fold the result into a [`MoveOutcome`].
    pub fn run(&self, path: &str, direction: Direction, prompt: &mut dyn OverwritePrompt) -> MoveOutcome {
        let source = vpath::normalize(path);
        match self.relocate(&source, direction, prompt) {
            Ok(dest) => {
                let message = if self.dry_run {
                    format!("Dry-run: would {} {} -> {}", direction.verb(), source, dest)
                } else {
                    format!("{} {} -> {}", direction.past(), source, dest)
                };
                info!(src = %source, dest = %dest, dry_run = self.dry_run, "{} completed", direction.verb());
                MoveOutcome::ok(source, dest, message)
            }
            Err(e) => {
                match e {
                    ArchiverError::CreateFolder { .. } | ArchiverError::Host { .. } => {
                        warn!(code = e.code(), kind = e.kind(), src = %source, error = %e, "{} failed", direction.verb())
                    }
                    _ => info!(code = e.code(), kind = e.kind(), src = %source, error = %e, "{} refused", direction.verb()),
                }
                MoveOutcome::failed(source, &e)
            }
        }
    }

    /// Move one item and return its new vault path.
    pub fn relocate(
        &self,
        source: &str,
        direction: Direction,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<String, ArchiverError> {
        let dest = match direction {
            Direction::Archive => vpath::archive_destination(source, self.archive_folder)?,
            Direction::Unarchive => vpath::unarchive_destination(source, self.archive_folder)?,
        };
        // Replacing an ancestor would trash the source along with it.
        if vpath::is_within(source, &dest) {
            return Err(ArchiverError::DestinationContainsSource {
                path: source.to_string(),
                dest,
            });
        }

        if !self.vault.exists(source) {
            return Err(ArchiverError::SourceNotFound(source.to_string()));
        }

        if self.dry_run {
            if self.vault.exists(&dest) {
                info!(dest = %dest, "dry-run: destination exists; would ask before replacing it");
            }
            return Ok(dest);
        }

        if let Some(parent) = vpath::parent(&dest)
            && !self.vault.exists(parent)
        {
            debug!(folder = %parent, "creating missing destination folder");
            self.vault.create_folder(parent)?;
        }

        if self.vault.exists(&dest) {
            if !prompt.confirm_overwrite(&dest, source) {
                info!(dest = %dest, "overwrite declined");
                return Err(ArchiverError::Cancelled(dest));
            }
            self.vault.trash(&dest)?;
        }

        self.vault.rename(source, &dest)?;
        Ok(dest)
    }
}
