//! Vault file operations.
//!
//! The mover never touches `std::fs` directly; it goes through [`Vault`], which
//! addresses items by vault-relative path. [`DiskVault`] maps those paths onto
//! a directory tree.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

use crate::errors::ArchiverError;

use super::helpers::describe_io_error;
use super::path as vpath;

/// Folder (relative to the vault root) that receives trashed items.
pub const TRASH_FOLDER: &str = ".trash";

/// File operations the mover needs from the vault.
pub trait Vault {
    /// Whether anything (file or folder) exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Create a folder, including missing parents.
    fn create_folder(&self, path: &str) -> Result<(), ArchiverError>;

    /// Move/rename an item. The destination's parent must already exist.
    fn rename(&self, from: &str, to: &str) -> Result<(), ArchiverError>;

    /// Move an item out of the way so its path can be reused.
    fn trash(&self, path: &str) -> Result<(), ArchiverError>;
}

/// A vault backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskVault {
    root: PathBuf,
}

impl DiskVault {
    /// Open a vault rooted at `root`. The root must be an existing directory.
    pub fn open(root: &Path) -> Result<Self, ArchiverError> {
        let root = dunce::canonicalize(root).map_err(|_| ArchiverError::VaultInvalid(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(ArchiverError::VaultInvalid(root));
        }
        debug!(root = %root.display(), "opened vault");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute filesystem location of a vault path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let mut out = self.root.clone();
        for seg in vpath::normalize(path).split(vpath::SEPARATOR).filter(|s| !s.is_empty()) {
            out.push(seg);
        }
        out
    }

    /// Convert a user-supplied filesystem path (absolute, or relative to the
    /// current directory) into a vault path. The item must exist.
    pub fn relativize(&self, input: &Path) -> Result<String, ArchiverError> {
        let abs = if input.is_absolute() {
            input.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|_| ArchiverError::SourceNotFound(input.display().to_string()))?
                .join(input)
        };
        let not_found = || ArchiverError::SourceNotFound(input.display().to_string());
        fs::symlink_metadata(&abs).map_err(|_| not_found())?;
        // The last component is kept as given so a symlink names the link itself.
        let real = match (abs.parent(), abs.file_name()) {
            (Some(dir), Some(name)) => dunce::canonicalize(dir).map_err(|_| not_found())?.join(name),
            _ => dunce::canonicalize(&abs).map_err(|_| not_found())?,
        };
        let rel = real
            .strip_prefix(&self.root)
            .map_err(|_| ArchiverError::OutsideVault(real.clone()))?;

        let segments: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Ok(segments.join("/"))
    }

    /// Pick a free name inside the trash folder for `name`.
    fn trash_slot(&self, name: &str) -> PathBuf {
        let dir = self.resolve(TRASH_FOLDER);
        let candidate = dir.join(name);
        if fs::symlink_metadata(&candidate).is_err() {
            return candidate;
        }

        let epoch_ms = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let stem = candidate
            .file_stem()
            .map(|s| s.to_owned())
            .unwrap_or_else(|| OsString::from("item"));
        let ext = candidate.extension().map(|e| e.to_owned());

        let mut n = 0u64;
        loop {
            let mut alt = stem.clone();
            alt.push(format!("-{epoch_ms}"));
            if n > 0 {
                alt.push(format!("-{n}"));
            }
            if let Some(ref e) = ext {
                alt.push(".");
                alt.push(e);
            }
            let p = dir.join(&alt);
            if fs::symlink_metadata(&p).is_err() {
                return p;
            }
            n += 1;
        }
    }
}

impl Vault for DiskVault {
    fn exists(&self, path: &str) -> bool {
        fs::symlink_metadata(self.resolve(path)).is_ok()
    }

    fn create_folder(&self, path: &str) -> Result<(), ArchiverError> {
        let target = self.resolve(path);
        fs::create_dir_all(&target).map_err(|e| ArchiverError::CreateFolder {
            path: path.to_string(),
            message: describe_io_error("create folder", path, &e),
        })?;
        info!(folder = %path, "created folder");
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), ArchiverError> {
        fs::rename(self.resolve(from), self.resolve(to)).map_err(|e| ArchiverError::Host {
            op: "move",
            path: from.to_string(),
            message: describe_io_error("rename", from, &e),
        })
    }

    fn trash(&self, path: &str) -> Result<(), ArchiverError> {
        let trash_dir = self.resolve(TRASH_FOLDER);
        fs::create_dir_all(&trash_dir).map_err(|e| ArchiverError::Host {
            op: "trash",
            path: path.to_string(),
            message: describe_io_error("create trash folder", TRASH_FOLDER, &e),
        })?;

        let slot = self.trash_slot(vpath::file_name(path));
        fs::rename(self.resolve(path), &slot).map_err(|e| ArchiverError::Host {
            op: "trash",
            path: path.to_string(),
            message: describe_io_error("trash", path, &e),
        })?;
        info!(path = %path, trashed_to = %slot.display(), "moved existing item to trash");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn resolve_and_relativize_agree() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("Notes/a.md").write_str("a").unwrap();
        let vault = DiskVault::open(dir.path()).unwrap();

        let abs = vault.resolve("Notes/a.md");
        assert!(abs.exists());
        assert_eq!(vault.relativize(&abs).unwrap(), "Notes/a.md");
    }

    #[test]
    fn relativize_rejects_outside_paths() {
        let outer = assert_fs::TempDir::new().unwrap();
        outer.child("vault").create_dir_all().unwrap();
        outer.child("elsewhere.md").write_str("x").unwrap();
        let vault = DiskVault::open(outer.child("vault").path()).unwrap();

        let err = vault.relativize(outer.child("elsewhere.md").path()).unwrap_err();
        assert!(matches!(err, ArchiverError::OutsideVault(_)));
    }

    #[test]
    fn relativize_missing_is_not_found() {
        let dir = assert_fs::TempDir::new().unwrap();
        let vault = DiskVault::open(dir.path()).unwrap();
        let err = vault.relativize(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, ArchiverError::SourceNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn relativize_keeps_symlinks_as_links() {
        let outer = assert_fs::TempDir::new().unwrap();
        outer.child("vault/Other/real.md").write_str("real").unwrap();
        outer.child("vault/Notes").create_dir_all().unwrap();
        outer.child("outside.md").write_str("x").unwrap();
        std::os::unix::fs::symlink(
            outer.child("vault/Other/real.md").path(),
            outer.child("vault/Notes/link.md").path(),
        )
        .unwrap();
        std::os::unix::fs::symlink(outer.child("outside.md").path(), outer.child("vault/Notes/out.md").path())
            .unwrap();
        let vault = DiskVault::open(outer.child("vault").path()).unwrap();

        assert_eq!(vault.relativize(&vault.resolve("Notes/link.md")).unwrap(), "Notes/link.md");
        assert_eq!(vault.relativize(&vault.resolve("Notes/out.md")).unwrap(), "Notes/out.md");
    }

    #[test]
    fn open_rejects_file_root() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("file.md").touch().unwrap();
        assert!(matches!(
            DiskVault::open(dir.child("file.md").path()),
            Err(ArchiverError::VaultInvalid(_))
        ));
    }

    #[test]
    fn trash_keeps_both_copies_on_name_clash() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a/n.md").write_str("first").unwrap();
        dir.child("b/n.md").write_str("second").unwrap();
        let vault = DiskVault::open(dir.path()).unwrap();

        vault.trash("a/n.md").unwrap();
        vault.trash("b/n.md").unwrap();

        assert!(!vault.exists("a/n.md"));
        assert!(!vault.exists("b/n.md"));
        let trashed = std::fs::read_dir(vault.resolve(TRASH_FOLDER)).unwrap().count();
        assert_eq!(trashed, 2);
    }
}
