//! Pure vault-path helpers.
//!
//! Vault paths are relative, `/`-separated strings (`Notes/Daily/2024-01-01.md`).
//! Nothing in here touches the filesystem, so mirroring rules can be tested in
//! isolation.

use crate::errors::ArchiverError;

pub const SEPARATOR: char = '/';

/// Collapse a user-supplied vault path to canonical form: no leading `./`,
/// no leading/trailing separators, no empty or `.` segments.
pub fn normalize(path: &str) -> String {
    path.split(SEPARATOR)
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// True when `path` is the archive folder itself or lies somewhere below it.
///
/// The test is segment-aware: with folder `Archive`, `ArchiveNotes/a.md` is not
/// archived.
pub fn is_archived(path: &str, archive_folder: &str) -> bool {
    let path = normalize(path);
    let folder = normalize(archive_folder);
    if folder.is_empty() {
        return false;
    }
    is_within(&path, &folder)
}

/// True when `path` equals `folder` or lies below it. Both must be normalized.
pub fn is_within(path: &str, folder: &str) -> bool {
    path == folder
        || path
            .strip_prefix(folder)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Destination of `path` once archived: the path mirrored under the archive folder.
pub fn archive_destination(path: &str, archive_folder: &str) -> Result<String, ArchiverError> {
    let path = normalize(path);
    let folder = normalize(archive_folder);

    if is_within(&path, &folder) {
        return Err(ArchiverError::AlreadyArchived(path));
    }
    // Moving a parent of the archive folder would nest it inside itself.
    if path.is_empty() || is_within(&folder, &path) {
        return Err(ArchiverError::ContainsArchive { path, folder });
    }
    Ok(format!("{folder}/{path}"))
}

/// Destination of an archived `path` once restored: the archive prefix stripped.
pub fn unarchive_destination(path: &str, archive_folder: &str) -> Result<String, ArchiverError> {
    let path = normalize(path);
    let folder = normalize(archive_folder);

    match path
        .strip_prefix(folder.as_str())
        .and_then(|rest| rest.strip_prefix(SEPARATOR))
    {
        Some(rest) if !folder.is_empty() && !rest.is_empty() => Ok(rest.to_string()),
        _ => Err(ArchiverError::NotArchived(path)),
    }
}

/// Parent folder of a vault path, `None` for items at the vault root.
pub fn parent(path: &str) -> Option<&str> {
    path.rsplit_once(SEPARATOR).map(|(dir, _)| dir)
}

/// Last segment of a vault path.
pub fn file_name(path: &str) -> &str {
    path.rsplit_once(SEPARATOR).map_or(path, |(_, name)| name)
}

/// Every ancestor folder of `path`, shallowest first (`a`, `a/b` for `a/b/c.md`).
pub fn ancestors(path: &str) -> Vec<&str> {
    path.match_indices(SEPARATOR)
        .map(|(idx, _)| &path[..idx])
        .collect()
}
