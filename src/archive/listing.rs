//! Listing of archived files with the paths they would be restored to.

use walkdir::WalkDir;

use super::path as vpath;
use super::vault::DiskVault;

/// An archived file and where unarchiving would put it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedItem {
    pub archived: String,
    pub restores_to: String,
}

/// All files below the archive folder, sorted by path. Empty if the folder
/// does not exist yet.
pub fn list_archived(vault: &DiskVault, archive_folder: &str) -> Vec<ArchivedItem> {
    let folder = vpath::normalize(archive_folder);
    let base = vault.resolve(&folder);

    let mut items: Vec<ArchivedItem> = WalkDir::new(&base)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let rel = e.path().strip_prefix(vault.root()).ok()?;
            let archived = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let restores_to = vpath::unarchive_destination(&archived, &folder).ok()?;
            Some(ArchivedItem { archived, restores_to })
        })
        .collect();

    items.sort_by(|a, b| a.archived.cmp(&b.archived));
    items
}
