//! Archive folder name validation.

use crate::errors::FolderNameError;

/// Validate a user-entered archive folder and return it with trailing
/// separators removed.
pub fn validate_archive_folder(raw: &str) -> Result<String, FolderNameError> {
    let name = raw.trim().trim_end_matches('/');

    if name.is_empty() {
        return Err(FolderNameError::Empty);
    }
    if name.contains('\\') {
        return Err(FolderNameError::Backslash(name.to_string()));
    }
    if name.starts_with('/') {
        return Err(FolderNameError::Absolute(name.to_string()));
    }
    if name.starts_with('.') {
        return Err(FolderNameError::LeadingDot(name.to_string()));
    }
    if name.contains(':') {
        return Err(FolderNameError::Colon(name.to_string()));
    }
    if name.contains("//") {
        return Err(FolderNameError::EmptySegment(name.to_string()));
    }
    if name.contains("/.") || name.contains("./") {
        return Err(FolderNameError::DotSegment(name.to_string()));
    }
    Ok(name.to_string())
}
