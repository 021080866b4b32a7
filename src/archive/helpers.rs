//! I/O error enrichment.
//!
//! Turns a raw `io::Error` into a one-line message naming the operation, the
//! vault path involved, and a hint derived from the OS error code. The result
//! ends up verbatim in failure notifications.

use std::io;

/// Format `"<op> '<path>': <error> — <hint>"`.
pub(crate) fn describe_io_error(op: &str, path: &str, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path, e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" — ");
        msg.push_str(hint);
    }
    msg
}

fn hint_for(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let hint = match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-filesystem; the vault must live on one filesystem"),
            libc::EBUSY => Some("resource busy; close the note in other programs"),
            libc::ENOTEMPTY => Some("destination folder is not empty"),
            libc::EINVAL => Some("cannot move a folder into itself"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}
