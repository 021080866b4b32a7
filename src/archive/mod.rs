//! Archive operations: modularized.

mod batch;
mod folder_name;
mod helpers;
mod listing;
mod mover;
pub mod path;
mod prompt;
mod vault;

pub use batch::{run_batch, BatchReport};
pub use folder_name::validate_archive_folder;
pub use listing::{list_archived, ArchivedItem};
pub use mover::{Direction, MoveOutcome, Mover};
pub use path::{archive_destination, is_archived, unarchive_destination};
pub use prompt::{FixedAnswer, OverwritePrompt, TerminalPrompt};
pub use vault::{DiskVault, Vault, TRASH_FOLDER};
