//! Config module.
//! Provides configuration types, default paths and XML loading/saving.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, OverwritePolicy};
pub use xml::{load_config, load_config_from_xml_path, save_archive_folder};

/// Archive folder used when nothing is configured.
pub const ARCHIVE_FOLDER_DEFAULT: &str = "Archive";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "VAULT_ARCHIVER_CONFIG";
