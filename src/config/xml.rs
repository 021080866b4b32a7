//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes the file back when the archive folder setting changes.
//!
//! Example:
//! <config>
//!   <vault>/home/me/Notes</vault>
//!   <archive_folder>Archive</archive_folder>
//!   <log_level>normal</log_level>
//!   <log_file>/home/me/.local/share/vault_archiver/vault_archiver.log</log_file>
//! </config>
//!
//! Relative `vault` and `log_file` values resolve against the config file's directory.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use quick_xml::se::to_string as to_xml_string;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::archive::validate_archive_folder;

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::CONFIG_ENV;

/// Struct mirroring the XML config.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vault: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    archive_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_file: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn anchor(base: Option<&Path>, value: &str) -> PathBuf {
    let p = PathBuf::from(value);
    match base {
        Some(dir) if p.is_relative() => dir.join(p),
        _ => p,
    }
}

// Map XmlConfig -> Config. Missing fields keep their defaults.
fn xml_to_config(parsed: XmlConfig, base: Option<&Path>) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(v) = non_empty(parsed.vault.as_deref()) {
        cfg.vault = Some(anchor(base, v));
    }
    if let Some(f) = non_empty(parsed.archive_folder.as_deref()) {
        cfg.archive_folder = validate_archive_folder(f).context("invalid <archive_folder>")?;
    }
    if let Some(l) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = l.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    if let Some(lf) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(anchor(base, lf));
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, path.parent()).with_context(|| format!("config xml '{}'", path.display()))
}

/// Load the config from its usual location.
///
/// Returns `Ok(None)` when the default file does not exist. A file named by
/// `VAULT_ARCHIVER_CONFIG` must exist.
pub fn load_config() -> Result<Option<Config>> {
    let path = default_config_path()?;
    if !path.exists() {
        if std::env::var_os(CONFIG_ENV).is_some() {
            bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
        }
        debug!("no config at {}; using defaults", path.display());
        return Ok(None);
    }
    debug!("loading config from {}", path.display());
    load_config_from_xml_path(&path).map(Some)
}

/// Persist a new archive folder into the config at `path`, keeping the other
/// settings already there. The folder is validated first; an invalid value
/// leaves the file untouched.
pub fn save_archive_folder(path: &Path, folder: &str) -> Result<String> {
    let folder = validate_archive_folder(folder)?;

    let mut xml: XmlConfig = if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config xml '{}'", path.display()))?;
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?
    } else {
        XmlConfig::default()
    };
    xml.archive_folder = Some(folder.clone());

    if path_has_symlink_ancestor(path)? {
        bail!("Refusing to write config: ancestor of {} is a symlink", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let body = to_xml_string(&xml).context("serialize config xml")?;
    fs::write(path, format!("{body}\n")).with_context(|| format!("write config xml '{}'", path.display()))?;
    info!(folder = %folder, config = %path.display(), "saved archive folder");
    Ok(folder)
}
