use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use vault_archiver::config::{load_config, save_archive_folder, CONFIG_ENV};
use vault_archiver::{default_config_path, LogLevel};

fn with_env<T>(value: &std::path::Path, f: impl FnOnce() -> T) -> T {
    // Serialized via #[serial]; no other thread reads the environment meanwhile.
    unsafe {
        std::env::set_var(CONFIG_ENV, value);
    }
    let out = f();
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
    out
}

#[test]
#[serial]
fn env_path_is_used_verbatim() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    let resolved = with_env(&cfg, || default_config_path().unwrap());
    assert_eq!(resolved, cfg);
}

#[test]
#[serial]
fn env_config_is_loaded() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let cfg_path = base.join("config.xml");
    fs::write(
        &cfg_path,
        "<config>\n  <vault>vault</vault>\n  <archive_folder>Attic</archive_folder>\n  <log_level>info</log_level>\n</config>\n",
    )
    .unwrap();

    let cfg = with_env(&cfg_path, || load_config().unwrap().unwrap());
    assert_eq!(cfg.vault, Some(base.join("vault")));
    assert_eq!(cfg.archive_folder, "Attic");
    assert_eq!(cfg.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn missing_env_config_is_an_error() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.xml");
    let err = with_env(&missing, || load_config().unwrap_err());
    assert!(err.to_string().contains("missing file"));
}

#[test]
#[serial]
fn saved_folder_is_loaded_back() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    save_archive_folder(&cfg_path, "Notes/Archive").unwrap();

    let cfg = with_env(&cfg_path, || load_config().unwrap().unwrap());
    assert_eq!(cfg.archive_folder, "Notes/Archive");
}
