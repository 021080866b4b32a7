//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler,
//! opens the vault and dispatches the subcommand.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use vault_archiver::archive::{
    is_archived, list_archived, run_batch, Direction, DiskVault, FixedAnswer, MoveOutcome, Mover,
    OverwritePrompt, TerminalPrompt,
};
use vault_archiver::cli::{Args, Command};
use vault_archiver::config::{default_config_path, load_config, save_archive_folder, CONFIG_ENV};
use vault_archiver::output as out;
use vault_archiver::{shutdown, ArchiverError, Config, OverwritePolicy};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        return print_config();
    }
    // Config file first, then CLI overrides (CLI wins). set-folder skips the
    // file so it works before one exists.
    let mut cfg = if matches!(args.command, Some(Command::SetFolder { .. })) {
        Config::default()
    } else {
        load_config()
            .inspect_err(|e| out::print_error(&format!("{e:#}")))?
            .unwrap_or_default()
    };
    args.apply_overrides(&mut cfg)
        .inspect_err(|e| out::print_error(&format!("{e:#}")))?;

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard is dropped on Ctrl-C too so buffered file logs get flushed.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        if let Err(e) = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current item...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        }) {
            debug!(error = %e, "could not install interrupt handler");
        }
    }

    debug!("Starting vault_archiver: {:?}", args);

    let result = match args.command.clone() {
        Some(Command::SetFolder { name }) => set_folder(&name),
        Some(Command::Archive { paths }) => move_paths(&cfg, &paths, Direction::Archive),
        Some(Command::Unarchive { paths }) => move_paths(&cfg, &paths, Direction::Unarchive),
        Some(Command::Status { paths }) => status(&cfg, &paths),
        Some(Command::List) => list(&cfg),
        None => Err(anyhow!("no command given; see --help")),
    };

    if let Err(e) = &result {
        match e.downcast_ref::<ArchiverError>() {
            Some(am) => error!(code = am.code(), kind = am.kind(), error = %am, "run failed"),
            None => error!(error = ?e, "run failed"),
        }
    }

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config() -> Result<()> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {}", PathBuf::from(p).display()));
        return Ok(());
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default vault_archiver config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet; `set-folder` creates one.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
    Ok(())
}

fn set_folder(name: &str) -> Result<()> {
    let path = default_config_path()?;
    match save_archive_folder(&path, name) {
        Ok(folder) => {
            out::print_success(&format!("Archive folder set to '{}' ({})", folder, path.display()));
            Ok(())
        }
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            Err(e)
        }
    }
}

fn open_vault(cfg: &Config) -> Result<DiskVault> {
    let root = match &cfg.vault {
        Some(v) => v.clone(),
        None => std::env::current_dir()?,
    };
    DiskVault::open(&root).map_err(|e| {
        out::print_error(&e.to_string());
        e.into()
    })
}

fn make_prompt(policy: OverwritePolicy) -> Box<dyn OverwritePrompt> {
    match policy {
        OverwritePolicy::Always => Box::new(FixedAnswer(true)),
        OverwritePolicy::Never => Box::new(FixedAnswer(false)),
        OverwritePolicy::Ask if atty::is(atty::Stream::Stdin) => Box::new(TerminalPrompt::stdio()),
        OverwritePolicy::Ask => {
            debug!("stdin is not a terminal; existing destinations will not be replaced");
            Box::new(FixedAnswer(false))
        }
    }
}

/// Resolve CLI paths into vault paths; unresolvable ones become failure outcomes.
fn resolve_all(vault: &DiskVault, paths: &[PathBuf]) -> (Vec<String>, Vec<MoveOutcome>) {
    let mut resolved = Vec::with_capacity(paths.len());
    let mut rejected = Vec::new();
    for p in paths {
        match vault.relativize(p) {
            Ok(rel) => resolved.push(rel),
            Err(e) => {
                let outcome = MoveOutcome::failed(p.display().to_string(), &e);
                out::notify(&outcome);
                rejected.push(outcome);
            }
        }
    }
    (resolved, rejected)
}

fn move_paths(cfg: &Config, paths: &[PathBuf], direction: Direction) -> Result<()> {
    let vault = open_vault(cfg)?;
    let (resolved, rejected) = resolve_all(&vault, paths);

    let mover = Mover::new(&vault, &cfg.archive_folder).dry_run(cfg.dry_run);
    let mut prompt = make_prompt(cfg.overwrite);
    let mut report = run_batch(&mover, &resolved, direction, prompt.as_mut(), out::notify);
    report.outcomes.extend(rejected);

    if paths.len() > 1 {
        out::print_info(&report.summary(direction));
    }
    Ok(())
}

fn status(cfg: &Config, paths: &[PathBuf]) -> Result<()> {
    let vault = open_vault(cfg)?;
    let (resolved, _) = resolve_all(&vault, paths);
    for rel in resolved {
        let line = if is_archived(&rel, &cfg.archive_folder) {
            format!("{rel}\tarchived\tunarchive available")
        } else {
            format!("{rel}\tnot archived\tarchive available")
        };
        out::print_user(&line);
    }
    Ok(())
}

fn list(cfg: &Config) -> Result<()> {
    let vault = open_vault(cfg)?;
    let items = list_archived(&vault, &cfg.archive_folder);
    if items.is_empty() {
        out::print_info(&format!("Nothing archived under '{}'", cfg.archive_folder));
    }
    for item in items {
        out::print_user(&format!("{} -> {}", item.archived, item.restores_to));
    }
    Ok(())
}
