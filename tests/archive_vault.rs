use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::fs;
use std::path::Path;
use vault_archiver::archive::TRASH_FOLDER;
use vault_archiver::{run_batch, Direction, DiskVault, FixedAnswer, Mover};
use walkdir::WalkDir;

fn snapshot(root: &Path) -> Vec<(String, Option<String>)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().display().to_string();
            let body = e.file_type().is_file().then(|| fs::read_to_string(e.path()).unwrap());
            (rel, body)
        })
        .collect()
}

#[test]
fn archive_then_unarchive_restores_original_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Projects/2024/plan.md").write_str("plan")?;
    let vault = DiskVault::open(dir.path())?;
    let mover = Mover::new(&vault, "Archive");

    let out = mover.archive("Projects/2024/plan.md", &mut FixedAnswer(false));
    assert!(out.success, "{}", out.message);
    dir.child("Archive/Projects/2024/plan.md").assert("plan");
    assert!(!dir.child("Projects/2024/plan.md").path().exists());

    let out = mover.unarchive("Archive/Projects/2024/plan.md", &mut FixedAnswer(false));
    assert!(out.success, "{}", out.message);
    assert_eq!(out.dest.as_deref(), Some("Projects/2024/plan.md"));
    dir.child("Projects/2024/plan.md").assert("plan");
    Ok(())
}

#[test]
fn unarchive_recreates_deleted_parent_folders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Archive/Gone/Deep/n.md").write_str("n")?;
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive").unarchive("Archive/Gone/Deep/n.md", &mut FixedAnswer(false));
    assert!(out.success, "{}", out.message);
    dir.child("Gone/Deep/n.md").assert("n");
    Ok(())
}

#[test]
fn archiving_archived_item_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Archive/a.md").write_str("a")?;
    dir.child("b.md").write_str("b")?;
    let before = snapshot(dir.path());
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive").archive("Archive/a.md", &mut FixedAnswer(true));

    assert!(!out.success);
    assert_eq!(out.message, "Archive/a.md is already archived");
    assert_eq!(snapshot(dir.path()), before);
    Ok(())
}

#[test]
fn cancelled_overwrite_leaves_both_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("a.md").write_str("new")?;
    dir.child("Archive/a.md").write_str("old")?;
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive").archive("a.md", &mut FixedAnswer(false));

    assert!(!out.success);
    assert_eq!(out.message, "Cancelled: Archive/a.md already exists");
    dir.child("a.md").assert("new");
    dir.child("Archive/a.md").assert("old");
    assert!(!dir.child(TRASH_FOLDER).path().exists());
    Ok(())
}

#[test]
fn confirmed_overwrite_trashes_old_copy() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("a.md").write_str("new")?;
    dir.child("Archive/a.md").write_str("old")?;
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive").archive("a.md", &mut FixedAnswer(true));

    assert!(out.success, "{}", out.message);
    dir.child("Archive/a.md").assert("new");
    dir.child(format!("{TRASH_FOLDER}/a.md")).assert("old");
    assert!(!dir.child("a.md").path().exists());
    Ok(())
}

#[test]
fn batch_counts_exclude_already_archived() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    for p in ["one.md", "Notes/two.md", "Notes/three.md", "Archive/four.md", "Archive/Notes/five.md"] {
        dir.child(p).write_str(p)?;
    }
    let vault = DiskVault::open(dir.path())?;
    let mover = Mover::new(&vault, "Archive");
    let batch = ["one.md", "Archive/four.md", "Notes/two.md", "Archive/Notes/five.md", "Notes/three.md"];

    let report = run_batch(&mover, &batch, Direction::Archive, &mut FixedAnswer(false), |_| {});

    assert_eq!(report.attempted(), 5);
    assert_eq!(report.succeeded(), 3);
    dir.child("Archive/one.md").assert("one.md");
    dir.child("Archive/Notes/two.md").assert("Notes/two.md");
    dir.child("Archive/Notes/three.md").assert("Notes/three.md");
    dir.child("Archive/Notes/five.md").assert("Archive/Notes/five.md");
    Ok(())
}

#[test]
fn dry_run_leaves_vault_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Notes/a.md").write_str("a")?;
    let before = snapshot(dir.path());
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive")
        .dry_run(true)
        .archive("Notes/a.md", &mut FixedAnswer(true));

    assert!(out.success);
    assert_eq!(out.dest.as_deref(), Some("Archive/Notes/a.md"));
    assert_eq!(snapshot(dir.path()), before);
    Ok(())
}

#[test]
fn folder_is_archived_as_a_whole() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Old/x.md").write_str("x")?;
    dir.child("Old/sub/y.md").write_str("y")?;
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Notes/Archive").archive("Old", &mut FixedAnswer(false));

    assert!(out.success, "{}", out.message);
    dir.child("Notes/Archive/Old/x.md").assert("x");
    dir.child("Notes/Archive/Old/sub/y.md").assert("y");
    Ok(())
}

#[test]
fn restoring_nested_archive_folder_keeps_archive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Archive/Archive/x.md").write_str("x")?;
    dir.child("Archive/keep.md").write_str("keep")?;
    let before = snapshot(dir.path());
    let vault = DiskVault::open(dir.path())?;

    let out = Mover::new(&vault, "Archive").unarchive("Archive/Archive", &mut FixedAnswer(true));

    assert!(!out.success);
    assert_eq!(out.message, "Archive/Archive cannot be moved onto Archive, which contains it");
    assert_eq!(snapshot(dir.path()), before);
    assert!(!dir.child(TRASH_FOLDER).path().exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn archiving_a_symlink_moves_the_link() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    dir.child("Other/real.md").write_str("real")?;
    dir.child("Notes").create_dir_all()?;
    std::os::unix::fs::symlink(dir.child("Other/real.md").path(), dir.child("Notes/link.md").path())?;
    let vault = DiskVault::open(dir.path())?;

    let rel = vault.relativize(&vault.resolve("Notes/link.md"))?;
    assert_eq!(rel, "Notes/link.md");
    let out = Mover::new(&vault, "Archive").archive(&rel, &mut FixedAnswer(false));

    assert!(out.success, "{}", out.message);
    assert!(fs::symlink_metadata(dir.child("Archive/Notes/link.md").path())?.file_type().is_symlink());
    assert!(fs::symlink_metadata(dir.child("Notes/link.md").path()).is_err());
    dir.child("Other/real.md").assert("real");
    Ok(())
}
