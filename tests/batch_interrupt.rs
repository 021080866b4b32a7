// Kept in its own test binary: the interrupt flag is process-wide and never resets.
use assert_fs::prelude::*;
use assert_fs::TempDir;
use vault_archiver::{run_batch, shutdown, Direction, DiskVault, FixedAnswer, Mover};

#[test]
fn interrupted_batch_skips_remaining_items() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    for p in ["a.md", "Notes/b.md", "c.md"] {
        dir.child(p).write_str(p)?;
    }
    let vault = DiskVault::open(dir.path())?;
    let mover = Mover::new(&vault, "Archive");

    shutdown::request();
    let mut seen = 0;
    let report = run_batch(
        &mover,
        &["a.md", "Notes/b.md", "c.md"],
        Direction::Archive,
        &mut FixedAnswer(true),
        |_| seen += 1,
    );

    assert_eq!(seen, 0);
    assert_eq!(report.attempted(), 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.summary(Direction::Archive), "Archived 0 of 3 items (3 skipped after interrupt)");
    dir.child("a.md").assert("a.md");
    dir.child("Notes/b.md").assert("Notes/b.md");
    dir.child("c.md").assert("c.md");
    assert!(!dir.child("Archive").path().exists());
    Ok(())
}
