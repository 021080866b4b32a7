//! Batch archive/unarchive over a list of items.
//! Items are processed one at a time; each outcome is independent and nothing is
//! rolled back when a later item fails.

use tracing::{info, warn};

use crate::shutdown;

use super::mover::{Direction, MoveOutcome, Mover};
use super::prompt::OverwritePrompt;
use super::vault::Vault;

/// Aggregate result of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<MoveOutcome>,
    /// Items never attempted because an interrupt arrived first.
    pub skipped: usize,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// The closing count notification, e.g. `Archived 3 of 4 items`.
    pub fn summary(&self, direction: Direction) -> String {
        let verb = match direction {
            Direction::Archive => "Archived",
            Direction::Unarchive => "Restored",
        };
        let total = self.attempted() + self.skipped;
        let noun = if total == 1 { "item" } else { "items" };
        let mut msg = format!("{verb} {} of {total} {noun}", self.succeeded());
        if self.skipped > 0 {
            msg.push_str(&format!(" ({} skipped after interrupt)", self.skipped));
        }
        msg
    }
}

/// Apply `direction` to every path in order, handing each outcome to
/// `on_outcome` as soon as it is known.
pub fn run_batch<V, S>(
    mover: &Mover<'_, V>,
    paths: &[S],
    direction: Direction,
    prompt: &mut dyn OverwritePrompt,
    mut on_outcome: impl FnMut(&MoveOutcome),
) -> BatchReport
where
    V: Vault + ?Sized,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();

    for (idx, path) in paths.iter().enumerate() {
        if shutdown::is_requested() {
            report.skipped = paths.len() - idx;
            warn!(remaining = report.skipped, "interrupt requested; stopping batch");
            break;
        }
        let outcome = mover.run(path.as_ref(), direction, prompt);
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    info!(
        attempted = report.attempted(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        skipped = report.skipped,
        "batch finished"
    );
    report
}
