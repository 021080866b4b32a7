//! Overwrite confirmation.
//!
//! When a move would land on an existing item the mover asks an
//! [`OverwritePrompt`]. Answering `true` trashes the existing item and lets the
//! move continue; `false` cancels.

use std::io::{self, BufRead, Write};
use tracing::debug;

pub trait OverwritePrompt {
    /// Ask whether `existing` (a vault path) may be replaced by `incoming`.
    fn confirm_overwrite(&mut self, existing: &str, incoming: &str) -> bool;
}

/// Fixed answer, used for `--yes` / `--no` and non-interactive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl OverwritePrompt for FixedAnswer {
    fn confirm_overwrite(&mut self, _existing: &str, _incoming: &str) -> bool {
        self.0
    }
}

/// Asks on the terminal. Anything other than `y`/`yes` declines, including EOF.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for TerminalPrompt<R, W> {
    fn confirm_overwrite(&mut self, existing: &str, incoming: &str) -> bool {
        let shown = write!(
            self.output,
            "'{existing}' already exists. Move it to trash and replace it with '{incoming}'? [y/N] "
        )
        .and_then(|()| self.output.flush());
        if let Err(e) = shown {
            debug!(error = %e, existing = %existing, "could not show overwrite prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}
