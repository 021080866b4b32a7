//! Process-wide interrupt flag.
//! The Ctrl-C handler sets it; batch runs check it between items so a long
//! batch stops at the next item boundary instead of mid-move.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request that the current batch stop (idempotent).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}
