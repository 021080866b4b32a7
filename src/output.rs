use owo_colors::OwoColorize;

use crate::archive::MoveOutcome;

/// User-facing notifications on stdout/stderr. Colors are enabled only when
/// stdout is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain line (no prefix), for listings users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Show the notification for one move.
pub fn notify(outcome: &MoveOutcome) {
    if outcome.success {
        print_success(&outcome.message);
    } else {
        print_error(&outcome.message);
    }
}
