//! Quiet flag and tty checks shared by the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn isatty(fd: libc::c_int) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Standard input is a terminal.
pub fn is_interactive() -> bool {
    isatty(libc::STDIN_FILENO)
}

/// Standard output is a terminal.
pub fn stdout_is_tty() -> bool {
    isatty(libc::STDOUT_FILENO)
}

/// Prompts are skipped when quiet or when nobody is there to answer.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}

