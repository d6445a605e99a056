//! User-facing messages and yes/no prompts for CLI output.

use std::io::{self, BufRead, Write};

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn that the requested length cannot hold every guarantee.
pub fn weak_composition(reason: &str) {
    warn(&format!("Warning: {reason}"));
    warn("Output keeps the requested length; some character classes may be missing.");
}

/// Interpret a y/n answer. Empty input takes `default`.
fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question on stderr. Non-interactive or quiet runs take `default`.
pub fn confirm(question: &str, default: bool) -> bool {
    if quiet::skip_prompt() {
        return default;
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    eprint!("{question} {hint}: ");
    let _ = io::stderr().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(_) => parse_answer(&input, default).unwrap_or(false),
        Err(_) => default,
    }
}

/// Clipboard unavailable: true falls back to printing, false aborts.
pub fn clipboard_fallback_prompt() -> bool {
    let fallback = confirm("Clipboard unavailable. Print to terminal instead?", true);
    if !fallback {
        eprintln!("Aborted.");
    }
    fallback
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

pub fn settings_saved() {
    if !quiet::enabled() {
        println!("Settings saved.");
    }
}
