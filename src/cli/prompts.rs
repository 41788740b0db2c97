//! Centralized warning and prompt messages for CLI output.

use super::quiet;

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Copied to clipboard");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}
