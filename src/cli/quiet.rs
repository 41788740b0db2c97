//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag - suppresses warnings and decorations
static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppress warnings and non-essential output)
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdout is a tty (interactive)
pub fn is_stdout_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Returns true when output should be the bare password only.
/// True in quiet mode or when stdout is piped somewhere.
pub fn plain_output() -> bool {
    enabled() || !is_stdout_tty()
}
