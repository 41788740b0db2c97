//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
