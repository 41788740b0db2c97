//! Clipboard copy and the transient "copied" indicator.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use copypasta::{ClipboardContext, ClipboardProvider};

/// How long the "copied" indicator stays visible after a copy.
pub const INDICATOR_RESET: Duration = Duration::from_secs(2);

/// Copy `text` to the system clipboard.
///
/// Failure is a diagnostic for the caller to report; it never affects the
/// generated password.
pub fn copy(text: &str) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())
}

/// One-shot "copied" flag that clears itself after [`INDICATOR_RESET`].
///
/// Each trigger spawns a timer thread stamped with the current epoch; a
/// retrigger before the window elapses bumps the epoch, so the stale timer
/// finds itself superseded and leaves the flag alone.
#[derive(Clone, Default)]
pub struct CopiedIndicator {
    visible: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator and schedule its reset.
    pub fn trigger(&self) {
        self.visible.store(true, Ordering::SeqCst);
        let stamp = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        let visible = Arc::clone(&self.visible);
        let epoch = Arc::clone(&self.epoch);
        thread::spawn(move || {
            thread::sleep(INDICATOR_RESET);
            if epoch.load(Ordering::SeqCst) == stamp {
                visible.store(false, Ordering::SeqCst);
            }
        });
    }

    /// Hide immediately, invalidating any pending reset.
    pub fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.visible.store(false, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_hides_after_the_window() {
        let indicator = CopiedIndicator::new();
        assert!(!indicator.is_visible());

        indicator.trigger();
        assert!(indicator.is_visible());

        thread::sleep(INDICATOR_RESET + Duration::from_millis(400));
        assert!(!indicator.is_visible());
    }

    #[test]
    fn retrigger_supersedes_the_pending_reset() {
        let indicator = CopiedIndicator::new();
        indicator.trigger();
        thread::sleep(Duration::from_millis(1500));

        // Restart the window; the first timer fires ~500ms from now and
        // must not clear the flag.
        indicator.trigger();
        thread::sleep(Duration::from_millis(900));
        assert!(indicator.is_visible());

        thread::sleep(Duration::from_millis(1600));
        assert!(!indicator.is_visible());
    }

    #[test]
    fn clear_cancels_outright() {
        let indicator = CopiedIndicator::new();
        indicator.trigger();
        indicator.clear();
        assert!(!indicator.is_visible());
    }
}
