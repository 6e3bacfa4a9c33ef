//! Share action: copy the page link and flash a short confirmation.
//!
//! Clipboard access sits behind a trait so the binary can wire an OSC 52
//! implementation while tests substitute a recording fake. The confirmation
//! always flashes, even when no clipboard is available.

use std::time::{Duration, Instant};

/// How long the "Copied!" confirmation stays visible.
pub const CONFIRMATION_TTL: Duration = Duration::from_millis(1200);

/// Destination for clipboard writes.
pub trait Clipboard {
    /// Write `text` to the clipboard. Returns `false` when the capability is
    /// unavailable; the share action treats that as a silent no-op.
    fn copy(&mut self, text: &str) -> bool;
}

/// Transient confirmation state for the share control.
#[derive(Debug, Default)]
pub struct ShareButton {
    copied_at: Option<Instant>,
}

impl ShareButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `link` and start the confirmation window.
    pub fn trigger(&mut self, clipboard: &mut dyn Clipboard, link: &str) {
        let _ = clipboard.copy(link);
        self.copied_at = Some(Instant::now());
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation_visible_at(Instant::now())
    }

    /// Whether the confirmation is still within its window at `now`.
    pub fn confirmation_visible_at(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < CONFIRMATION_TTL)
            .unwrap_or(false)
    }
}
