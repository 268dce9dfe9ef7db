//! One-way reveal state shared between a section and its watch callback.

use std::sync::atomic::{AtomicBool, Ordering};

/// Monotonic reveal flag: once set it never clears.
///
/// Each section owns one latch for its whole lifetime and shares it,
/// as `Arc<RevealLatch>`, with the entry callback of its viewport
/// subscription. That callback is the only writer; everything else
/// reads the flag when deriving styles. Scrolling away after entry
/// changes nothing because no code path stores `false`.
#[derive(Debug, Default)]
pub struct RevealLatch {
    revealed: AtomicBool,
}

impl RevealLatch {
    /// New latch in the unrevealed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record viewport entry. Idempotent: calling this any number of
    /// times is the same as calling it once.
    pub fn on_enter(&self) {
        self.revealed.store(true, Ordering::Relaxed);
    }

    /// Whether the owning section has ever entered the viewport.
    pub fn is_revealed(&self) -> bool {
        self.revealed.load(Ordering::Relaxed)
    }
}

// Latches cross into boxed callbacks; keep them Send + Sync.
static_assertions::assert_impl_all!(RevealLatch: Send, Sync);
