//! Viewport entry detection with one-shot subscriptions.
//!
//! The host's layout pipeline computes, on every scroll or layout pass,
//! how much of each watched region is visible and delivers the result
//! as a [`VisibilitySnapshot`]. The observer compares fractions against
//! each region's threshold and fires a subscription's callback at most
//! once, removing the watch as it fires. There is no exit event:
//! leaving the viewport after entry is not observed by anyone.
//!
//! # Usage
//!
//! ```ignore
//! use curtain_core::{Region, ViewportObserver, VisibilitySnapshot};
//!
//! let mut observer = ViewportObserver::new();
//! let region = Region::new(0.3)?;
//! let subscription = observer.observe(&region, || println!("entered"));
//!
//! // Each layout pass:
//! let mut snapshot = VisibilitySnapshot::new();
//! snapshot.record(region.id(), 0.45);
//! observer.process(&snapshot); // fires, disarms the watch
//!
//! // Teardown at any time, before or after entry:
//! observer.unsubscribe(&subscription);
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::{Region, RegionId};

/// Per-region visible fractions computed by one layout or scroll pass.
///
/// A region absent from the snapshot carries no data for that pass and
/// cannot fire; it is not the same as a fraction of zero.
#[derive(Debug, Clone, Default)]
pub struct VisibilitySnapshot {
    fractions: HashMap<RegionId, f32>,
}

impl VisibilitySnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the visible fraction for one region, clamped to 0.0..=1.0.
    pub fn record(&mut self, region: RegionId, fraction: f32) {
        self.fractions.insert(region, fraction.clamp(0.0, 1.0));
    }

    /// The recorded fraction for `region`, if this pass produced one.
    pub fn fraction(&self, region: RegionId) -> Option<f32> {
        self.fractions.get(&region).copied()
    }

    /// Number of regions with data in this snapshot.
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// Whether the snapshot carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// Handle returned by [`ViewportObserver::observe`].
///
/// Pass it back to [`ViewportObserver::unsubscribe`] to cancel the
/// watch. Handles stay valid after the watch fires; cancelling one that
/// already fired (or was already cancelled) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    region: RegionId,
}

impl Subscription {
    /// The region this subscription watches.
    pub fn region(&self) -> RegionId {
        self.region
    }
}

struct Watch {
    threshold: f32,
    on_enter: Box<dyn FnOnce()>,
}

/// One-shot threshold watcher over host-reported visibility.
///
/// Single-threaded by design: all mutation happens inside [`observe`],
/// [`unsubscribe`], and [`process`] calls made by the host. Once
/// [`unsubscribe`] returns, the callback can never run, because firing
/// requires the watch to still be in the map.
///
/// [`observe`]: ViewportObserver::observe
/// [`unsubscribe`]: ViewportObserver::unsubscribe
/// [`process`]: ViewportObserver::process
pub struct ViewportObserver {
    watches: HashMap<RegionId, Watch>,
    fail_open: bool,
}

impl ViewportObserver {
    /// Observer backed by a live visibility source.
    pub fn new() -> Self {
        Self {
            watches: HashMap::new(),
            fail_open: false,
        }
    }

    /// Observer for hosts that cannot report visibility at all.
    ///
    /// Every `observe` call fires its callback immediately and arms
    /// nothing, so content degrades to "visible from the start" instead
    /// of staying hidden forever.
    pub fn fail_open() -> Self {
        warn!("no visibility source available; regions will reveal immediately");
        Self {
            watches: HashMap::new(),
            fail_open: true,
        }
    }

    /// Whether this observer reveals immediately instead of watching.
    pub fn is_fail_open(&self) -> bool {
        self.fail_open
    }

    /// Watch `region` until its visible fraction first reaches the
    /// region's threshold, then invoke `on_enter` exactly once.
    ///
    /// Observing a region that already has an armed watch replaces the
    /// old watch without firing it.
    pub fn observe(&mut self, region: &Region, on_enter: impl FnOnce() + 'static) -> Subscription {
        let subscription = Subscription { region: region.id() };
        if self.fail_open {
            debug!(region = ?region.id(), "fail-open reveal");
            on_enter();
            return subscription;
        }

        debug!(region = ?region.id(), threshold = region.threshold(), "watch armed");
        self.watches.insert(
            region.id(),
            Watch {
                threshold: region.threshold(),
                on_enter: Box::new(on_enter),
            },
        );
        subscription
    }

    /// Cancel a watch. Safe at any time and idempotent: unknown or
    /// already-fired subscriptions are a no-op, and no callback runs
    /// once this returns.
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        self.watches.remove(&subscription.region);
    }

    /// Whether `region` still has an armed watch.
    pub fn is_watching(&self, region: RegionId) -> bool {
        self.watches.contains_key(&region)
    }

    /// Number of armed watches.
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Deliver one visibility pass: fire and disarm every watch whose
    /// region's fraction reached its threshold.
    ///
    /// Watches without data in this snapshot stay armed untouched.
    pub fn process(&mut self, snapshot: &VisibilitySnapshot) {
        // Collect entered regions first so the map is not mutated while
        // it is being walked; sort for a stable firing order.
        let mut entered: Vec<RegionId> = self
            .watches
            .iter()
            .filter_map(|(id, watch)| {
                snapshot
                    .fraction(*id)
                    .filter(|fraction| *fraction >= watch.threshold)
                    .map(|_| *id)
            })
            .collect();
        entered.sort_unstable();

        for id in entered {
            if let Some(watch) = self.watches.remove(&id) {
                debug!(region = ?id, "region entered viewport");
                (watch.on_enter)();
            }
        }
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_observer() -> (ViewportObserver, Region, Subscription, Arc<AtomicUsize>) {
        let mut observer = ViewportObserver::new();
        let region = Region::new(0.3).unwrap();
        let fires = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fires);
        let subscription = observer.observe(&region, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        (observer, region, subscription, fires)
    }

    fn snapshot_with(region: RegionId, fraction: f32) -> VisibilitySnapshot {
        let mut snapshot = VisibilitySnapshot::new();
        snapshot.record(region, fraction);
        snapshot
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let (mut observer, region, _sub, fires) = counting_observer();

        // Exactly at the threshold qualifies.
        observer.process(&snapshot_with(region.id(), 0.3));
        assert_eq!(fires.load(Ordering::Relaxed), 1);
        assert!(!observer.is_watching(region.id()));

        // Later qualifying passes cannot fire again.
        observer.process(&snapshot_with(region.id(), 1.0));
        observer.process(&snapshot_with(region.id(), 0.9));
        assert_eq!(fires.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_below_threshold_stays_armed() {
        let (mut observer, region, _sub, fires) = counting_observer();

        observer.process(&snapshot_with(region.id(), 0.29));
        assert_eq!(fires.load(Ordering::Relaxed), 0);
        assert!(observer.is_watching(region.id()));
    }

    #[test]
    fn test_missing_fraction_is_not_zero() {
        let (mut observer, region, _sub, fires) = counting_observer();

        // Snapshot with data only for some other region.
        let other = Region::new(0.5).unwrap();
        observer.process(&snapshot_with(other.id(), 1.0));

        assert_eq!(fires.load(Ordering::Relaxed), 0);
        assert!(observer.is_watching(region.id()));
    }

    #[test]
    fn test_zero_threshold_fires_on_first_data() {
        let mut observer = ViewportObserver::new();
        let region = Region::new(0.0).unwrap();
        let fires = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fires);
        observer.observe(&region, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        // Even a fully offscreen report counts for a zero threshold.
        observer.process(&snapshot_with(region.id(), 0.0));
        assert_eq!(fires.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_unsubscribe_before_entry_silences_callback() {
        let (mut observer, region, subscription, fires) = counting_observer();

        observer.unsubscribe(&subscription);
        observer.process(&snapshot_with(region.id(), 1.0));

        assert_eq!(fires.load(Ordering::Relaxed), 0);
        assert_eq!(observer.watch_count(), 0);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let (mut observer, region, subscription, fires) = counting_observer();

        observer.unsubscribe(&subscription);
        observer.unsubscribe(&subscription);

        // Also a no-op after the watch fired.
        let mut observer = ViewportObserver::new();
        let fires2 = Arc::clone(&fires);
        let subscription = observer.observe(&region, move || {
            fires2.fetch_add(1, Ordering::Relaxed);
        });
        observer.process(&snapshot_with(region.id(), 0.5));
        observer.unsubscribe(&subscription);
        observer.unsubscribe(&subscription);
        assert_eq!(fires.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_fail_open_fires_immediately() {
        let mut observer = ViewportObserver::fail_open();
        assert!(observer.is_fail_open());

        let region = Region::new(0.3).unwrap();
        let fires = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fires);
        observer.observe(&region, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        // Fired during observe; nothing armed, no snapshot needed.
        assert_eq!(fires.load(Ordering::Relaxed), 1);
        assert_eq!(observer.watch_count(), 0);
    }

    #[test]
    fn test_reobserving_replaces_watch_without_firing() {
        let (mut observer, region, _sub, fires) = counting_observer();

        let replacement_fires = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&replacement_fires);
        observer.observe(&region, move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(observer.watch_count(), 1);

        observer.process(&snapshot_with(region.id(), 1.0));
        assert_eq!(fires.load(Ordering::Relaxed), 0);
        assert_eq!(replacement_fires.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_independent_regions_fire_independently() {
        let mut observer = ViewportObserver::new();
        let near = Region::new(0.2).unwrap();
        let far = Region::new(0.8).unwrap();

        let fired: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
        let near_counter = Arc::clone(&fired);
        let far_counter = Arc::clone(&fired);
        observer.observe(&near, move || {
            near_counter.fetch_add(1, Ordering::Relaxed);
        });
        observer.observe(&far, move || {
            far_counter.fetch_add(10, Ordering::Relaxed);
        });

        let mut snapshot = VisibilitySnapshot::new();
        snapshot.record(near.id(), 0.5);
        snapshot.record(far.id(), 0.5);
        observer.process(&snapshot);

        // Only the 0.2 threshold was met.
        assert_eq!(fired.load(Ordering::Relaxed), 1);
        assert!(observer.is_watching(far.id()));
    }

    #[test]
    fn test_snapshot_clamps_fractions() {
        let region = RegionId::new();
        let mut snapshot = VisibilitySnapshot::new();
        snapshot.record(region, 1.7);
        assert_eq!(snapshot.fraction(region), Some(1.0));

        snapshot.record(region, -0.4);
        assert_eq!(snapshot.fraction(region), Some(0.0));
    }
}
