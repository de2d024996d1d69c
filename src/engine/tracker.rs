//! Active-section tracking.
//!
//! One section is "active" at a time: whichever extent currently intersects
//! the focus line at 50% of the viewport height. The tracker subscribes every
//! section through the viewport-observer seam and applies deliveries in
//! order, so if layout thrash ever reports two sections in the same tick the
//! last-delivered one wins. Deliveries arrive in registry order, which makes
//! the winner the highest-index intersecting section for any scroll position.

use crate::deck::SectionRegistry;
use crate::engine::observer::{ObserverOptions, SubscriptionId, ViewportObserver};

/// Tracks which section is currently in focus.
pub struct ActiveSectionTracker {
    observer: Box<dyn ViewportObserver>,
    subscriptions: Vec<SubscriptionId>,
    active_index: usize,
}

impl ActiveSectionTracker {
    /// Subscribes every registered section on the focus line.
    ///
    /// Before any observation fires the first section is active.
    #[must_use]
    pub fn new(section_count: usize, mut observer: Box<dyn ViewportObserver>) -> Self {
        let subscriptions = (0..section_count)
            .map(|index| observer.subscribe(index, ObserverOptions::focus_line()))
            .collect();
        Self {
            observer,
            subscriptions,
            active_index: 0,
        }
    }

    /// Feeds the current scroll state through the observer and updates the
    /// active section. Call once per frame.
    pub fn observe(&mut self, registry: &SectionRegistry, scroll_y: f32, viewport_rows: u16) {
        for change in self.observer.poll(registry, scroll_y, viewport_rows) {
            if change.visible {
                // Last write wins on transient overlap.
                self.active_index = change.section_index;
            }
        }
    }

    /// Index of the active section.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Id of the active section; the first section before any observation.
    #[must_use]
    pub fn active_id<'a>(&self, registry: &'a SectionRegistry) -> &'a str {
        registry
            .id_at(self.active_index)
            .or_else(|| registry.id_at(0))
            .unwrap_or("hero")
    }

    /// Releases every subscription. Call on teardown.
    pub fn release(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.observer.unsubscribe(id);
        }
    }
}

impl Drop for ActiveSectionTracker {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette_for;
    use crate::engine::observer::ExtentObserver;

    fn tracker_with_registry(viewport: u16) -> (ActiveSectionTracker, SectionRegistry) {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(viewport);
        let tracker =
            ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
        (tracker, registry)
    }

    #[test]
    fn test_initial_active_is_first_section() {
        let registry = SectionRegistry::standard();
        let tracker = ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
        assert_eq!(tracker.active_id(&registry), "hero");
    }

    #[test]
    fn test_scrolling_to_section_activates_it() {
        let (mut tracker, registry) = tracker_with_registry(40);

        // storytelling is index 2, rows 80..120; put the focus line inside.
        tracker.observe(&registry, 80.0, 40);
        assert_eq!(tracker.active_id(&registry), "storytelling");
    }

    #[test]
    fn test_active_palette_switches_with_section() {
        let (mut tracker, registry) = tracker_with_registry(40);

        let hero_palette = palette_for(tracker.active_id(&registry));
        tracker.observe(&registry, 80.0, 40);
        let storytelling_palette = palette_for(tracker.active_id(&registry));
        assert_ne!(hero_palette, storytelling_palette);
    }

    #[test]
    fn test_deterministic_for_a_given_scroll_position() {
        let (mut first, registry) = tracker_with_registry(40);
        let (mut second, _) = tracker_with_registry(40);

        for scroll in [0.0, 55.0, 119.9, 120.0, 400.0] {
            first.observe(&registry, scroll, 40);
            second.observe(&registry, scroll, 40);
            assert_eq!(first.active_index(), second.active_index(), "at {scroll}");
        }
    }

    #[test]
    fn test_unresolved_extents_keep_default() {
        let registry = SectionRegistry::standard();
        let mut tracker =
            ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
        tracker.observe(&registry, 500.0, 40);
        assert_eq!(tracker.active_index(), 0);
    }
}
