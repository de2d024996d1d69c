//! Keyboard/programmatic section navigation.
//!
//! Maps discrete navigation intents to an authoritative jump to a section's
//! start row. A settle guard serializes jumps: while a programmatic scroll is
//! in flight, new intents are dropped outright rather than queued, so holding
//! an arrow key cannot compound into overshooting jumps. Independently, the
//! current index is passively resynchronized from the raw scroll position
//! whenever the guard is clear.

use std::time::Instant;

use tracing::debug;

use crate::constants::NAV_SETTLE;
use crate::deck::SectionRegistry;

/// A discrete navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    First,
    Last,
}

/// Owns the navigation state: the current section index and the settle guard.
#[derive(Debug)]
pub struct Navigator {
    current_index: usize,
    navigating_until: Option<Instant>,
}

impl Navigator {
    /// Starts at the first section with the guard clear.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_index: 0,
            navigating_until: None,
        }
    }

    /// Index of the section the navigator considers current.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a programmatic scroll is still settling at `now`.
    #[must_use]
    pub fn is_navigating(&self, now: Instant) -> bool {
        self.navigating_until.is_some_and(|until| now < until)
    }

    /// Target index for an intent, clamped to the registry bounds.
    #[must_use]
    fn target_index(&self, intent: NavIntent, last_index: usize) -> usize {
        match intent {
            NavIntent::Next => (self.current_index + 1).min(last_index),
            NavIntent::Previous => self.current_index.saturating_sub(1),
            NavIntent::First => 0,
            NavIntent::Last => last_index,
        }
    }

    /// Applies a navigation intent.
    ///
    /// Returns the document row to smooth-scroll to, or `None` when the
    /// intent was dropped: guard still set, target unchanged, or the target
    /// section's extent not yet resolved. A successful jump updates the
    /// current index and arms the guard for the settle window.
    pub fn handle_intent(
        &mut self,
        intent: NavIntent,
        registry: &SectionRegistry,
        now: Instant,
    ) -> Option<f32> {
        if registry.is_empty() {
            return None;
        }
        if self.is_navigating(now) {
            debug!(?intent, "navigation intent dropped while settling");
            return None;
        }

        let target = self.target_index(intent, registry.last_index());
        if target == self.current_index {
            return None;
        }
        // Unmounted target: drop the intent without touching state.
        let extent = registry.extent(target)?;

        self.current_index = target;
        self.navigating_until = Some(now + NAV_SETTLE);
        debug!(target, row = extent.top, "navigating to section");
        Some(extent.top)
    }

    /// Passively resynchronizes the current index from the raw scroll
    /// position, using the section containing the viewport's vertical
    /// midpoint. Skipped entirely while the guard is set so the resync cannot
    /// fight an in-flight programmatic scroll.
    pub fn resync_from_scroll(
        &mut self,
        registry: &SectionRegistry,
        scroll_y: f32,
        viewport_rows: u16,
        now: Instant,
    ) {
        if self.is_navigating(now) {
            return;
        }
        let midpoint = scroll_y + f32::from(viewport_rows) / 2.0;
        if let Some(index) = registry.index_at(midpoint) {
            self.current_index = index;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn resolved_registry() -> SectionRegistry {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(40);
        registry
    }

    #[test]
    fn test_next_advances_and_targets_section_start() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        let row = nav.handle_intent(NavIntent::Next, &registry, now);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(row, Some(40.0));
    }

    #[test]
    fn test_rapid_next_is_dropped_while_settling() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        assert!(nav.handle_intent(NavIntent::Next, &registry, now).is_some());
        // Second press lands inside the settle window.
        let again = now + Duration::from_millis(100);
        assert_eq!(nav.handle_intent(NavIntent::Next, &registry, again), None);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_guard_clears_after_settle() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        nav.handle_intent(NavIntent::Next, &registry, now);
        let later = now + NAV_SETTLE + Duration::from_millis(1);
        assert!(!nav.is_navigating(later));
        assert!(nav.handle_intent(NavIntent::Next, &registry, later).is_some());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let mut now = Instant::now();

        // Hammer past both ends; index must never leave the registry range.
        for intent in [NavIntent::Previous, NavIntent::Previous, NavIntent::First] {
            nav.handle_intent(intent, &registry, now);
            assert!(nav.current_index() < registry.len());
            now += NAV_SETTLE + Duration::from_millis(1);
        }
        for _ in 0..registry.len() + 3 {
            nav.handle_intent(NavIntent::Next, &registry, now);
            assert!(nav.current_index() < registry.len());
            now += NAV_SETTLE + Duration::from_millis(1);
        }
        assert_eq!(nav.current_index(), registry.last_index());
    }

    #[test]
    fn test_last_jumps_to_final_section() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        let row = nav.handle_intent(NavIntent::Last, &registry, now);
        assert_eq!(nav.current_index(), registry.last_index());
        assert_eq!(row, Some(40.0 * registry.last_index() as f32));
    }

    #[test]
    fn test_first_from_first_is_a_no_op() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        assert_eq!(nav.handle_intent(NavIntent::First, &registry, now), None);
        // No-op must not arm the guard.
        assert!(!nav.is_navigating(now));
    }

    #[test]
    fn test_unresolved_extent_drops_intent() {
        let registry = SectionRegistry::standard();
        let mut nav = Navigator::new();
        let now = Instant::now();

        assert_eq!(nav.handle_intent(NavIntent::Next, &registry, now), None);
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_navigating(now));
    }

    #[test]
    fn test_resync_follows_scroll_midpoint() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        // Midpoint 100 + 20 = 120 -> section index 3.
        nav.resync_from_scroll(&registry, 100.0, 40, now);
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn test_resync_suppressed_while_navigating() {
        let registry = resolved_registry();
        let mut nav = Navigator::new();
        let now = Instant::now();

        nav.handle_intent(NavIntent::Next, &registry, now);
        nav.resync_from_scroll(&registry, 400.0, 40, now + Duration::from_millis(10));
        assert_eq!(nav.current_index(), 1);
    }
}
