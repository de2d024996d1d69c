//! Integration tests for active-section tracking and palette switching.

use pitchdeck::deck::{palette_for, SectionRegistry};
use pitchdeck::engine::{ActiveSectionTracker, ExtentObserver};

fn tracker_over_standard_deck(viewport: u16) -> (ActiveSectionTracker, SectionRegistry) {
    let mut registry = SectionRegistry::standard();
    registry.resolve_extents(viewport);
    let tracker = ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
    (tracker, registry)
}

#[test]
fn test_defaults_to_hero_before_any_observation() {
    let registry = SectionRegistry::standard();
    let tracker = ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
    assert_eq!(tracker.active_id(&registry), "hero");
}

#[test]
fn test_midpoint_in_storytelling_activates_it() {
    let (mut tracker, registry) = tracker_over_standard_deck(40);
    let storytelling = registry.index_of("storytelling").unwrap();
    let extent = registry.extent(storytelling).unwrap();

    // Scroll so the viewport midpoint lands inside storytelling's extent.
    let scroll = extent.top + extent.height / 2.0 - 20.0;
    tracker.observe(&registry, scroll, 40);

    assert_eq!(tracker.active_id(&registry), "storytelling");
    assert_eq!(
        palette_for(tracker.active_id(&registry)),
        palette_for("storytelling")
    );
    assert_ne!(
        palette_for(tracker.active_id(&registry)),
        palette_for("hero")
    );
}

#[test]
fn test_every_section_becomes_active_at_its_center() {
    let (mut tracker, registry) = tracker_over_standard_deck(40);

    for index in 0..registry.len() {
        let extent = registry.extent(index).unwrap();
        let scroll = extent.top + extent.height / 2.0 - 20.0;
        tracker.observe(&registry, scroll, 40);
        assert_eq!(tracker.active_index(), index);
    }
}

#[test]
fn test_exactly_one_section_active_per_position() {
    let (mut tracker, registry) = tracker_over_standard_deck(40);

    // Sweep the whole document; every section must become active somewhere.
    let mut seen = vec![false; registry.len()];
    let max = registry.max_scroll(40);
    let mut scroll = 0.0;
    while scroll <= max {
        tracker.observe(&registry, scroll, 40);
        seen[tracker.active_index()] = true;
        scroll += 7.0;
    }
    assert!(seen.iter().all(|&s| s));
}
