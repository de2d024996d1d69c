//! Integration tests for section palette resolution.

use pitchdeck::deck::{palette_for, SectionRegistry};

#[test]
fn test_resolution_is_total_over_the_deck() {
    let registry = SectionRegistry::standard();
    for section in registry.sections() {
        // Every registered id resolves to a defined palette.
        let palette = palette_for(section.id);
        assert_ne!(palette.primary, palette.secondary, "{}", section.id);
    }
}

#[test]
fn test_unregistered_id_yields_hero_palette() {
    let hero = palette_for("hero");
    assert_eq!(palette_for("careers"), hero);
    assert_eq!(palette_for(""), hero);
    assert_eq!(palette_for("HERO"), hero);
}

#[test]
fn test_adjacent_sections_get_distinct_palettes() {
    let registry = SectionRegistry::standard();
    let sections = registry.sections();
    for pair in sections.windows(2) {
        assert_ne!(
            palette_for(pair[0].id),
            palette_for(pair[1].id),
            "{} vs {}",
            pair[0].id,
            pair[1].id
        );
    }
}
