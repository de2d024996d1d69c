//! Ordered registry of sections with lazily resolved extents.
//!
//! The registry owns the deck's navigation order and the mapping from
//! document rows back to sections. Extents are resolved on the first layout
//! pass and re-resolved whenever the terminal is resized; navigation logic
//! only ever reads them.

use crate::deck::section::{standard_deck, Extent, Section};

/// Ordered list of sections plus their resolved extents.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    extents: Vec<Option<Extent>>,
}

impl SectionRegistry {
    /// Creates a registry over the given sections. Extents start unresolved.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        let extents = vec![None; sections.len()];
        Self { sections, extents }
    }

    /// Creates the registry for the standard proposal deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_deck())
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the last section.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.sections.len().saturating_sub(1)
    }

    /// The section at `index`, if any.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// All sections in presentation order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The id of the section at `index`, if any.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&'static str> {
        self.sections.get(index).map(|s| s.id)
    }

    /// The registry index of the section with the given id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// The resolved extent of the section at `index`.
    ///
    /// `None` both for out-of-range indices and for sections whose extent
    /// has not been resolved yet (no layout pass has happened).
    #[must_use]
    pub fn extent(&self, index: usize) -> Option<Extent> {
        self.extents.get(index).copied().flatten()
    }

    /// Resolves every section's extent against the current viewport height.
    ///
    /// Each section occupies exactly one viewport of rows, matching the
    /// full-viewport slides of the presentation. Called on mount and again
    /// on every terminal resize.
    pub fn resolve_extents(&mut self, viewport_rows: u16) {
        let height = f32::from(viewport_rows.max(1));
        for (index, slot) in self.extents.iter_mut().enumerate() {
            *slot = Some(Extent {
                top: index as f32 * height,
                height,
            });
        }
    }

    /// Total height of the scrollable document, in rows.
    #[must_use]
    pub fn document_height(&self) -> f32 {
        self.extents
            .iter()
            .filter_map(|e| e.map(|e| e.bottom()))
            .fold(0.0, f32::max)
    }

    /// Largest valid scroll offset for the given viewport height.
    #[must_use]
    pub fn max_scroll(&self, viewport_rows: u16) -> f32 {
        (self.document_height() - f32::from(viewport_rows)).max(0.0)
    }

    /// Index of the section whose extent contains the given document row.
    #[must_use]
    pub fn index_at(&self, row: f32) -> Option<usize> {
        self.extents
            .iter()
            .position(|e| e.is_some_and(|e| e.contains(row)))
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_unresolved_before_layout() {
        let registry = SectionRegistry::standard();
        assert_eq!(registry.extent(0), None);
        assert_eq!(registry.index_at(0.0), None);
    }

    #[test]
    fn test_resolve_extents_tiles_viewport() {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(40);

        let first = registry.extent(0).unwrap();
        assert_eq!(first.top, 0.0);
        assert_eq!(first.height, 40.0);

        let second = registry.extent(1).unwrap();
        assert_eq!(second.top, 40.0);

        assert_eq!(registry.document_height(), 40.0 * registry.len() as f32);
    }

    #[test]
    fn test_resize_re_resolves() {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(40);
        registry.resolve_extents(25);
        assert_eq!(registry.extent(1).unwrap().top, 25.0);
    }

    #[test]
    fn test_index_at_row() {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(40);
        assert_eq!(registry.index_at(0.0), Some(0));
        assert_eq!(registry.index_at(39.9), Some(0));
        assert_eq!(registry.index_at(40.0), Some(1));
        assert_eq!(registry.index_at(1_000_000.0), None);
    }

    #[test]
    fn test_index_of_id() {
        let registry = SectionRegistry::standard();
        assert_eq!(registry.index_of("hero"), Some(0));
        assert_eq!(registry.index_of("storytelling"), Some(2));
        assert_eq!(registry.index_of("nope"), None);
    }

    #[test]
    fn test_max_scroll() {
        let mut registry = SectionRegistry::standard();
        registry.resolve_extents(40);
        let expected = 40.0 * (registry.len() as f32 - 1.0);
        assert_eq!(registry.max_scroll(40), expected);
    }
}
