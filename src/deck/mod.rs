//! The deck model: sections, their rendered extents, and per-section palettes.

pub mod palette;
pub mod registry;
pub mod section;

pub use palette::{palette_for, SectionPalette};
pub use registry::SectionRegistry;
pub use section::{Extent, Section};
