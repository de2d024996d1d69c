//! Per-section color palettes driving the background visualization.
//!
//! A static table maps every section id to a `{primary, secondary, emissive}`
//! triple. Resolution is a total function: unknown ids fall back to the hero
//! palette, so the background always has something to render with.

use ratatui::style::Color;

/// A named visual palette for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPalette {
    /// Dominant color: particles, headline accents, the ball body.
    pub primary: Color,
    /// Supporting color: orbit lines, ball seams, secondary text accents.
    pub secondary: Color,
    /// Glow color mixed into the wave plane.
    pub emissive: Color,
}

const GREEN: SectionPalette = SectionPalette {
    primary: Color::Rgb(0x22, 0xC5, 0x5E),
    secondary: Color::Rgb(0x16, 0xA3, 0x4A),
    emissive: Color::Rgb(0x10, 0xB9, 0x81),
};

const MAGENTA: SectionPalette = SectionPalette {
    primary: Color::Rgb(0xFF, 0x00, 0xFF),
    secondary: Color::Rgb(0xFF, 0x66, 0xFF),
    emissive: Color::Rgb(0xCC, 0x00, 0xCC),
};

const BLUE: SectionPalette = SectionPalette {
    primary: Color::Rgb(0x00, 0xBF, 0xFF),
    secondary: Color::Rgb(0x40, 0xD9, 0xFF),
    emissive: Color::Rgb(0x00, 0x99, 0xCC),
};

const PURPLE: SectionPalette = SectionPalette {
    primary: Color::Rgb(0x8B, 0x00, 0xFF),
    secondary: Color::Rgb(0xA8, 0x55, 0xF7),
    emissive: Color::Rgb(0x93, 0x33, 0xEA),
};

const ORANGE: SectionPalette = SectionPalette {
    primary: Color::Rgb(0xFF, 0x6B, 0x35),
    secondary: Color::Rgb(0xFF, 0x8C, 0x42),
    emissive: Color::Rgb(0xFF, 0x45, 0x00),
};

const TEAL: SectionPalette = SectionPalette {
    primary: Color::Rgb(0x00, 0xCE, 0xD1),
    secondary: Color::Rgb(0x20, 0xB2, 0xAA),
    emissive: Color::Rgb(0x00, 0x8B, 0x8B),
};

/// Resolves the palette for a section id.
///
/// Total over all strings: ids outside the deck resolve to the hero palette.
#[must_use]
pub fn palette_for(id: &str) -> SectionPalette {
    match id {
        "requirements" | "structure" | "seo-impact" | "about" => MAGENTA,
        "storytelling" | "premium" | "measurable" | "investment" => BLUE,
        "process" | "delivery" => PURPLE,
        "experience" => ORANGE,
        "adoption" => TEAL,
        // "hero", "final-slide", and anything unregistered
        _ => GREEN,
    }
}
