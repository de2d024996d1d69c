//! Chrome theme for the UI frame around the deck.
//!
//! Section palettes color the background scene; this theme colors the
//! chrome: navigation bar, status bar, overlays, and body text. It follows
//! the OS dark/light preference unless the config pins a mode.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors for the UI chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Brand/emphasis color for titles and the navigation bar
    pub primary: Color,
    /// Accent for highlights and the active section dot
    pub accent: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text for labels and less important content
    pub text_secondary: Color,
    /// Muted text for hints and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for overlays and the scrolled nav backdrop
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured display mode into a theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark theme, the presentation's native look.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Rgb(0x40, 0xD9, 0xFF),

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(18, 18, 24),
        }
    }

    /// Light theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(0, 120, 180),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(235, 235, 240),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
