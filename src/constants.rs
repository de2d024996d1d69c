//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the navigation timing parameters.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PitchDeck";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "pitchdeck";

/// How long a programmatic section jump holds the navigation guard.
///
/// New navigation intents arriving inside this window are dropped, not
/// queued, so rapid key presses cannot compound into overshooting jumps.
pub const NAV_SETTLE: Duration = Duration::from_millis(800);

/// Default frame interval for the animation loop (about 30 fps).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Scroll distance, in rows, of one mouse-wheel notch.
pub const WHEEL_SCROLL_ROWS: f32 = 3.0;

/// Fraction of a section that must be visible before its content animates in.
pub const REVEAL_THRESHOLD: f32 = 0.3;

/// Scroll offset, in rows, past which the top navigation bar gains a backdrop.
pub const NAV_BACKDROP_SCROLL: f32 = 5.0;
