//! Shared scroll/pointer signal source.
//!
//! One instance lives for the whole presentation. Input handlers write the
//! latest raw values on every event; the background renderer and section
//! tracker read them every frame. No debouncing: consumers are cheap to
//! re-invoke and do their own downstream throttling if they need it.

/// Pointer position normalized to `[-1, 1]` on both axes.
///
/// The vertical axis is inverted so that "up" is positive, matching the
/// camera-space convention the background animation math expects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

/// Latest raw scroll offset and normalized pointer coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSignals {
    /// Current scroll offset into the document, in rows.
    pub scroll_y: f32,
    /// Latest normalized pointer position.
    pub pointer: PointerPosition,
}

impl InputSignals {
    /// Creates the signal source with scroll at the top and pointer centered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current scroll offset.
    pub fn record_scroll(&mut self, offset: f32) {
        self.scroll_y = offset;
    }

    /// Records a pointer movement at the given terminal cell.
    pub fn record_pointer(&mut self, column: u16, row: u16, viewport: (u16, u16)) {
        self.pointer = normalize_pointer(column, row, viewport);
    }
}

/// Normalizes a terminal cell position into `[-1, 1]` pointer coordinates.
///
/// Column 0 maps to `x = -1`, the rightmost column to `x = 1`; row 0 maps to
/// `y = 1` (top of screen is "up"), the bottom row to `y = -1`.
#[must_use]
pub fn normalize_pointer(column: u16, row: u16, viewport: (u16, u16)) -> PointerPosition {
    let (cols, rows) = viewport;
    let span_x = f32::from(cols.saturating_sub(1)).max(1.0);
    let span_y = f32::from(rows.saturating_sub(1)).max(1.0);
    PointerPosition {
        x: (f32::from(column.min(cols.saturating_sub(1))) / span_x) * 2.0 - 1.0,
        y: -((f32::from(row.min(rows.saturating_sub(1))) / span_y) * 2.0 - 1.0),
    }
}
