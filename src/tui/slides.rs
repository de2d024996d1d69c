//! Section content rendering with entrance animation.
//!
//! Each section's content fades and slides in once enough of its extent is
//! visible, and animates back out when it leaves. The gating runs through
//! the viewport-observer seam, the same one the active-section tracker uses.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::REVEAL_THRESHOLD;
use crate::deck::{palette_for, SectionRegistry};
use crate::engine::{ExtentObserver, ObserverOptions, SubscriptionId, ViewportObserver};
use crate::tui::background::dim;
use crate::tui::Theme;

/// How much reveal progress one frame adds or removes.
const REVEAL_STEP: f32 = 0.08;

/// Rows of downward offset at zero progress.
const SLIDE_ROWS: f32 = 4.0;

/// Per-section entrance-animation state.
pub struct RevealState {
    observer: ExtentObserver,
    subscriptions: Vec<SubscriptionId>,
    visible: Vec<bool>,
    progress: Vec<f32>,
}

impl RevealState {
    /// Subscribes every section with the reveal threshold.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        let mut observer = ExtentObserver::new();
        let subscriptions = (0..section_count)
            .map(|index| observer.subscribe(index, ObserverOptions::reveal(REVEAL_THRESHOLD)))
            .collect();
        Self {
            observer,
            subscriptions,
            visible: vec![false; section_count],
            progress: vec![0.0; section_count],
        }
    }

    /// Polls visibility and advances each section's progress one frame.
    pub fn tick(&mut self, registry: &SectionRegistry, scroll_y: f32, viewport_rows: u16) {
        for change in self.observer.poll(registry, scroll_y, viewport_rows) {
            if let Some(slot) = self.visible.get_mut(change.section_index) {
                *slot = change.visible;
            }
        }
        for (index, progress) in self.progress.iter_mut().enumerate() {
            let target = if self.visible[index] { 1.0 } else { 0.0 };
            if *progress < target {
                *progress = (*progress + REVEAL_STEP).min(1.0);
            } else if *progress > target {
                *progress = (*progress - REVEAL_STEP).max(0.0);
            }
        }
    }

    /// Entrance progress for a section, 0 (hidden) to 1 (settled).
    #[must_use]
    pub fn progress(&self, index: usize) -> f32 {
        self.progress.get(index).copied().unwrap_or(0.0)
    }

    /// Releases every subscription. Call on teardown.
    pub fn release(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.observer.unsubscribe(id);
        }
    }
}

impl Drop for RevealState {
    fn drop(&mut self) {
        self.release();
    }
}

/// Draws every section that intersects the viewport at the current scroll.
pub fn render_slides(
    frame: &mut Frame,
    area: Rect,
    registry: &SectionRegistry,
    reveal: &RevealState,
    scroll_y: f32,
    theme: &Theme,
) {
    for (index, section) in registry.sections().iter().enumerate() {
        let Some(extent) = registry.extent(index) else {
            continue;
        };
        // Off-screen sections cost nothing.
        if extent.bottom() < scroll_y || extent.top > scroll_y + f32::from(area.height) {
            continue;
        }

        let progress = reveal.progress(index);
        let palette = palette_for(section.id);
        let slide = (1.0 - progress) * SLIDE_ROWS;
        let base_row = extent.top - scroll_y + f32::from(area.height) * 0.28 + slide;
        let alpha = 0.25 + progress * 0.75;

        let mut lines: Vec<(String, Style)> = Vec::with_capacity(section.bullets.len() + 3);
        lines.push((
            section.kicker.to_string(),
            Style::default().fg(dim(palette.secondary, alpha)),
        ));
        lines.push((
            section.title.to_string(),
            Style::default()
                .fg(dim(palette.primary, alpha))
                .add_modifier(Modifier::BOLD),
        ));
        lines.push((String::new(), Style::default()));
        for bullet in section.bullets {
            lines.push((
                (*bullet).to_string(),
                Style::default().fg(dim(theme.text, alpha)),
            ));
        }

        for (offset, (text, style)) in lines.into_iter().enumerate() {
            let row = base_row + offset as f32;
            if row < 0.0 || row >= f32::from(area.height) {
                continue;
            }
            let target = Rect::new(area.x, area.y + row as u16, area.width, 1);
            frame.render_widget(
                Paragraph::new(text).style(style).alignment(Alignment::Center),
                target,
            );
        }
    }
}
