//! Viewport observation: visibility detection for section extents.
//!
//! The observer is the platform seam. Consumers subscribe a section with a
//! set of options and receive visibility-changed notifications as the
//! scroll position and layout evolve; they never inspect extents directly.
//! The terminal implementation recomputes intersections once per frame from
//! the registry's resolved extents.

use crate::deck::SectionRegistry;

/// Options controlling when a subscription reports "visible".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the section's extent that must overlap the effective
    /// viewport. Zero means any positive overlap counts.
    pub threshold: f32,
    /// Grows (positive) or shrinks (negative) the effective viewport by this
    /// fraction of its height, applied to both the top and bottom edges.
    pub root_margin: f32,
    /// Once visible, stay reported as visible forever.
    pub trigger_once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: 0.0,
            trigger_once: false,
        }
    }
}

impl ObserverOptions {
    /// Options for the active-section focus line: the viewport shrunk by 50%
    /// from both edges, leaving a single line at mid-height.
    #[must_use]
    pub const fn focus_line() -> Self {
        Self {
            threshold: 0.0,
            root_margin: -0.5,
            trigger_once: false,
        }
    }

    /// Options for entrance-animation gating.
    #[must_use]
    pub const fn reveal(threshold: f32) -> Self {
        Self {
            threshold,
            root_margin: 0.0,
            trigger_once: false,
        }
    }
}

/// Handle identifying one observation subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// A visibility transition delivered by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub subscription: SubscriptionId,
    pub section_index: usize,
    pub visible: bool,
}

/// Platform-abstracted visibility detection.
///
/// One implementation exists per target platform; consumers hold the trait
/// object and release their subscriptions on teardown.
pub trait ViewportObserver {
    /// Registers interest in a section's visibility.
    fn subscribe(&mut self, section_index: usize, options: ObserverOptions) -> SubscriptionId;

    /// Releases a subscription. Further polls deliver nothing for it.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Recomputes visibility and returns the transitions since the last poll,
    /// in subscription order.
    fn poll(
        &mut self,
        registry: &SectionRegistry,
        scroll_y: f32,
        viewport_rows: u16,
    ) -> Vec<VisibilityChange>;

    /// Latest known visibility for a subscription.
    fn is_visible(&self, id: SubscriptionId) -> bool;
}

struct Subscription {
    id: SubscriptionId,
    section_index: usize,
    options: ObserverOptions,
    visible: bool,
    active: bool,
}

/// Terminal implementation: intersects resolved extents with the effective
/// viewport each poll.
#[derive(Default)]
pub struct ExtentObserver {
    subscriptions: Vec<Subscription>,
    next_id: usize,
}

impl ExtentObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn intersects(extent_top: f32, extent_bottom: f32, options: ObserverOptions, scroll_y: f32, viewport: f32) -> bool {
        let margin = options.root_margin * viewport;
        let effective_top = scroll_y - margin;
        let effective_bottom = scroll_y + viewport + margin;

        if effective_bottom <= effective_top {
            // Degenerate band: the focus line. Half-open containment keeps the
            // boundary between adjacent sections deterministic.
            return effective_top >= extent_top && effective_top < extent_bottom;
        }

        let overlap = extent_bottom.min(effective_bottom) - extent_top.max(effective_top);
        if options.threshold > 0.0 {
            let height = (extent_bottom - extent_top).max(f32::EPSILON);
            overlap / height >= options.threshold
        } else {
            overlap > 0.0
        }
    }
}

impl ViewportObserver for ExtentObserver {
    fn subscribe(&mut self, section_index: usize, options: ObserverOptions) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            section_index,
            options,
            visible: false,
            active: true,
        });
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if let Some(sub) = self.subscriptions.iter_mut().find(|s| s.id == id) {
            sub.active = false;
        }
    }

    fn poll(
        &mut self,
        registry: &SectionRegistry,
        scroll_y: f32,
        viewport_rows: u16,
    ) -> Vec<VisibilityChange> {
        let viewport = f32::from(viewport_rows);
        let mut changes = Vec::new();

        for sub in &mut self.subscriptions {
            if !sub.active {
                continue;
            }
            // An unresolved extent never fires; "no data yet" is not an error.
            let Some(extent) = registry.extent(sub.section_index) else {
                continue;
            };
            if sub.options.trigger_once && sub.visible {
                continue;
            }

            let visible = Self::intersects(
                extent.top,
                extent.bottom(),
                sub.options,
                scroll_y,
                viewport,
            );
            if visible != sub.visible {
                sub.visible = visible;
                changes.push(VisibilityChange {
                    subscription: sub.id,
                    section_index: sub.section_index,
                    visible,
                });
            }
        }

        changes
    }

    fn is_visible(&self, id: SubscriptionId) -> bool {
        self.subscriptions
            .iter()
            .find(|s| s.id == id)
            .is_some_and(|s| s.active && s.visible)
    }
}
