//! Component trait pattern for TUI overlays.
//!
//! Overlays are self-contained UI elements that manage their own state,
//! handle keyboard input while they are open, and emit events to
//! communicate with the parent state.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by overlay components.
#[derive(Debug, Clone)]
pub enum ComponentEvent {
    /// User submitted a page slug to fetch from the content API
    PageRequested(String),
    /// User cancelled without making changes
    Cancelled,
    /// Component closed naturally (e.g., help overlay dismissed)
    Closed,
}
