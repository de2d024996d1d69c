//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting the help overlay's key listing with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SECTION NAVIGATION ===
    NextSection,
    PreviousSection,
    FirstSection,
    LastSection,

    // === FREE SCROLLING ===
    ScrollDown,
    ScrollUp,

    // === CONTENT ===
    OpenContentPrompt,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Get the action ID string used in the help overlay.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NextSection => "next_section",
            Self::PreviousSection => "previous_section",
            Self::FirstSection => "first_section",
            Self::LastSection => "last_section",
            Self::ScrollDown => "scroll_down",
            Self::ScrollUp => "scroll_up",
            Self::OpenContentPrompt => "open_content_prompt",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// Human-readable description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NextSection => "Jump to the next section",
            Self::PreviousSection => "Jump to the previous section",
            Self::FirstSection => "Jump to the first section",
            Self::LastSection => "Jump to the last section",
            Self::ScrollDown => "Scroll down a few rows",
            Self::ScrollUp => "Scroll up a few rows",
            Self::OpenContentPrompt => "Fetch a page from the content API",
            Self::ToggleHelp => "Show or hide this help",
            Self::Quit => "Leave the presentation",
            Self::Cancel => "Dismiss the current overlay",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_deck_shortcuts();
        registry
    }

    /// Register all shortcuts for the deck context.
    fn register_deck_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "deck";

        // === SECTION NAVIGATION ===
        self.register(ctx, K::Down, M::NONE, Action::NextSection);
        self.register(ctx, K::Right, M::NONE, Action::NextSection);
        self.register(ctx, K::PageDown, M::NONE, Action::NextSection);
        self.register(ctx, K::Char(' '), M::NONE, Action::NextSection);
        self.register(ctx, K::Up, M::NONE, Action::PreviousSection);
        self.register(ctx, K::Left, M::NONE, Action::PreviousSection);
        self.register(ctx, K::PageUp, M::NONE, Action::PreviousSection);
        self.register(ctx, K::Home, M::NONE, Action::FirstSection);
        self.register(ctx, K::End, M::NONE, Action::LastSection);

        // === FREE SCROLLING (vim keys) ===
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);

        // === CONTENT ===
        self.register(ctx, K::Char('o'), M::NONE, Action::OpenContentPrompt);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// All bindings for the given context, for the help overlay.
    #[must_use]
    pub fn bindings_for(&self, context: &str) -> Vec<(KeyBinding, Action)> {
        let mut entries: Vec<(KeyBinding, Action)> = self
            .bindings
            .iter()
            .filter(|((ctx, _), _)| ctx == context)
            .map(|((_, binding), action)| (*binding, *action))
            .collect();
        entries.sort_by_key(|(_, action)| action.id());
        entries
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(registry.lookup("deck", event), Some(Action::NextSection));

        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(registry.lookup("deck", event), Some(Action::Quit));
    }

    #[test]
    fn test_section_jump_keys() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup("deck", KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(Action::NextSection)
        );
        assert_eq!(
            registry.lookup("deck", KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(Action::PreviousSection)
        );
        assert_eq!(
            registry.lookup("deck", KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
            Some(Action::FirstSection)
        );
        assert_eq!(
            registry.lookup("deck", KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
            Some(Action::LastSection)
        );
    }

    #[test]
    fn test_unknown_context_has_no_bindings() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(registry.lookup("other", event), None);
    }

    #[test]
    fn test_matches() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(registry.matches("deck", event, Action::ToggleHelp));
        assert!(!registry.matches("deck", event, Action::Quit));
    }
}
