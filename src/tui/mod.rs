//! Terminal user interface: state, event loop, and rendering.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. The loop is single-threaded and
//! cooperative: every frame it advances the scroll animation, feeds the
//! shared signals through the tracker and reveal observers, steps the
//! background simulation, and redraws.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod background;
pub mod component;
pub mod content_prompt;
pub mod help_overlay;
pub mod nav_bar;
pub mod slides;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{FRAME_INTERVAL_MS, WHEEL_SCROLL_ROWS};
use crate::content::ContentClient;
use crate::deck::{palette_for, SectionRegistry};
use crate::engine::{
    ActiveSectionTracker, ExtentObserver, InputSignals, NavIntent, Navigator, ScrollAnimator,
};
use crate::shortcuts::{Action, ShortcutRegistry};

// Re-export TUI components
pub use background::BackgroundField;
pub use component::{Component, ComponentEvent};
pub use content_prompt::ContentPrompt;
pub use help_overlay::HelpOverlay;
pub use nav_bar::NavBar;
pub use slides::{render_slides, RevealState};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Rows reserved for chrome: the nav bar on top, the status bar below.
const CHROME_ROWS: u16 = 2;

/// Currently open modal overlay, if any.
pub enum Overlay {
    Help(HelpOverlay),
    ContentPrompt(ContentPrompt),
}

/// Application state for the running presentation.
pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub registry: SectionRegistry,
    pub signals: InputSignals,
    pub scroll: ScrollAnimator,
    pub navigator: Navigator,
    pub tracker: ActiveSectionTracker,
    pub reveal: RevealState,
    pub background: BackgroundField,
    pub shortcuts: ShortcutRegistry,
    pub content: ContentClient,
    pub overlay: Option<Overlay>,
    pub status_message: String,
    pub should_quit: bool,
    /// Section id to jump to once extents resolve.
    start_section: Option<String>,
    /// Height of the deck area the extents were resolved against.
    deck_rows: u16,
    /// Full terminal size, for pointer normalization.
    viewport: (u16, u16),
}

impl AppState {
    /// Creates the presentation state from configuration.
    pub fn new(config: Config, start_section: Option<String>) -> Result<Self> {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let registry = SectionRegistry::standard();
        let tracker =
            ActiveSectionTracker::new(registry.len(), Box::new(ExtentObserver::new()));
        let reveal = RevealState::new(registry.len());
        let content = ContentClient::new(config.content.clone())?;

        Ok(Self {
            config,
            theme,
            registry,
            signals: InputSignals::new(),
            scroll: ScrollAnimator::new(),
            navigator: Navigator::new(),
            tracker,
            reveal,
            background: BackgroundField::new(),
            shortcuts: ShortcutRegistry::new(),
            content,
            overlay: None,
            status_message: String::new(),
            should_quit: false,
            start_section,
            deck_rows: 0,
            viewport: (0, 0),
        })
    }

    /// Id of the section currently in focus.
    #[must_use]
    pub fn active_id(&self) -> &str {
        self.tracker.active_id(&self.registry)
    }

    /// Re-resolves extents when the terminal size changed (mount + resize).
    pub fn layout(&mut self, cols: u16, rows: u16) {
        self.viewport = (cols, rows);
        let deck_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        if deck_rows == self.deck_rows {
            return;
        }
        self.deck_rows = deck_rows;
        self.registry.resolve_extents(deck_rows);
        self.scroll.clamp(self.registry.max_scroll(deck_rows));

        // First layout: honor a --section start position.
        if let Some(id) = self.start_section.take() {
            if let Some(index) = self.registry.index_of(&id) {
                if let Some(extent) = self.registry.extent(index) {
                    self.scroll.jump_to(extent.top);
                }
            }
        }
    }

    /// Advances every per-frame system.
    pub fn tick(&mut self, dt: f32, now: Instant) {
        self.scroll.tick();
        self.signals.record_scroll(self.scroll.offset());

        self.navigator.resync_from_scroll(
            &self.registry,
            self.signals.scroll_y,
            self.deck_rows,
            now,
        );
        self.tracker
            .observe(&self.registry, self.signals.scroll_y, self.deck_rows);
        self.reveal
            .tick(&self.registry, self.signals.scroll_y, self.deck_rows);
        self.background.tick(dt, &self.signals);
    }

    /// Applies a deck-context action.
    fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::NextSection => self.navigate(NavIntent::Next, now),
            Action::PreviousSection => self.navigate(NavIntent::Previous, now),
            Action::FirstSection => self.navigate(NavIntent::First, now),
            Action::LastSection => self.navigate(NavIntent::Last, now),
            Action::ScrollDown => {
                self.scroll
                    .scroll_by(WHEEL_SCROLL_ROWS, self.registry.max_scroll(self.deck_rows));
            }
            Action::ScrollUp => {
                self.scroll
                    .scroll_by(-WHEEL_SCROLL_ROWS, self.registry.max_scroll(self.deck_rows));
            }
            Action::OpenContentPrompt => {
                self.overlay = Some(Overlay::ContentPrompt(ContentPrompt::new()));
            }
            Action::ToggleHelp => {
                self.overlay = Some(Overlay::Help(HelpOverlay::new()));
            }
            Action::Quit => self.should_quit = true,
            Action::Cancel => {}
        }
    }

    fn navigate(&mut self, intent: NavIntent, now: Instant) {
        if let Some(row) = self.navigator.handle_intent(intent, &self.registry, now) {
            self.scroll.scroll_to(row);
        }
    }

    /// Fetches a page by slug and reports the outcome in the status bar.
    fn fetch_page(&mut self, slug: &str) {
        let Some(value) = self.content.fetch_page(slug) else {
            self.status_message = if self.content.is_enabled() {
                format!("No content for '{slug}'")
            } else {
                "Content integration is disabled".to_string()
            };
            return;
        };

        // The API answers slug queries with an array of matching pages.
        let title = value
            .get(0)
            .and_then(|page| page.pointer("/title/rendered"))
            .and_then(|title| title.as_str())
            .unwrap_or("(untitled)");
        self.status_message = format!("Fetched '{slug}': {title}");
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if mouse {
        execute!(io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(
    mut terminal: Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.layout(size.width, size.height);

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(0.1);
        last_frame = now;
        state.tick(dt, now);

        terminal.draw(|f| render(f, state))?;

        // Wait out the rest of the frame for the first event, then drain
        // whatever else queued up (mouse movement floods otherwise).
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            loop {
                handle_event(state, event::read()?);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let palette = palette_for(state.active_id());

    // Background first; everything else draws over it.
    state.background.render(f, area, &palette, &state.signals);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_slides(
        f,
        chunks[1],
        &state.registry,
        &state.reveal,
        state.signals.scroll_y,
        &state.theme,
    );
    NavBar::render(
        f,
        chunks[0],
        &state.registry,
        state.tracker.active_index(),
        state.signals.scroll_y,
        &state.theme,
    );
    StatusBar::render(
        f,
        chunks[2],
        &state.registry,
        state.tracker.active_index(),
        &state.status_message,
        &state.theme,
    );

    match &state.overlay {
        Some(Overlay::Help(overlay)) => overlay.render(f, area, &state.theme),
        Some(Overlay::ContentPrompt(prompt)) => prompt.render(f, area, &state.theme),
        None => {}
    }
}

/// Route one terminal event into the state.
fn handle_event(state: &mut AppState, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(state, key),
        Event::Mouse(mouse) => handle_mouse_event(state, mouse),
        Event::Resize(cols, rows) => state.layout(cols, rows),
        _ => {}
    }
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) {
    // Route to the open overlay first: while a text input is up it owns the
    // keyboard, so navigation shortcuts never fire from inside it.
    if let Some(overlay) = &mut state.overlay {
        let outcome = match overlay {
            Overlay::Help(help) => help.handle_input(key),
            Overlay::ContentPrompt(prompt) => prompt.handle_input(key),
        };
        match outcome {
            Some(ComponentEvent::PageRequested(slug)) => {
                state.overlay = None;
                state.fetch_page(&slug);
            }
            Some(ComponentEvent::Closed | ComponentEvent::Cancelled) => {
                state.overlay = None;
            }
            None => {}
        }
        return;
    }

    state.status_message.clear();
    if let Some(action) = state.shortcuts.lookup("deck", key) {
        state.dispatch(action, Instant::now());
    }
}

/// Handle mouse movement and wheel scrolling.
fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state
                .signals
                .record_pointer(mouse.column, mouse.row, state.viewport);
        }
        MouseEventKind::ScrollDown => {
            state
                .scroll
                .scroll_by(WHEEL_SCROLL_ROWS, state.registry.max_scroll(state.deck_rows));
        }
        MouseEventKind::ScrollUp => {
            state.scroll.scroll_by(
                -WHEEL_SCROLL_ROWS,
                state.registry.max_scroll(state.deck_rows),
            );
        }
        _ => {}
    }
}

/// Helper to create a centered rectangle
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
