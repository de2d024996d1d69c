//! Top navigation bar: brand marks and section progress dots.
//!
//! Transparent over the background until the deck has been scrolled a few
//! rows, then it gains an opaque backdrop so the brand stays readable.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::NAV_BACKDROP_SCROLL;
use crate::deck::{palette_for, SectionRegistry};
use crate::tui::Theme;

/// Top bar widget.
pub struct NavBar;

impl NavBar {
    /// Render the bar across the given single-row area.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        registry: &SectionRegistry,
        active_index: usize,
        scroll_y: f32,
        theme: &Theme,
    ) {
        let scrolled = scroll_y > NAV_BACKDROP_SCROLL;
        let base = if scrolled {
            Style::default().bg(theme.surface)
        } else {
            Style::default()
        };

        let brand = Line::from(vec![
            Span::styled(
                " visor",
                base.fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("lab", base.fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::styled("  ×  skro", base.fg(theme.text)),
            Span::styled("ler", base.fg(theme.primary)),
        ]);
        f.render_widget(Paragraph::new(brand).style(base), area);

        // Section dots, right-aligned; the active dot takes its section color.
        let mut dots: Vec<Span> = Vec::with_capacity(registry.len() * 2 + 1);
        for (index, section) in registry.sections().iter().enumerate() {
            if index == active_index {
                dots.push(Span::styled(
                    "●",
                    base.fg(palette_for(section.id).primary),
                ));
            } else {
                dots.push(Span::styled("·", base.fg(theme.text_muted)));
            }
            dots.push(Span::styled(" ", base));
        }
        f.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Right),
            area,
        );
    }
}
