//! Status bar widget for the bottom row: active section, position, hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::deck::SectionRegistry;
use crate::tui::Theme;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the active section and contextual help.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        registry: &SectionRegistry,
        active_index: usize,
        status_message: &str,
        theme: &Theme,
    ) {
        let section_label = registry
            .id_at(active_index)
            .unwrap_or("hero");

        let mut spans = vec![
            Span::styled(
                format!(" {section_label} "),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}/{} ", active_index + 1, registry.len()),
                Style::default().fg(theme.text_secondary),
            ),
        ];

        if status_message.is_empty() {
            spans.push(Span::styled(
                " ↑↓ sections | j/k scroll | ? help | q quit",
                Style::default().fg(theme.text_muted),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {status_message}"),
                Style::default().fg(theme.text),
            ));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
            area,
        );
    }
}
