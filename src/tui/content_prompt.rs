//! Slug prompt for fetching a page from the content API.
//!
//! While this prompt is open it owns the keyboard: characters go into the
//! slug field, so section-navigation keys never fire from inside it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Text-input overlay for a page slug.
#[derive(Default)]
pub struct ContentPrompt {
    slug: String,
}

impl ContentPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for ContentPrompt {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => {
                if self.slug.is_empty() {
                    Some(ComponentEvent::Cancelled)
                } else {
                    Some(ComponentEvent::PageRequested(self.slug.clone()))
                }
            }
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Backspace => {
                self.slug.pop();
                None
            }
            KeyCode::Char(c) => {
                self.slug.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(50, 20, area);
        f.render_widget(Clear, popup);

        let lines = vec![
            Line::from(Span::styled(
                format!("Slug: {}█", self.slug),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: fetch | Esc: cancel",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Fetch page from CMS"),
            );
        f.render_widget(paragraph, popup);
    }
}
